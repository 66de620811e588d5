// ============================================================================
// CLASIFICACIÓN DE ESTADOS
// ============================================================================
// Dos derivaciones independientes del mismo token:
// - display_group: etiqueta fina para el usuario (muchos estados crudos)
// - StatusClass: bucket grueso para estilos/agrupación (3 valores fijos)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Tabla fija estado crudo -> etiqueta de grupo
const GROUP_MAP: &[(&str, &str)] = &[
    ("READY_FOR_SHIP", "Pending Pickup"),
    ("READY_FOR_PICKUP", "Pending Pickup"),
    ("READY_TO_SHIP", "Pending Pickup"),
    ("READY_TO_PICKUP", "Pending Pickup"),
    ("RETURNED_TO_ORIGIN", "RTO"),
    ("RETURNING_TO_ORIGIN", "RTO"),
];

/// Botones de filtro de estado, en orden de display
pub const ALL_STATUS_BUTTONS: &[&str] = &[
    "Pending Pickup",
    "OUT FOR DELIVERY",
    "DELIVERED",
    "RTO",
    "LOST",
    "CANCELLED",
    "SHIPPED",
];

/// Bucket grueso de estado para la UI
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum StatusClass {
    Delivered,
    Rto,
    InTransit,
}

impl StatusClass {
    /// Clasifica un estado crudo (ya normalizado a MAYUSCULAS_CON_GUIONES).
    /// El orden importa: DELIVERED gana sobre RETURN.
    pub fn classify(raw_status: &str) -> Self {
        if raw_status.contains("DELIVERED") {
            StatusClass::Delivered
        } else if raw_status.contains("RETURN") {
            StatusClass::Rto
        } else {
            StatusClass::InTransit
        }
    }

    /// Nombre de clase CSS
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusClass::Delivered => "delivered",
            StatusClass::Rto => "rto",
            StatusClass::InTransit => "in_transit",
        }
    }
}

/// Etiqueta de grupo para un estado crudo: lookup en la tabla fija,
/// o el estado con guiones bajos reemplazados por espacios.
pub fn display_group(raw_status: &str) -> String {
    for (token, label) in GROUP_MAP {
        if *token == raw_status {
            return (*label).to_string();
        }
    }
    raw_status.replace('_', " ")
}

/// Normaliza el campo de estado de la fuente: trim, mayúsculas y
/// runs de whitespace colapsados a `_`. Vacío -> PENDING.
pub fn normalize_raw_status(source: &str) -> String {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return "PENDING".to_string();
    }
    trimmed
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
