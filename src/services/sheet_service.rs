// ============================================================================
// SHEET SERVICE - fetch + decode de filas de la hoja
// ============================================================================
// La fuente no es confiable: cada campo tiene default propio y el decode de
// una fila nunca falla. Offsets posicionales fijos (la fila trae >= 21
// celdas; las no consumidas se ignoran).
// ============================================================================

use gloo_net::http::Request;
use serde_json::Value;

use crate::models::{display_group, normalize_raw_status, Shipment, StatusClass};
use crate::utils::API_URL;

// Offsets de celda dentro de una fila
const COL_PICKUP_DATE: usize = 0;
const COL_AWB: usize = 1;
const COL_PICKUP_ORG: usize = 2;
const COL_CONSIGNEE: usize = 3;
const COL_CITY: usize = 4;
const COL_STATUS: usize = 5;
const COL_DELIVERY_DATE: usize = 6;
const COL_PAYMENT_MODE: usize = 7;
const COL_COD_AMOUNT: usize = 8;
const COL_REGION_CODE: usize = 19;
const COL_PHONE: usize = 20;

/// Obtiene y decodifica todas las filas para un PIN de acceso.
///
/// Una respuesta vacía o que no es array se trata como "sin datos"
/// (Ok con vec vacío), no como error.
pub async fn fetch_shipments(pin: &str) -> Result<Vec<Shipment>, String> {
    let encoded_pin = String::from(js_sys::encode_uri_component(pin));
    let url = format!("{}?pin={}", API_URL, encoded_pin);

    log::info!("📦 Obteniendo envíos de la hoja...");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
    }

    let body = response
        .json::<Value>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    let rows = match body.as_array() {
        Some(rows) => rows,
        None => {
            log::warn!("⚠️ Respuesta no es un array, tratando como sin datos");
            return Ok(Vec::new());
        }
    };

    let shipments: Vec<Shipment> = rows.iter().map(decode_row).collect();
    log::info!("✅ Envíos decodificados: {}", shipments.len());

    Ok(shipments)
}

/// Decodifica una fila cruda en un Shipment. Total: input malformado
/// degrada a defaults campo por campo, nunca aborta la fila.
pub fn decode_row(row: &Value) -> Shipment {
    let raw_status = normalize_raw_status(&cell_string(row, COL_STATUS).unwrap_or_default());

    Shipment {
        awb: string_or(row, COL_AWB, ""),
        pickup_org_name: string_or(row, COL_PICKUP_ORG, "Unknown"),
        consignee_name: string_or(row, COL_CONSIGNEE, "No Name"),
        city: string_or(row, COL_CITY, "No City"),
        pickup_date: crate::utils::format_date(&string_or(row, COL_PICKUP_DATE, "")),
        delivery_date: crate::utils::format_date(&string_or(row, COL_DELIVERY_DATE, "")),
        display_group: display_group(&raw_status),
        status_class: StatusClass::classify(&raw_status),
        raw_status,
        payment_mode: string_or(row, COL_PAYMENT_MODE, "").to_uppercase(),
        cod_amount: decode_amount(row, COL_COD_AMOUNT),
        region_code: string_or(row, COL_REGION_CODE, ""),
        phone_digits: string_or(row, COL_PHONE, "")
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect(),
    }
}

/// Celda como string: las celdas de la hoja llegan como string o número
fn cell_string(row: &Value, idx: usize) -> Option<String> {
    match row.get(idx)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Celda trimmeada, con default si falta o queda vacía
fn string_or(row: &Value, idx: usize, default: &str) -> String {
    let value = cell_string(row, idx)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Monto COD: quita comas de miles, parsea; inválido o negativo -> 0
fn decode_amount(row: &Value, idx: usize) -> f64 {
    let cleaned = string_or(row, idx, "0").replace(',', "");
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => n,
        _ => 0.0,
    }
}
