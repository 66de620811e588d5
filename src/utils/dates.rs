// ============================================================================
// NORMALIZACIÓN DE FECHAS
// ============================================================================
// La fuente mezcla timestamps ISO ("2024-03-07T00:00:00") con fechas ya
// formateadas. Normalización deliberadamente "lossy": lo que no es ISO pasa
// tal cual al output.
// ============================================================================

/// Normaliza una fecha de la fuente a `DD/MM/YYYY`.
///
/// - Input ISO (contiene `T`): se toma la parte de fecha, se invierten los
///   componentes y se unen con `/`.
/// - Cualquier otro input no vacío: pasa sin cambios.
/// - Vacío: string vacío.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    if let Some((date_part, _)) = raw.split_once('T') {
        let mut parts: Vec<&str> = date_part.split('-').collect();
        parts.reverse();
        return parts.join("/");
    }

    raw.to_string()
}

/// Clave ordenable `YYYYMMDD` para una fecha `DD/MM/YYYY`.
///
/// Un string sin `/` (incluido el vacío) da clave `0`: los envíos sin fecha
/// de entrega quedan en el extremo "más antiguo" en ambas direcciones.
pub fn sort_key(date: &str) -> i64 {
    if !date.contains('/') {
        return 0;
    }

    let mut parts = date.split('/');
    let dd = parts.next().unwrap_or("");
    let mm = parts.next().unwrap_or("");
    let yy = parts.next().unwrap_or("");

    format!("{}{}{}", yy, pad2(mm), pad2(dd)).parse().unwrap_or(0)
}

fn pad2(s: &str) -> String {
    if s.len() >= 2 {
        s.to_string()
    } else {
        format!("0{}", s)
    }
}
