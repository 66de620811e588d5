use serde::{Deserialize, Serialize};

use crate::models::status::StatusClass;

/// Un envío decodificado de la hoja. Inmutable después del decode.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Shipment {
    pub awb: String,
    pub pickup_org_name: String,
    pub consignee_name: String,
    pub city: String,
    /// Fecha de pickup, `DD/MM/YYYY` o vacía
    pub pickup_date: String,
    /// Fecha de entrega, `DD/MM/YYYY` o vacía
    pub delivery_date: String,
    /// Estado crudo normalizado (MAYUSCULAS_CON_GUIONES), nunca vacío
    pub raw_status: String,
    /// Etiqueta de grupo para el usuario, nunca vacía
    pub display_group: String,
    /// Bucket grueso para estilos
    pub status_class: StatusClass,
    /// "COD", "PREPAID", ... o vacío
    pub payment_mode: String,
    /// Monto contra entrega; nunca negativo ni NaN
    pub cod_amount: f64,
    pub region_code: String,
    /// Solo dígitos, para enlaces de mensajería
    pub phone_digits: String,
}

impl Shipment {
    pub fn tracking_url(&self) -> String {
        format!("{}/{}", crate::utils::TRACKING_URL_BASE, self.awb)
    }

    pub fn whatsapp_url(&self) -> Option<String> {
        if self.phone_digits.is_empty() {
            return None;
        }
        Some(format!("{}/{}", crate::utils::WHATSAPP_URL_BASE, self.phone_digits))
    }
}
