/// URL del endpoint de datos (Apps Script / spreadsheet API)
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3000/exec (por defecto)
/// - Producción: via API_URL env var (.env)
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:3000/exec",
};

/// Base del enlace externo de tracking (se completa con el AWB)
pub const TRACKING_URL_BASE: &str = "https://www.delhivery.com/track-v2/package";

/// Base del enlace de mensajería saliente (se completa con el teléfono)
pub const WHATSAPP_URL_BASE: &str = "https://wa.me";

// Claves de localStorage escritas por la pantalla de login
pub const STORAGE_KEY_ROLE: &str = "role";
pub const STORAGE_KEY_PIN: &str = "pin";

/// Página de login externa (redirect cuando no hay sesión)
pub const LOGIN_PAGE: &str = "./index.html";
