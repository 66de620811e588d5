use crate::utils::{get_item, STORAGE_KEY_PIN, STORAGE_KEY_ROLE};

/// Sesión escrita por la pantalla de login externa.
/// El rol y el PIN son inputs opacos: acá no hay lógica de autenticación.
#[derive(Clone, PartialEq, Debug)]
pub struct Session {
    pub role: String,
    pub pin: String,
}

impl Session {
    /// Carga la sesión desde localStorage; None si falta rol o PIN
    pub fn load() -> Option<Self> {
        let role = get_item(STORAGE_KEY_ROLE)?;
        let pin = get_item(STORAGE_KEY_PIN)?;
        if role.is_empty() || pin.is_empty() {
            return None;
        }
        Some(Self { role, pin })
    }

    /// Vista agregada de administrador (todas las parties) vs vista de
    /// una sola party
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
