use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Lee una clave de localStorage; None si no existe o no hay storage
pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

/// Borra todo el storage de la sesión (logout)
pub fn clear_storage() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}

/// Redirige a la página de login externa
pub fn redirect_to_login() {
    if let Some(win) = window() {
        let _ = win.location().set_href(crate::utils::LOGIN_PAGE);
    }
}
