use yew::prelude::*;

use crate::models::Session;
use crate::utils::{clear_storage, redirect_to_login};

pub struct UseSessionHandle {
    /// None mientras se redirige al login externo
    pub session: Option<Session>,
    pub logout: Callback<MouseEvent>,
}

/// Gate de sesión: lee rol y PIN de localStorage. Si falta cualquiera,
/// redirige a la página de login y el dashboard no renderiza nada.
#[hook]
pub fn use_session() -> UseSessionHandle {
    let session = use_state(Session::load);

    {
        let missing = session.is_none();
        use_effect_with(missing, move |missing| {
            if *missing {
                log::info!("🔒 Sin sesión, redirigiendo al login");
                redirect_to_login();
            }
            || ()
        });
    }

    let logout = Callback::from(move |_: MouseEvent| {
        log::info!("👋 Logout");
        clear_storage();
        redirect_to_login();
    });

    UseSessionHandle {
        session: (*session).clone(),
        logout,
    }
}
