use yew::prelude::*;

use crate::models::Session;
use crate::services::fetch_shipments;
use crate::state::Dashboard;

pub struct UseDashboardHandle {
    pub dashboard: UseStateHandle<Dashboard>,
    pub loading: UseStateHandle<bool>,
    pub load_failed: UseStateHandle<bool>,

    // Callbacks de filtros/orden: cada uno clona, muta y re-setea el estado
    pub set_status: Callback<String>,
    pub set_party: Callback<String>,
    pub set_query: Callback<String>,
    pub toggle_sort: Callback<MouseEvent>,
}

/// Estado del dashboard + fetch único al cargar la página.
/// No hay retry ni refresh: recargar la página rearma todo.
#[hook]
pub fn use_dashboard(session: Option<Session>) -> UseDashboardHandle {
    let dashboard = use_state(Dashboard::new);
    let loading = use_state(|| true);
    let load_failed = use_state(|| false);

    // Fetch una vez cuando hay sesión
    {
        let dashboard = dashboard.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();

        use_effect_with(session, move |session_opt| {
            if let Some(session) = session_opt.clone() {
                wasm_bindgen_futures::spawn_local(async move {
                    loading.set(true);

                    match fetch_shipments(&session.pin).await {
                        Ok(records) => {
                            let mut next = (*dashboard).clone();
                            next.set_records(records);
                            dashboard.set(next);
                        }
                        Err(e) => {
                            // Sin retry: se loguea, se apaga el loader y listo
                            log::error!("❌ Error obteniendo envíos: {}", e);
                            load_failed.set(true);
                        }
                    }

                    loading.set(false);
                });
            }
            || ()
        });
    }

    let set_status = {
        let dashboard = dashboard.clone();
        Callback::from(move |group: String| {
            let mut next = (*dashboard).clone();
            next.set_status_filter(group);
            dashboard.set(next);
        })
    };

    let set_party = {
        let dashboard = dashboard.clone();
        Callback::from(move |region: String| {
            let mut next = (*dashboard).clone();
            next.set_region_filter(region);
            dashboard.set(next);
        })
    };

    let set_query = {
        let dashboard = dashboard.clone();
        Callback::from(move |query: String| {
            let mut next = (*dashboard).clone();
            next.set_query(query);
            dashboard.set(next);
        })
    };

    let toggle_sort = {
        let dashboard = dashboard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*dashboard).clone();
            next.toggle_sort();
            dashboard.set(next);
        })
    };

    UseDashboardHandle {
        dashboard,
        loading,
        load_failed,
        set_status,
        set_party,
        set_query,
        toggle_sort,
    }
}
