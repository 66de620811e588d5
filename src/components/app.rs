use web_sys::{HtmlInputElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::hooks::{use_dashboard, use_session};
use super::{PartySelect, ShipmentList, StatusFilterBar, SummaryBar};

#[function_component(App)]
pub fn app() -> Html {
    let session_handle = use_session();
    let dash = use_dashboard(session_handle.session.clone());

    // Sin sesión: el hook ya disparó el redirect al login externo
    let Some(session) = session_handle.session.clone() else {
        return html! {};
    };

    let dashboard = (*dash.dashboard).clone();
    let summary = dashboard.summary();
    let is_admin = session.is_admin();

    // Admin ve el agregado; una party ve su propia organización como título
    let title = if is_admin {
        "Shipment Tracker".to_string()
    } else {
        dashboard
            .first_org_name()
            .unwrap_or("Shipment Tracker")
            .to_string()
    };

    let sort_label = if dashboard.newest_first() {
        "Sort: Newest First ⇅"
    } else {
        "Sort: Oldest First ⇅"
    };

    let on_search_input = {
        let set_query = dash.set_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_query.emit(input.value());
        })
    };

    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(win) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    });

    let body = if *dash.loading {
        html! { <div id="loader" class="loader">{"Loading..."}</div> }
    } else if *dash.load_failed {
        // Fallo de transporte/parse: ya quedó logueado, no se muestra data
        html! {}
    } else if dashboard.is_empty() {
        html! { <p class="empty-message">{"No data found."}</p> }
    } else {
        html! { <ShipmentList shipments={dashboard.view().to_vec()} /> }
    };

    html! {
        <>
            <header class="app-header">
                <h1 id="client-title">{title}</h1>
                <div class="header-actions">
                    <button id="sort-btn" class="btn-sort" onclick={dash.toggle_sort.clone()}>
                        {sort_label}
                    </button>
                    <button class="btn-logout" onclick={session_handle.logout.clone()}>
                        {"Logout"}
                    </button>
                </div>
            </header>

            <SummaryBar summary={summary} />

            <div class="filter-controls">
                <input
                    id="search"
                    class="search-input"
                    type="text"
                    placeholder="Search AWB, city, consignee..."
                    value={dashboard.query().to_string()}
                    oninput={on_search_input}
                />
                {
                    if is_admin {
                        html! {
                            <PartySelect
                                parties={dashboard.party_list()}
                                selected={dashboard.region_filter().to_string()}
                                on_select={dash.set_party.clone()}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
                <StatusFilterBar
                    active={dashboard.status_filter().to_string()}
                    on_select={dash.set_status.clone()}
                />
            </div>

            <main id="list" class="list-container">
                {body}
            </main>

            <button class="btn-top" onclick={scroll_to_top}>{"↑"}</button>
        </>
    }
}
