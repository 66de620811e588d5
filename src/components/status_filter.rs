use yew::prelude::*;

use crate::models::ALL_STATUS_BUTTONS;
use crate::state::FILTER_ALL;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusFilterBarProps {
    /// Grupo activo (o el sentinel "ALL")
    pub active: String,
    pub on_select: Callback<String>,
}

/// Botonera de grupos de estado, en orden fijo de display
#[function_component(StatusFilterBar)]
pub fn status_filter_bar(props: &StatusFilterBarProps) -> Html {
    let all_button = {
        let on_select = props.on_select.clone();
        let is_active = props.active == FILTER_ALL;
        html! {
            <button
                class={classes!("status-btn", is_active.then_some("active"))}
                onclick={Callback::from(move |_| on_select.emit(FILTER_ALL.to_string()))}
            >
                {"All"}
            </button>
        }
    };

    html! {
        <div class="status-filter-bar">
            {all_button}
            { for ALL_STATUS_BUTTONS.iter().map(|label| {
                let on_select = props.on_select.clone();
                let label_string = label.to_string();
                let is_active = props.active == *label;
                html! {
                    <button
                        key={*label}
                        class={classes!("status-btn", is_active.then_some("active"))}
                        onclick={Callback::from(move |_| on_select.emit(label_string.clone()))}
                    >
                        {*label}
                    </button>
                }
            })}
        </div>
    }
}
