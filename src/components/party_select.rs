use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::state::{Party, FILTER_ALL};

#[derive(Properties, PartialEq, Clone)]
pub struct PartySelectProps {
    pub parties: Vec<Party>,
    /// Código de región seleccionado (o "ALL")
    pub selected: String,
    pub on_select: Callback<String>,
}

/// Selector de party (solo vista admin). El value de cada opción es el
/// código de región; la etiqueta lleva organización + región.
#[function_component(PartySelect)]
pub fn party_select(props: &PartySelectProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_select.emit(select.value());
        })
    };

    html! {
        <select class="party-select" {onchange}>
            <option value={FILTER_ALL} selected={props.selected == FILTER_ALL}>
                {"All Registered Parties"}
            </option>
            { for props.parties.iter().map(|party| {
                html! {
                    <option
                        key={party.label.clone()}
                        value={party.region_code.clone()}
                        selected={props.selected == party.region_code}
                    >
                        {party.label.clone()}
                    </option>
                }
            })}
        </select>
    }
}
