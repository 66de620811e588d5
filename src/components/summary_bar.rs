use yew::prelude::*;

use crate::state::Summary;

#[derive(Properties, PartialEq, Clone)]
pub struct SummaryBarProps {
    pub summary: Summary,
}

/// Contadores del view set actual: total, COD, prepaid y monto COD
#[function_component(SummaryBar)]
pub fn summary_bar(props: &SummaryBarProps) -> Html {
    let s = &props.summary;

    html! {
        <div class="summary-bar">
            <div class="summary-item">
                <span class="summary-value">{s.total_count}</span>
                <span class="summary-label">{"Total"}</span>
            </div>
            <div class="summary-item">
                <span class="summary-value">{s.cod_count}</span>
                <span class="summary-label">{"COD"}</span>
            </div>
            <div class="summary-item">
                <span class="summary-value">{s.prepaid_count}</span>
                <span class="summary-label">{"Prepaid"}</span>
            </div>
            <div class="summary-item">
                <span class="summary-value">{s.cod_total_display()}</span>
                <span class="summary-label">{"COD Amount"}</span>
            </div>
        </div>
    }
}
