use yew::prelude::*;

use crate::models::Shipment;
use super::ShipmentCard;

#[derive(Properties, PartialEq, Clone)]
pub struct ShipmentListProps {
    pub shipments: Vec<Shipment>,
}

#[function_component(ShipmentList)]
pub fn shipment_list(props: &ShipmentListProps) -> Html {
    if props.shipments.is_empty() {
        return html! {
            <p class="empty-message">{"No results found."}</p>
        };
    }

    html! {
        <div class="shipment-list">
            { for props.shipments.iter().enumerate().map(|(idx, s)| {
                html! {
                    <ShipmentCard
                        key={format!("{}-{}", idx, s.awb)}
                        shipment={s.clone()}
                    />
                }
            })}
        </div>
    }
}
