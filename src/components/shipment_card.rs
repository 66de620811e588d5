use yew::prelude::*;

use crate::models::Shipment;

#[derive(Properties, PartialEq, Clone)]
pub struct ShipmentCardProps {
    pub shipment: Shipment,
}

#[function_component(ShipmentCard)]
pub fn shipment_card(props: &ShipmentCardProps) -> Html {
    let s = &props.shipment;

    let card_classes = classes!(
        "shipment-card",
        format!("status-{}", s.status_class.as_str()),
    );

    // La fecha solo aporta cuando el envío ya cerró (entregado o devuelto)
    let date_chip = if s.display_group == "DELIVERED" || s.display_group == "RTO" {
        format!("📅 {}", s.delivery_date)
    } else {
        String::new()
    };

    html! {
        <div class={card_classes}>
            <div class="card-awb">
                <strong>{format!("AWB {}", s.awb)}</strong>
                {format!(" ({})", s.payment_mode)}
            </div>
            <div class="card-consignee">
                {format!("{} | {}", s.consignee_name, s.city)}
            </div>
            <div class="card-status">
                {format!("{} {}", s.display_group, date_chip)}
            </div>
            <div class="card-amount">{format!("₹{:.0}", s.cod_amount)}</div>
            <div class="card-links">
                <a href={s.tracking_url()} target="_blank">{"Track"}</a>
                {
                    if let Some(wa_url) = s.whatsapp_url() {
                        html! {
                            <a class="link-whatsapp" href={wa_url} target="_blank">
                                {"WhatsApp"}
                            </a>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}
