use dioxus::prelude::*;
use shared_types::Order;
use shared_ui::{Badge, Card};

use crate::format_helpers::{order_line, short_id, status_tone};

/// An order with its item lines, total and status. The status also sets a
/// colour class on the card.
#[component]
pub fn OrderCard(order: Order, children: Element) -> Element {
    let class = format!("order-card {}", order.status.css_class());
    let total = order.total_display();
    let created = order.created_display();
    let lines: Vec<String> = order.items.iter().map(order_line).collect();
    let title = format!("Order #{}", short_id(&order.id));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./cards.css") }

        Card {
            class,
            title,
            subtitle: order.client_name.clone().unwrap_or_default(),
            meta: rsx! {
                Badge { label: order.status.label().to_string(), tone: status_tone(order.status), dot: true }
                span { class: "order-card-date", "{created}" }
            },
            actions: children,
            ul { class: "order-card-items",
                for (index, line) in lines.into_iter().enumerate() {
                    li { key: "{index}", "{line}" }
                }
            }
            p { class: "order-card-total", "Total: {total}" }
        }
    }
}
