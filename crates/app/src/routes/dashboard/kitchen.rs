use client::dashboards::KitchenDesk;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChefHat, LdRefreshCw};
use dioxus_free_icons::Icon;
use shared_types::{Order, OrderStatus};
use std::collections::HashSet;
use shared_ui::{Button, ButtonVariant, EmptyState, PageHeader};

use crate::auth::use_services;
use crate::components::OrderCard;
use crate::format_helpers::advance_label;
use crate::notify::use_notifier;

/// Kitchen board: one column per status, each order moves forward one step
/// at a time.
#[component]
pub fn KitchenDashboard() -> Element {
    let services = use_services();
    let notifier = use_notifier();
    let mut desk = use_signal(KitchenDesk::default);
    let mut loading = use_signal(|| true);
    let mut busy = use_signal(HashSet::<String>::new);

    let load_api = services.api.clone();
    let reload = use_callback(move |_: ()| {
        let api = load_api.clone();
        spawn(async move {
            loading.set(true);
            let result = KitchenDesk::fetch(&api).await;
            loading.set(false);
            match result {
                Ok(board) => desk.with_mut(|d| d.board = board),
                Err(notice) => notifier.show(notice),
            }
        });
    });

    use_effect(move || reload.call(()));

    let advance_api = services.api.clone();
    let advance = use_callback(move |order_id: String| {
        let api = advance_api.clone();
        let req = match desk.peek().plan_advance(&order_id) {
            Ok(req) => req,
            Err(notice) => return notifier.show(notice),
        };
        busy.with_mut(|ids| ids.insert(order_id.clone()));
        spawn(async move {
            let outcome = api.update_order_status(&req).await;
            let notice = desk.with_mut(|d| d.settle_advance(&req, outcome));
            busy.with_mut(|ids| ids.remove(&order_id));
            notifier.show(notice);
        });
    });

    let columns: Vec<(OrderStatus, Vec<Order>)> = OrderStatus::ALL
        .into_iter()
        .map(|status| (status, desk.read().board.bucket(status).to_vec()))
        .collect();
    let in_flight = busy.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                title: "Kitchen",
                subtitle: "Orders move forward one step at a time",
                icon: rsx! {
                    Icon::<LdChefHat> { icon: LdChefHat, width: 22, height: 22 }
                },
                Button {
                    variant: ButtonVariant::Outline,
                    busy: loading(),
                    onclick: move |_| reload.call(()),
                    Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 14, height: 14 }
                    "Refresh"
                }
            }

            div { class: "kitchen-board",
                for (status, orders) in columns {
                    KitchenColumn {
                        key: "{status}",
                        status,
                        orders,
                        busy: in_flight.clone(),
                        onadvance: advance,
                    }
                }
            }
        }
    }
}

#[component]
fn KitchenColumn(
    status: OrderStatus,
    orders: Vec<Order>,
    busy: HashSet<String>,
    onadvance: Callback<String>,
) -> Element {
    let class = format!("kitchen-column {}", status.css_class());
    let title = status.label();
    let count = orders.len();
    let action = advance_label(status);

    rsx! {
        section { class: "{class}",
            h2 { class: "kitchen-column-title", "{title} ({count})" }
            if orders.is_empty() {
                EmptyState { message: "No orders here." }
            }
            for order in orders {
                OrderCard { key: "{order.id}", order: order.clone(),
                    if let Some(label) = action {
                        Button {
                            busy: busy.contains(&order.id),
                            onclick: {
                                let id = order.id.clone();
                                move |_| onadvance.call(id.clone())
                            },
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
