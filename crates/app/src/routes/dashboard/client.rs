use client::dashboards::OrderDesk;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdRefreshCw;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant, EmptyState, PageHeader};

use crate::auth::{use_auth, use_services};
use crate::components::{OrderCard, OrderingPanel};
use crate::notify::use_notifier;

/// Client dashboard: the ordering flow plus the status of the client's own
/// orders.
#[component]
pub fn ClientDashboard() -> Element {
    let auth = use_auth();
    let services = use_services();
    let notifier = use_notifier();
    let mut desk = use_signal(OrderDesk::default);
    let mut loading = use_signal(|| false);

    let refresh = use_callback(move |_: ()| {
        let api = services.api.clone();
        let Some(user) = auth.current_user.peek().clone() else {
            return;
        };
        spawn(async move {
            loading.set(true);
            let result = OrderDesk::fetch_orders(&api, &user).await;
            loading.set(false);
            match result {
                Ok(orders) => desk.with_mut(|d| d.orders = orders),
                Err(notice) => notifier.show(notice),
            }
        });
    });

    use_effect(move || refresh.call(()));

    let Some(user) = auth.current_user.read().clone() else {
        return rsx! {};
    };
    let orders = desk.read().orders.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader { title: "Order food", subtitle: "Welcome back, {user.email}" }

            OrderingPanel { desk, user }

            section { class: "dashboard-section",
                div { class: "dashboard-section-header",
                    h2 { "My orders" }
                    Button {
                        variant: ButtonVariant::Outline,
                        size: ButtonSize::Compact,
                        busy: loading(),
                        onclick: move |_| refresh.call(()),
                        Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 14, height: 14 }
                        " Refresh"
                    }
                }
                if orders.is_empty() {
                    EmptyState { message: "You have not placed any orders yet." }
                } else {
                    div { class: "order-grid",
                        for order in orders {
                            OrderCard { key: "{order.id}", order }
                        }
                    }
                }
            }
        }
    }
}
