use client::dashboards::OrderDesk;
use dioxus::prelude::*;
use shared_ui::PageHeader;

use crate::auth::use_auth;
use crate::components::OrderingPanel;

/// Waiter dashboard: take an order at the table from the menu.
#[component]
pub fn WaiterDashboard() -> Element {
    let auth = use_auth();
    let desk = use_signal(OrderDesk::default);

    let Some(user) = auth.current_user.read().clone() else {
        return rsx! {};
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader { title: "New order", subtitle: "Signed in as {user.email}" }
            OrderingPanel { desk, user }
        }
    }
}
