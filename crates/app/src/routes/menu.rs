use client::dashboards::MenuBoard;
use dioxus::prelude::*;
use shared_ui::{EmptyState, PageHeader};

use crate::auth::use_services;
use crate::components::MenuCard;
use crate::notify::use_notifier;

/// Public menu. Needs no session.
#[component]
pub fn MenuPage() -> Element {
    let services = use_services();
    let notifier = use_notifier();

    let menu = use_resource(move || {
        let api = services.api.clone();
        async move {
            let mut board = MenuBoard::default();
            let result = board.load(&api).await;
            notifier.report(result);
            board.items
        }
    });

    let items = menu.read().as_ref().cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page menu-page",
            PageHeader { title: "Our menu", subtitle: "Browse our dishes, no account needed" }
            match items {
                None => rsx! {
                    p { class: "page-loading", "Loading menu..." }
                },
                Some(items) if items.is_empty() => rsx! {
                    EmptyState { message: "The menu is not available right now." }
                },
                Some(items) => rsx! {
                    div { class: "menu-grid",
                        for item in items {
                            MenuCard { key: "{item.id}", item }
                        }
                    }
                },
            }
        }
    }
}
