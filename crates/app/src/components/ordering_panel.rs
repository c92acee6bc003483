use client::dashboards::OrderDesk;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPlus, LdShoppingCart, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::{AuthUser, Severity};
use shared_ui::{Button, ButtonSize, ButtonVariant, EmptyState};

use crate::auth::use_services;
use crate::components::MenuCard;
use crate::notify::use_notifier;

/// Menu grid plus cart, shared by the waiter and client dashboards.
/// Loads the menu on mount; the caller owns the desk so it can also show the
/// user's orders.
#[component]
pub fn OrderingPanel(mut desk: Signal<OrderDesk>, user: AuthUser) -> Element {
    let services = use_services();
    let notifier = use_notifier();
    let mut submitting = use_signal(|| false);

    let menu_services = services.clone();
    use_future(move || {
        let api = menu_services.api.clone();
        async move {
            let mut next = OrderDesk::default();
            let result = next.load_menu(&api).await;
            desk.with_mut(|d| d.menu = next.menu);
            notifier.report(result);
        }
    });

    let place_order = move |_| {
        let api = services.api.clone();
        let user = user.clone();
        let req = match desk.peek().prepare_order(&user) {
            Ok(req) => req,
            Err(notice) => return notifier.show(notice),
        };
        spawn(async move {
            submitting.set(true);
            let outcome = api.create_order(&req).await;
            let notice = desk.with_mut(|d| d.settle_order(&req, outcome));
            if notice.severity == Severity::Success {
                match OrderDesk::fetch_orders(&api, &user).await {
                    Ok(orders) => desk.with_mut(|d| d.orders = orders),
                    Err(stale) => tracing::warn!(message = %stale.message, "Order list is stale"),
                }
            }
            submitting.set(false);
            notifier.show(notice);
        });
    };

    let menu = desk.read().menu.clone();
    let lines: Vec<(String, String, u32, String)> = desk
        .read()
        .cart
        .lines()
        .iter()
        .map(|l| {
            (
                l.item.id.clone(),
                l.item.display_name().to_string(),
                l.quantity,
                l.item.price.display(),
            )
        })
        .collect();
    let total = desk.read().cart.total_display();
    let cart_empty = lines.is_empty();

    rsx! {
        div { class: "ordering-panel",
            section { class: "ordering-menu",
                h2 { "Menu" }
                if menu.is_empty() {
                    EmptyState { message: "No dishes available right now." }
                } else {
                    div { class: "menu-grid",
                        for item in menu {
                            MenuCard { key: "{item.id}", item: item.clone(),
                                Button {
                                    variant: ButtonVariant::Outline,
                                    size: ButtonSize::Compact,
                                    onclick: {
                                        let item = item.clone();
                                        move |_| desk.with_mut(|d| d.add(&item))
                                    },
                                    Icon::<LdPlus> { icon: LdPlus, width: 14, height: 14 }
                                    "Add"
                                }
                            }
                        }
                    }
                }
            }

            aside { class: "ordering-cart",
                h2 {
                    Icon::<LdShoppingCart> { icon: LdShoppingCart, width: 18, height: 18 }
                    " Cart"
                }
                if cart_empty {
                    EmptyState { message: "Your cart is empty." }
                } else {
                    ul { class: "cart-lines",
                        for (id, name, quantity, price) in lines {
                            li { key: "{id}", class: "cart-line",
                                span { class: "cart-line-name", "{name}" }
                                span { class: "cart-line-qty", "× {quantity}" }
                                span { class: "cart-line-price", "{price}" }
                                Button {
                                    class: "cart-line-remove",
                                    variant: ButtonVariant::Ghost,
                                    size: ButtonSize::Compact,
                                    label: "Remove {name}",
                                    onclick: {
                                        let id = id.clone();
                                        move |_| desk.with_mut(|d| d.remove(&id))
                                    },
                                    Icon::<LdTrash2> { icon: LdTrash2, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                }
                p { class: "cart-total", "Total: {total}" }
                Button {
                    busy: submitting(),
                    onclick: place_order,
                    if submitting() { "Placing order..." } else { "Place order" }
                }
            }
        }
    }
}
