use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            p { "© La Cocina. Fresh food, made to order." }
            nav { class: "app-footer-links",
                Link { to: Route::MenuPage {}, "Menu" }
                Link { to: Route::About {}, "About" }
            }
        }
    }
}
