use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChefHat, LdClock, LdMessageCircle};
use dioxus_free_icons::Icon;

use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page home-page",
            section { class: "home-hero",
                h1 { "Fresh food, made to order" }
                p { "Browse the menu, order from your table or from home, and follow your order from the kitchen to your plate." }
                div { class: "home-actions",
                    Link { to: Route::MenuPage {}, class: "home-cta home-cta-primary", "See the menu" }
                    Link { to: Route::Register {}, class: "home-cta", "Create an account" }
                }
            }
            section { class: "home-features",
                div { class: "home-feature",
                    Icon::<LdChefHat> { icon: LdChefHat, width: 28, height: 28 }
                    h3 { "Cooked when you order" }
                    p { "Every order goes straight to the kitchen board." }
                }
                div { class: "home-feature",
                    Icon::<LdClock> { icon: LdClock, width: 28, height: 28 }
                    h3 { "Follow your order" }
                    p { "See when your order is pending, being prepared or ready." }
                }
                div { class: "home-feature",
                    Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 28, height: 28 }
                    h3 { "Ask our assistant" }
                    p { "Questions about a dish? The chat assistant can help." }
                }
            }
        }
    }
}
