use dioxus::prelude::*;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page status-page",
            div { class: "status-page-code", "404" }
            h1 { "Page Not Found" }
            p {
                "The page "
                code { "{path}" }
                " could not be found."
            }
            Link { to: Route::Home {}, class: "status-page-link", "Back to Home" }
        }
    }
}
