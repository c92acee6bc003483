use dioxus::prelude::*;

/// Placeholder shown when a list has nothing to display.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            p { "{message}" }
        }
    }
}
