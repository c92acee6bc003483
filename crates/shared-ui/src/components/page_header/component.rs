use dioxus::prelude::*;

/// Page heading with an optional leading icon and subtitle. `children` are
/// the page-level actions, aligned to the right.
#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    icon: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "page-header",
            div { class: "page-heading",
                h1 { class: "page-title",
                    if let Some(icon) = icon {
                        span { class: "page-title-icon", {icon} }
                    }
                    "{title}"
                }
                if !subtitle.is_empty() {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-actions", {children} }
        }
    }
}
