use dioxus::prelude::*;

/// Surface for a dish, an order or a form.
///
/// `meta` sits on the right of the heading (status badges, dates) and
/// `actions` renders as the bottom row. Both are left out when unset, as are
/// the image and the heading.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] subtitle: String,
    #[props(default)] image: String,
    #[props(default)] class: String,
    meta: Option<Element>,
    actions: Option<Element>,
    children: Element,
) -> Element {
    let has_heading = !title.is_empty() || !subtitle.is_empty() || meta.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        article { class: "card {class}",
            if !image.is_empty() {
                img { class: "card-image", src: "{image}", alt: "{title}", loading: "lazy" }
            }
            if has_heading {
                header { class: "card-heading",
                    div {
                        if !title.is_empty() {
                            h3 { class: "card-title", "{title}" }
                        }
                        if !subtitle.is_empty() {
                            p { class: "card-subtitle", "{subtitle}" }
                        }
                    }
                    if let Some(meta) = meta {
                        div { class: "card-meta", {meta} }
                    }
                }
            }
            div { class: "card-body", {children} }
            if let Some(actions) = actions {
                div { class: "card-actions", {actions} }
            }
        }
    }
}
