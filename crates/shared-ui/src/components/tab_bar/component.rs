use dioxus::prelude::*;

/// Row of mutually exclusive tabs. `active` is the index of the selected tab
/// and `onselect` receives the index of the clicked one.
#[component]
pub fn TabBar(
    labels: Vec<String>,
    active: usize,
    onselect: EventHandler<usize>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "tab-bar", None, false),
        Attribute::new("role", "tablist", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    r#type: "button",
                    role: "tab",
                    class: "tab-trigger",
                    "data-state": if index == active { "active" } else { "inactive" },
                    "aria-selected": index == active,
                    onclick: move |_| onselect.call(index),
                    "{label}"
                }
            }
        }
    }
}
