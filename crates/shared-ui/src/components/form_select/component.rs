use dioxus::prelude::*;

/// Labelled `<select>` over `(value, label)` pairs. `onchange` receives the
/// chosen value.
#[component]
pub fn FormSelect(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: "select-field",
            span { class: "select-field-label", "{label}" }
            select {
                class: "select-field-control",
                onchange: move |evt| onchange.call(evt.value()),
                for (option_value, option_label) in options {
                    option {
                        key: "{option_value}",
                        selected: option_value == value,
                        value: "{option_value}",
                        "{option_label}"
                    }
                }
            }
        }
    }
}
