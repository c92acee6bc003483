use dioxus::prelude::*;

/// Labelled text field. `on_input` receives the new value; a non-empty
/// `error` marks the field invalid and is shown under it.
#[component]
pub fn Input(
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] label: String,
    #[props(default)] name: String,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] required: bool,
    #[props(default)] error: String,
) -> Element {
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label { class: if invalid { "field field-invalid" } else { "field" },
            if !label.is_empty() {
                span { class: "field-label", "{label}" }
            }
            input {
                class: "field-input",
                r#type: "{input_type}",
                name: "{name}",
                value: "{value}",
                placeholder: "{placeholder}",
                required,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt.value()),
            }
            if invalid {
                span { class: "field-error", "{error}" }
            }
        }
    }
}
