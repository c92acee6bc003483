use dioxus::prelude::*;

/// Form that never lets the browser submit.
///
/// While `busy` is set the fields are disabled and further submits are
/// dropped. A non-empty `error` is announced above the fields.
#[component]
pub fn Form(
    onsubmit: EventHandler<()>,
    #[props(default)] busy: bool,
    #[props(default)] error: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            class: "form {class}",
            novalidate: true,
            "aria-busy": busy,
            onsubmit: move |evt| {
                evt.prevent_default();
                if !busy {
                    onsubmit.call(());
                }
            },
            if !error.is_empty() {
                p { class: "form-error", role: "alert", "{error}" }
            }
            fieldset { class: "form-fields", disabled: busy, {children} }
        }
    }
}
