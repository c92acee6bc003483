use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLoader;
use dioxus_free_icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Regular,
    Compact,
}

#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    #[props(default)]
    pub size: ButtonSize,
    #[props(default)]
    pub disabled: bool,
    /// Disables the button and shows a spinner in front of the children.
    #[props(default)]
    pub busy: bool,
    /// `type="submit"` instead of `type="button"`.
    #[props(default)]
    pub submit: bool,
    /// Accessible name, required for icon-only buttons.
    #[props(default)]
    pub label: String,
    #[props(default)]
    pub class: String,
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    pub children: Element,
}

impl ButtonProps {
    fn class_list(&self) -> String {
        let variant = match self.variant {
            ButtonVariant::Primary => "button-primary",
            ButtonVariant::Outline => "button-outline",
            ButtonVariant::Ghost => "button-ghost",
            ButtonVariant::Danger => "button-danger",
        };
        let size = match self.size {
            ButtonSize::Regular => "",
            ButtonSize::Compact => " button-compact",
        };
        let mut class = format!("button {variant}{size}");
        if !self.class.is_empty() {
            class.push(' ');
            class.push_str(&self.class);
        }
        class
    }
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.class_list();
    let kind = if props.submit { "submit" } else { "button" };
    let label = (!props.label.is_empty()).then(|| props.label.clone());
    let onclick = props.onclick;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            class: "{class}",
            r#type: kind,
            disabled: props.disabled || props.busy,
            "aria-busy": props.busy,
            "aria-label": label.clone(),
            title: label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if props.busy {
                span { class: "button-spinner",
                    Icon::<LdLoader> { icon: LdLoader, width: 14, height: 14 }
                }
            }
            {props.children}
        }
    }
}
