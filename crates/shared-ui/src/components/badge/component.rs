use dioxus::prelude::*;

/// Colour family of a [`Badge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Accent,
    Caution,
    Positive,
    Critical,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Neutral => "badge-neutral",
            Tone::Accent => "badge-accent",
            Tone::Caution => "badge-caution",
            Tone::Positive => "badge-positive",
            Tone::Critical => "badge-critical",
        }
    }
}

/// Pill label for an order status or a role. `dot` prefixes a small coloured
/// marker, used where the badge sits next to other text.
#[component]
pub fn Badge(label: String, #[props(default)] tone: Tone, #[props(default)] dot: bool) -> Element {
    let class = format!("badge {}", tone.class());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "{class}", title: "{label}",
            if dot {
                span { class: "badge-dot", "aria-hidden": "true" }
            }
            "{label}"
        }
    }
}
