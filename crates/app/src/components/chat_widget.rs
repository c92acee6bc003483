use client::dashboards::ChatSession;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMessageCircle, LdSend, LdX};
use dioxus_free_icons::Icon;
use shared_types::ChatSender;
use shared_ui::{Button, ButtonSize, ButtonVariant, Form, Input};

use crate::auth::use_services;
use crate::notify::use_notifier;

/// Floating assistant. The conversation and its session id live as long as
/// the layout that hosts the widget.
#[component]
pub fn ChatWidget() -> Element {
    let services = use_services();
    let notifier = use_notifier();
    let mut open = use_signal(|| false);
    let mut chat = use_signal(ChatSession::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);

    let handle_send = move |_: ()| {
        let api = services.api.clone();
        let text = draft();
        draft.set(String::new());
        let Some(req) = chat.with_mut(|c| c.begin(&text)) else {
            return;
        };
        spawn(async move {
            sending.set(true);
            let outcome = api.chatbot(&req).await;
            let notice = chat.with_mut(|c| c.finish(outcome));
            sending.set(false);
            if let Some(notice) = notice {
                notifier.show(notice);
            }
        });
    };

    let toggle_label = if open() { "Hide assistant" } else { "Ask our assistant" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./chat.css") }

        div { class: "chat-widget",
            if open() {
                div { class: "chat-panel",
                    div { class: "chat-panel-header",
                        span { "Ask our assistant" }
                        Button {
                            class: "chat-close",
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Compact,
                            label: "Close chat",
                            onclick: move |_| open.set(false),
                            Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                        }
                    }
                    div { class: "chat-messages",
                        if chat.read().messages.is_empty() {
                            p { class: "chat-hint", "Ask about the menu, opening hours or your order." }
                        }
                        for (index, message) in chat.read().messages.iter().enumerate() {
                            div {
                                key: "{index}",
                                class: match message.sender {
                                    ChatSender::User => "chat-bubble chat-bubble-user",
                                    ChatSender::Bot => "chat-bubble chat-bubble-bot",
                                },
                                "{message.text}"
                            }
                        }
                        if sending() {
                            div { class: "chat-bubble chat-bubble-bot chat-typing", "…" }
                        }
                    }
                    Form { class: "chat-input", busy: sending(), onsubmit: handle_send,
                        Input {
                            name: "message",
                            value: draft(),
                            placeholder: "Type a message",
                            on_input: move |value: String| draft.set(value),
                        }
                        Button { submit: true, label: "Send", busy: sending(),
                            Icon::<LdSend> { icon: LdSend, width: 16, height: 16 }
                        }
                    }
                }
            }
            Button {
                class: "chat-toggle",
                label: "{toggle_label}",
                onclick: move |_| open.toggle(),
                Icon::<LdMessageCircle> { icon: LdMessageCircle, width: 22, height: 22 }
            }
        }
    }
}
