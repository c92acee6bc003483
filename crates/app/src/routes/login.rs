use crate::auth::{use_auth, use_services};
use crate::routes::{dashboard_route, Route};
use dioxus::prelude::*;
use shared_types::LoginRequest;
use shared_ui::{Button, Card, Form, Input};
use std::collections::HashMap;

/// Email/password sign-in. On success the user lands on their role's
/// dashboard.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in: go straight to the dashboard.
    if let Some(role) = auth.role() {
        navigator().replace(dashboard_route(role));
    }

    let handle_login = move |_: ()| {
        let services = services.clone();
        async move {
            loading.set(true);
            error_msg.set(String::new());
            field_errors.set(HashMap::new());

            let form = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match services.session.sign_in(&form).await {
                Ok(user) => {
                    let role = user.role;
                    auth.set_user(user);
                    navigator().push(dashboard_route(role));
                }
                Err(e) => {
                    if e.field_errors.is_empty() {
                        error_msg.set(e.friendly_message());
                    } else {
                        field_errors.set(e.field_errors.clone());
                    }
                }
            }
            loading.set(false);
        }
    };

    let field_error = move |name: &str| {
        field_errors
            .read()
            .get(name)
            .cloned()
            .unwrap_or_default()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",
                title: "Sign In",
                subtitle: "Staff and clients sign in with their email and password",
                actions: rsx! {
                    p { class: "auth-link",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Create one" }
                    }
                },
                Form { busy: loading(), error: error_msg(), onsubmit: handle_login,
                    Input {
                        label: "Email",
                        name: "email",
                        input_type: "email",
                        placeholder: "user@example.com",
                        value: email(),
                        error: field_error("email"),
                        on_input: move |value: String| email.set(value),
                    }
                    Input {
                        label: "Password",
                        name: "password",
                        input_type: "password",
                        placeholder: "Enter your password",
                        value: password(),
                        error: field_error("password"),
                        on_input: move |value: String| password.set(value),
                    }
                    Button { class: "auth-submit", submit: true, busy: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}
