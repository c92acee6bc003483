use crate::auth::{use_auth, use_services};
use crate::notify::use_notifier;
use crate::routes::{dashboard_route, Route};
use dioxus::prelude::*;
use shared_types::{LoginRequest, Notice, RegisterClientRequest};
use shared_ui::{Button, Card, Form, Input};
use std::collections::HashMap;

/// Client self-registration. A successful registration signs the new client
/// in and opens the client dashboard.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let services = use_services();
    let notifier = use_notifier();
    let mut form = use_signal(RegisterClientRequest::default);
    let mut error_msg = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if let Some(role) = auth.role() {
        navigator().replace(dashboard_route(role));
    }

    let handle_register = move |_: ()| {
        let services = services.clone();
        async move {
            loading.set(true);
            error_msg.set(String::new());
            field_errors.set(HashMap::new());

            let req = form();
            match services.api.register_client(&req).await {
                Ok(response) => {
                    let message = if response.message.is_empty() {
                        "Registration complete".to_string()
                    } else {
                        response.message
                    };
                    notifier.show(Notice::success(message));

                    let login = LoginRequest {
                        email: req.email.clone(),
                        password: req.password.clone(),
                    };
                    match services.session.sign_in(&login).await {
                        Ok(user) => {
                            auth.set_user(user);
                            navigator().push(Route::ClientDashboard {});
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Sign-in after registration failed");
                            navigator().push(Route::Login {});
                        }
                    }
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
                title: "Create Account",
                subtitle: "Register to order from home and follow your orders",
                actions: rsx! {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in" }
                    }
                },
                Form { busy: loading(), error: error_msg(), onsubmit: handle_register,
                    Input {
                        label: "Full name",
                        name: "full_name",
                        value: form.read().full_name.clone(),
                        error: field_error("full_name"),
                        on_input: move |value: String| form.with_mut(|f| f.full_name = value),
                    }
                    Input {
                        label: "Address",
                        name: "address",
                        value: form.read().address.clone(),
                        error: field_error("address"),
                        on_input: move |value: String| form.with_mut(|f| f.address = value),
                    }
                    Input {
                        label: "Phone",
                        name: "phone",
                        input_type: "tel",
                        value: form.read().phone.clone(),
                        error: field_error("phone"),
                        on_input: move |value: String| form.with_mut(|f| f.phone = value),
                    }
                    Input {
                        label: "Email",
                        name: "email",
                        input_type: "email",
                        placeholder: "user@example.com",
                        value: form.read().email.clone(),
                        error: field_error("email"),
                        on_input: move |value: String| form.with_mut(|f| f.email = value),
                    }
                    Input {
                        label: "Password",
                        name: "password",
                        input_type: "password",
                        placeholder: "At least 6 characters",
                        value: form.read().password.clone(),
                        error: field_error("password"),
                        on_input: move |value: String| form.with_mut(|f| f.password = value),
                    }
                    Button { class: "auth-submit", submit: true, busy: loading(),
                        if loading() { "Creating account..." } else { "Create Account" }
                    }
                }
            }
        }
    }
}
