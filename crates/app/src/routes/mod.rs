pub mod about;
pub mod access_denied;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod menu;
pub mod not_found;
pub mod register;

use crate::auth::{sign_out, use_auth, use_services};
use crate::components::{ChatWidget, Footer};
use crate::format_helpers::role_tone;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLogIn, LdLogOut, LdUtensils};
use dioxus_free_icons::Icon;
use shared_types::{check_access, AccessDecision, FeatureFlags, Role};
use shared_ui::{Badge, Button, ButtonVariant};

use about::About;
use access_denied::AccessDenied;
use dashboard::{AdminDashboard, ClientDashboard, KitchenDashboard, WaiterDashboard};
use home::Home;
use login::Login;
use menu::MenuPage;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/menu")]
    MenuPage {},
    #[route("/about")]
    About {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/access-denied")]
    AccessDenied {},
    #[layout(AdminGate)]
    #[route("/admin-dashboard")]
    AdminDashboard {},
    #[end_layout]
    #[layout(KitchenGate)]
    #[route("/kitchen-dashboard")]
    KitchenDashboard {},
    #[end_layout]
    #[layout(WaiterGate)]
    #[route("/waiter-dashboard")]
    WaiterDashboard {},
    #[end_layout]
    #[layout(ClientGate)]
    #[route("/client-dashboard")]
    ClientDashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Landing route for a role after sign-in.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Admin => Route::AdminDashboard {},
        Role::Kitchen => Route::KitchenDashboard {},
        Role::Waiter => Route::WaiterDashboard {},
        Role::Client => Route::ClientDashboard {},
    }
}

/// Guard layout for role-restricted routes.
///
/// Waits for the startup session restore, then renders the nested route or
/// replaces the location with the login or access-denied page.
#[component]
fn RoleGate(allowed: Vec<Role>) -> Element {
    let auth = use_auth();

    if !auth.is_ready() {
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        };
    }

    let user = auth.current_user.read().clone();
    match check_access(user.as_ref(), &allowed) {
        AccessDecision::Render => rsx! { Outlet::<Route> {} },
        AccessDecision::RedirectLogin => {
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        AccessDecision::RedirectDenied => {
            tracing::warn!(allowed = ?allowed, "Access denied");
            navigator().replace(Route::AccessDenied {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

#[component]
fn AdminGate() -> Element {
    rsx! { RoleGate { allowed: vec![Role::Admin] } }
}

#[component]
fn KitchenGate() -> Element {
    rsx! { RoleGate { allowed: vec![Role::Kitchen] } }
}

#[component]
fn WaiterGate() -> Element {
    rsx! { RoleGate { allowed: vec![Role::Waiter] } }
}

#[component]
fn ClientGate() -> Element {
    rsx! { RoleGate { allowed: vec![Role::Client] } }
}

/// Main app layout with the top navigation bar, page content and footer.
#[component]
fn AppLayout() -> Element {
    let flags: FeatureFlags = use_context();
    let services = use_services();
    let mut auth = use_auth();
    let user = auth.current_user.read().clone();

    let session_links = match user {
        Some(user) => {
            rsx! {
                Link { to: dashboard_route(user.role), class: "nav-link",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Dashboard"
                }
                Badge { label: user.role.label().to_string(), tone: role_tone(user.role) }
                span { class: "app-session-email", "{user.email}" }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        sign_out(&services, &mut auth);
                        navigator().push(Route::Home {});
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Sign out"
                }
            }
        }
        None => rsx! {
            Link { to: Route::Login {}, class: "nav-link",
                Icon::<LdLogIn> { icon: LdLogIn, width: 16, height: 16 }
                "Sign in"
            }
            Link { to: Route::Register {}, class: "nav-link nav-link-cta", "Register" }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-header",
                Link { to: Route::Home {}, class: "app-brand",
                    Icon::<LdUtensils> { icon: LdUtensils, width: 20, height: 20 }
                    span { "La Cocina" }
                }
                nav { class: "app-nav",
                    Link { to: Route::Home {}, class: "nav-link", active_class: "active", "Home" }
                    Link { to: Route::MenuPage {}, class: "nav-link", active_class: "active", "Menu" }
                    Link { to: Route::About {}, class: "nav-link", active_class: "active", "About" }
                }
                div { class: "app-session", {session_links} }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }

            Footer {}

            if flags.chatbot {
                ChatWidget {}
            }
        }
    }
}
