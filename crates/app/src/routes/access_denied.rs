use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdShieldAlert;
use dioxus_free_icons::Icon;

use crate::auth::use_auth;
use crate::routes::{dashboard_route, Route};

/// Shown when a signed-in user opens another role's dashboard.
#[component]
pub fn AccessDenied() -> Element {
    let auth = use_auth();
    let home = auth.role().map(dashboard_route).unwrap_or(Route::Home {});

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }

        div { class: "page status-page",
            Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 40, height: 40 }
            h1 { "Access denied" }
            p { "Your account does not have permission to view this page." }
            Link { to: home, class: "status-page-link", "Go to your dashboard" }
        }
    }
}
