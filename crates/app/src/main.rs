use dioxus::prelude::*;
use shared_types::FeatureFlags;
use std::rc::Rc;

mod auth;
mod components;
pub mod format_helpers;
pub mod notify;
mod routes;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Handles to the remote services, shared by every route.
#[derive(Clone)]
pub struct Services {
    pub api: client::Api,
    pub session: Rc<client::Session>,
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| client::load_config().clone());

    let flags: FeatureFlags = config.features.clone();
    use_context_provider(|| flags);

    let services = use_context_provider(|| {
        let (api, session) = client::connect(&config);
        Services {
            api,
            session: Rc::new(session),
        }
    });

    let auth = use_context_provider(AuthState::new);

    // Rebuild the session from the identity service once on start.
    let restore_services = services.clone();
    use_future(move || {
        let services = restore_services.clone();
        let mut auth = auth;
        async move {
            let user = services.session.restore().await;
            auth.finish_restore(user);
        }
    });

    // Mirror every session change into the reactive auth state.
    use_future(move || {
        let services = services.clone();
        let mut auth = auth;
        async move {
            let mut rx = services.session.subscribe();
            while rx.changed().await.is_ok() {
                let user = rx.borrow_and_update().clone();
                auth.current_user.set(user);
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
