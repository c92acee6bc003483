use dioxus::prelude::*;
use shared_types::{Notice, Severity};
use shared_ui::{use_toast, ToastOptions, Toasts};

use crate::auth::{use_auth, use_services, AuthState};
use crate::routes::Route;

/// Turns action notices into toasts. Notices caused by a missing or expired
/// session also clear the user and send them to the login page.
#[derive(Clone, Copy)]
pub struct Notifier {
    toast: Toasts,
    auth: AuthState,
    end_rejected: Callback<Notice, bool>,
}

pub fn use_notifier() -> Notifier {
    let services = use_services();
    let end_rejected =
        use_callback(move |notice: Notice| services.session.end_if_rejected(&notice));
    Notifier {
        toast: use_toast(),
        auth: use_auth(),
        end_rejected,
    }
}

impl Notifier {
    pub fn show(&self, notice: Notice) {
        let message = notice.message.clone();
        match notice.severity {
            Severity::Success => self.toast.success(message, ToastOptions::new()),
            Severity::Info => self.toast.info(message, ToastOptions::new()),
            Severity::Warning => self.toast.warning(message, ToastOptions::new()),
            Severity::Error => self.toast.error(message, ToastOptions::new()),
        }
        if self.end_rejected.call(notice) {
            let mut auth = self.auth;
            auth.clear_auth();
            navigator().push(Route::Login {});
        }
    }

    /// Show the notice of a failed load, if any.
    pub fn report(&self, result: Result<(), Notice>) {
        if let Err(notice) = result {
            self.show(notice);
        }
    }
}
