use dioxus::prelude::*;
use shared_types::{AuthUser, Role};

use crate::Services;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
    /// False until the startup restore has finished.
    pub ready: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
            ready: Signal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn is_ready(&self) -> bool {
        *self.ready.read()
    }

    pub fn role(&self) -> Option<Role> {
        self.current_user.read().as_ref().map(|u| u.role)
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }

    pub fn finish_restore(&mut self, user: Option<AuthUser>) {
        self.current_user.set(user);
        self.ready.set(true);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the API client and session provider.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Sign out everywhere and forget the reactive user.
pub fn sign_out(services: &Services, auth: &mut AuthState) {
    services.session.sign_out();
    auth.clear_auth();
}
