use crate::models::{AuthUser, Role};

pub const LOGIN_PATH: &str = "/login";
pub const ACCESS_DENIED_PATH: &str = "/access-denied";

pub const ADMIN_ONLY: &[Role] = &[Role::Admin];
pub const KITCHEN_ONLY: &[Role] = &[Role::Kitchen];
pub const WAITER_ONLY: &[Role] = &[Role::Waiter];
pub const CLIENT_ONLY: &[Role] = &[Role::Client];

/// Outcome of guarding a protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    RedirectLogin,
    RedirectDenied,
}

impl AccessDecision {
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Render => None,
            AccessDecision::RedirectLogin => Some(LOGIN_PATH),
            AccessDecision::RedirectDenied => Some(ACCESS_DENIED_PATH),
        }
    }
}

/// Decide whether `session` may see a route restricted to `allowed`.
pub fn check_access(session: Option<&AuthUser>, allowed: &[Role]) -> AccessDecision {
    match session {
        None => AccessDecision::RedirectLogin,
        Some(user) if allowed.contains(&user.role) => AccessDecision::Render,
        Some(_) => AccessDecision::RedirectDenied,
    }
}
