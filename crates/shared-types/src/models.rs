use serde::{Deserialize, Serialize};
use validator::Validate;

/// Staff or customer role stored in the user's profile document.
///
/// - `Admin`: manages workers, sees clients and the full order history.
/// - `Kitchen`: moves orders through the preparation pipeline.
/// - `Waiter`: places orders on behalf of tables.
/// - `Client`: places and follows their own orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Kitchen,
    Waiter,
    Client,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Kitchen, Role::Waiter, Role::Client];

    /// Parse a profile `role` attribute. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "kitchen" => Some(Role::Kitchen),
            "waiter" => Some(Role::Waiter),
            "client" => Some(Role::Client),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Kitchen => "kitchen",
            Role::Waiter => "waiter",
            Role::Client => "client",
        }
    }

    /// Landing page after sign-in.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Admin => "/admin-dashboard",
            Role::Kitchen => "/kitchen-dashboard",
            Role::Waiter => "/waiter-dashboard",
            Role::Client => "/client-dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Kitchen => "Kitchen",
            Role::Waiter => "Waiter",
            Role::Client => "Client",
        }
    }
}

/// The signed-in user as seen by the rest of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub role: Role,
}

/// Email/password sign-in form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(
        length(min = 1, message = "Please fill in every field."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Please fill in every field."))]
    pub password: String,
}

/// Customer self-registration form posted to `/register-client`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientRequest {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Generic `{ "message": "..." }` acknowledgement returned by mutations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
