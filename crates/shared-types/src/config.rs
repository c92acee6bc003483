use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional widgets are active.
///
/// Every field defaults to `false` so that a missing or incomplete config
/// file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub chatbot: bool,
}

/// Where the restaurant REST API lives and which paths skip the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_public_routes")]
    pub public_routes: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            public_routes: default_public_routes(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_public_routes() -> Vec<String> {
    vec!["/menu".to_string()]
}

/// Identity service (email/password accounts) and the profile store holding
/// each user's role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default)]
    pub profile_url: String,
    /// Native builds keep the signed-in session here between runs; empty
    /// keeps it in memory. The web build always uses local storage.
    #[serde(default)]
    pub session_file: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            auth_url: default_auth_url(),
            token_url: default_token_url(),
            profile_url: String::new(),
            session_file: String::new(),
        }
    }
}

fn default_auth_url() -> String {
    "https://identitytoolkit.googleapis.com/v1".to_string()
}

fn default_token_url() -> String {
    "https://securetoken.googleapis.com/v1".to_string()
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub features: FeatureFlags,
}
