use crate::credentials::{default_store, CredentialStore, StoredCredentials};
use serde::Deserialize;
use shared_types::{AppError, IdentityConfig, Role};
use std::sync::{Arc, Mutex};

/// Account known to the identity service.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityUser {
    pub uid: String,
    pub email: String,
}

/// Email/password accounts plus bearer credential issuance.
#[allow(async_fn_in_trait)]
pub trait IdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, AppError>;
    fn sign_out(&self);
    fn current_user(&self) -> Option<IdentityUser>;
    /// Mint a new bearer credential for the signed-in user.
    async fn fresh_token(&self) -> Result<String, AppError>;
}

/// Per-user profile documents holding the `role` attribute.
#[allow(async_fn_in_trait)]
pub trait ProfileStore {
    /// `Ok(None)` when the user has no profile or an unrecognized role.
    async fn role_of(&self, uid: &str) -> Result<Option<Role>, AppError>;
}

// ── REST identity service ───────────────────────────────────────────

#[derive(Debug, Clone)]
struct Credentials {
    user: IdentityUser,
    refresh_token: String,
}

impl From<StoredCredentials> for Credentials {
    fn from(stored: StoredCredentials) -> Self {
        Self {
            user: IdentityUser {
                uid: stored.uid,
                email: stored.email,
            },
            refresh_token: stored.refresh_token,
        }
    }
}

impl From<&Credentials> for StoredCredentials {
    fn from(credentials: &Credentials) -> Self {
        Self {
            uid: credentials.user.uid.clone(),
            email: credentials.user.email.clone(),
            refresh_token: credentials.refresh_token.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct RefreshResponse {
    id_token: String,
    refresh_token: String,
}

/// Identity service client speaking the password sign-in and secure-token
/// REST endpoints. Clones share the same signed-in state, which is mirrored
/// into a [`CredentialStore`] so a restart can pick the session back up.
#[derive(Clone)]
pub struct RestIdentity {
    http: reqwest::Client,
    config: IdentityConfig,
    credentials: Arc<Mutex<Option<Credentials>>>,
    persisted: Arc<dyn CredentialStore>,
}

impl RestIdentity {
    pub fn new(config: &IdentityConfig) -> Self {
        Self::with_store(config, default_store(config))
    }

    /// Starts from whatever `store` kept from a previous run.
    pub fn with_store(config: &IdentityConfig, store: Arc<dyn CredentialStore>) -> Self {
        let restored = store.load().map(Credentials::from);
        if let Some(credentials) = &restored {
            tracing::debug!(uid = %credentials.user.uid, "Loaded stored session");
        }
        Self {
            http: reqwest::Client::new(),
            config: config.clone(),
            credentials: Arc::new(Mutex::new(restored)),
            persisted: store,
        }
    }

    fn stored(&self) -> Option<Credentials> {
        self.credentials
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn store(&self, credentials: Option<Credentials>) {
        match &credentials {
            Some(c) => self.persisted.save(&StoredCredentials::from(c)),
            None => self.persisted.clear(),
        }
        *self.credentials.lock().unwrap_or_else(|e| e.into_inner()) = credentials;
    }
}

impl IdentityProvider for RestIdentity {
    #[tracing::instrument(skip(self, password))]
    async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, AppError> {
        let url = format!(
            "{}/accounts:signInWithPassword?key={}",
            self.config.auth_url.trim_end_matches('/'),
            self.config.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await
            .map_err(|e| AppError::network(format!("Identity service unreachable: {e}")))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            let err = sign_in_error(AppError::from_status(status.as_u16(), &body));
            tracing::warn!(error = %err, "Sign-in rejected");
            return Err(err);
        }

        let parsed: SignInResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::internal(format!("Unexpected sign-in response: {e}")))?;
        let user = IdentityUser {
            uid: parsed.local_id,
            email: if parsed.email.is_empty() {
                email.to_string()
            } else {
                parsed.email
            },
        };
        self.store(Some(Credentials {
            user: user.clone(),
            refresh_token: parsed.refresh_token,
        }));
        tracing::info!(uid = %user.uid, "Signed in");
        Ok(user)
    }

    fn sign_out(&self) {
        self.store(None);
    }

    fn current_user(&self) -> Option<IdentityUser> {
        self.stored().map(|c| c.user)
    }

    async fn fresh_token(&self) -> Result<String, AppError> {
        let credentials = self
            .stored()
            .ok_or_else(|| AppError::unauthorized("No active session"))?;
        let url = format!(
            "{}/token?key={}",
            self.config.token_url.trim_end_matches('/'),
            self.config.api_key
        );
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", credentials.refresh_token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::network(format!("Identity service unreachable: {e}")))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Token refresh rejected");
            return Err(AppError::unauthorized("Your session has expired"));
        }

        let parsed: RefreshResponse = serde_json::from_str(&body)
            .map_err(|e| AppError::internal(format!("Unexpected token response: {e}")))?;
        self.store(Some(Credentials {
            user: credentials.user,
            refresh_token: parsed.refresh_token,
        }));
        Ok(parsed.id_token)
    }
}

/// Map identity service error codes to messages fit for the login form.
fn sign_in_error(err: AppError) -> AppError {
    let code = err.message.split(" : ").next().unwrap_or_default().trim();
    match code {
        "INVALID_EMAIL" => AppError::bad_request("The email address is not valid."),
        "EMAIL_NOT_FOUND" => AppError::unauthorized("No account exists for this email."),
        "INVALID_PASSWORD" => AppError::unauthorized("The password is incorrect."),
        "INVALID_LOGIN_CREDENTIALS" => AppError::unauthorized("Invalid email or password."),
        "USER_DISABLED" => AppError::forbidden("This account has been disabled."),
        _ => err,
    }
}

// ── REST profile store ──────────────────────────────────────────────

/// Reads `users/{uid}` documents from the profile store, authenticating
/// with the identity's bearer credential.
#[derive(Clone)]
pub struct RestProfileStore<I> {
    http: reqwest::Client,
    base_url: String,
    identity: I,
}

impl<I: IdentityProvider> RestProfileStore<I> {
    pub fn new(config: &IdentityConfig, identity: I) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.profile_url.trim_end_matches('/').to_string(),
            identity,
        }
    }
}

impl<I: IdentityProvider> ProfileStore for RestProfileStore<I> {
    #[tracing::instrument(skip(self))]
    async fn role_of(&self, uid: &str) -> Result<Option<Role>, AppError> {
        let token = self.identity.fresh_token().await?;
        let url = format!("{}/users/{}", self.base_url, urlencoding::encode(uid));
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::network(format!("Profile store unreachable: {e}")))?;

        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(None);
        }
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(AppError::from_status(status.as_u16(), &body));
        }

        let doc: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| AppError::internal(format!("Unexpected profile document: {e}")))?;
        let role = role_attribute(&doc).and_then(Role::parse);
        if role.is_none() {
            tracing::warn!(uid, "Profile has no recognized role");
        }
        Ok(role)
    }
}

/// Accepts both the typed document shape (`fields.role.stringValue`) and a
/// flat `{"role": "..."}` object.
fn role_attribute(doc: &serde_json::Value) -> Option<&str> {
    doc.pointer("/fields/role/stringValue")
        .or_else(|| doc.get("role"))
        .and_then(|v| v.as_str())
}
