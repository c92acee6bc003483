use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{ApiConfig, AppError};

use crate::identity::IdentityProvider;

/// HTTP client for the restaurant REST API.
///
/// Every request to a path outside the public allow-list carries a freshly
/// minted `Authorization: Bearer` credential. Without a session, or when the
/// credential cannot be obtained, the request is never sent.
#[derive(Clone)]
pub struct ApiClient<I> {
    http: reqwest::Client,
    base_url: String,
    public_routes: Vec<String>,
    identity: I,
}

impl<I: IdentityProvider> ApiClient<I> {
    pub fn new(config: &ApiConfig, identity: I) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            public_routes: config.public_routes.clone(),
            identity,
        }
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    /// Whether `path` (query string ignored) is served without credentials.
    pub fn is_public(&self, path: &str) -> bool {
        let path = path.split('?').next().unwrap_or(path);
        self.public_routes.iter().any(|route| route == path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.authorize(self.http.get(self.url(path)), path).await?;
        self.send(request, "GET", path).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(self.http.post(self.url(path)).json(body), path)
            .await?;
        self.send(request, "POST", path).await
    }

    /// POST without credentials, for endpoints that serve signed-out visitors.
    pub async fn post_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.url(path)).json(body);
        self.send(request, "POST", path).await
    }

    async fn authorize(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<RequestBuilder, AppError> {
        if self.is_public(path) {
            return Ok(request);
        }
        if self.identity.current_user().is_none() {
            tracing::warn!(path, "Request blocked: no active session");
            return Err(AppError::unauthorized("Please sign in to continue"));
        }
        match self.identity.fresh_token().await {
            Ok(token) => Ok(request.bearer_auth(token)),
            Err(e) => {
                tracing::warn!(path, error = %e, "Request blocked: credential unavailable");
                Err(AppError::unauthorized(e.message))
            }
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
    ) -> Result<T, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!(method, path, error = %e, "Request failed");
            AppError::network(format!("Could not reach the server: {e}"))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let err = AppError::from_status(status.as_u16(), &body);
            tracing::warn!(method, path, status = status.as_u16(), error = %err, "Request rejected");
            return Err(err);
        }

        tracing::debug!(method, path, status = status.as_u16(), "Request succeeded");
        let body = if body.trim().is_empty() { "{}" } else { body.as_str() };
        serde_json::from_str(body)
            .map_err(|e| AppError::internal(format!("Unexpected response from {path}: {e}")))
    }
}
