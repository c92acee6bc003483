pub mod api;
pub mod config;
pub mod credentials;
pub mod dashboards;
pub mod gateway;
pub mod identity;
pub mod session;

pub use api::RestaurantApi;
pub use config::load_config;
pub use credentials::{default_store, CredentialStore, MemoryStore, StoredCredentials};
pub use gateway::ApiClient;
pub use identity::{IdentityProvider, IdentityUser, ProfileStore, RestIdentity, RestProfileStore};
pub use session::SessionProvider;

/// The concrete stack the application runs on.
pub type Api = RestaurantApi<RestIdentity>;
pub type Session = SessionProvider<RestIdentity, RestProfileStore<RestIdentity>>;

/// Wire the identity service, profile store, session provider and API client
/// together. All of them share the same signed-in identity.
pub fn connect(config: &shared_types::AppConfig) -> (Api, Session) {
    connect_with_store(config, default_store(&config.identity))
}

/// Like [`connect`], persisting the signed-in identity into `store`.
pub fn connect_with_store(
    config: &shared_types::AppConfig,
    store: std::sync::Arc<dyn CredentialStore>,
) -> (Api, Session) {
    let identity = RestIdentity::with_store(&config.identity, store);
    let profiles = RestProfileStore::new(&config.identity, identity.clone());
    let session = SessionProvider::new(identity.clone(), profiles);
    let api = RestaurantApi::new(ApiClient::new(&config.api, identity));
    (api, session)
}
