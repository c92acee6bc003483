use serde::{Deserialize, Serialize};
use shared_types::IdentityConfig;
use std::sync::{Arc, Mutex};

/// What has to survive a restart to rebuild the session: the account and a
/// refresh token to mint bearer credentials from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCredentials {
    pub uid: String,
    pub email: String,
    pub refresh_token: String,
}

/// Persistence for the signed-in identity. Implementations log and swallow
/// their own I/O failures; losing the stored session only means signing in
/// again.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Option<StoredCredentials>;
    fn save(&self, credentials: &StoredCredentials);
    fn clear(&self);
}

/// Keeps credentials for the life of the process. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Arc<Mutex<Option<StoredCredentials>>>,
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Option<StoredCredentials> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, credentials: &StoredCredentials) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = Some(credentials.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}

/// A JSON file on disk, relative to the working directory unless absolute.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CredentialStore for FileStore {
    fn load(&self) -> Option<StoredCredentials> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents)
            .map_err(|e| tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable session file"))
            .ok()
    }

    fn save(&self, credentials: &StoredCredentials) {
        let written = serde_json::to_string(credentials)
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&self.path, json).map_err(|e| e.to_string()));
        if let Err(error) = written {
            tracing::warn!(path = %self.path.display(), %error, "Could not persist session");
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Could not remove session file")
            }
        }
    }
}

/// The browser's local storage under a fixed key.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    pub const KEY: &'static str = "la-cocina.session";

    pub fn new() -> Self {
        Self {
            key: Self::KEY.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl CredentialStore for BrowserStore {
    fn load(&self) -> Option<StoredCredentials> {
        let raw = Self::storage()?.get_item(&self.key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    fn save(&self, credentials: &StoredCredentials) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("Local storage unavailable, session will not persist");
            return;
        };
        if let Ok(json) = serde_json::to_string(credentials) {
            if storage.set_item(&self.key, &json).is_err() {
                tracing::warn!("Could not persist session");
            }
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// Local storage on the web. Natively, the configured `session_file`, or
/// memory only when it is empty.
pub fn default_store(config: &IdentityConfig) -> Arc<dyn CredentialStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Arc::new(BrowserStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if config.session_file.trim().is_empty() {
            Arc::new(MemoryStore::default())
        } else {
            Arc::new(FileStore::new(config.session_file.trim()))
        }
    }
}
