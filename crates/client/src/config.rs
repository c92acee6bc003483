use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
pub const CONFIG_PATH: &str = "config.toml";

/// Parse `config.toml` contents. A malformed file yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

/// Apply `API_URL`, `IDENTITY_API_KEY` and `PROFILE_URL` on top of the file.
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    if let Some(url) = lookup("API_URL") {
        config.api.base_url = url;
    }
    if let Some(key) = lookup("IDENTITY_API_KEY") {
        config.identity.api_key = key;
    }
    if let Some(url) = lookup("PROFILE_URL") {
        config.identity.profile_url = url;
    }
    config
}

/// Load the configuration once and return the cached copy afterwards.
///
/// Native builds read `config.toml` and the environment (after `.env`);
/// web builds embed the file and take overrides at compile time.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(
            api = %config.api.base_url,
            features = ?config.features,
            "Configuration loaded"
        );
        config
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> AppConfig {
    dotenvy::dotenv().ok();
    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::warn!(error = %e, "{CONFIG_PATH} not found, using defaults");
            AppConfig::default()
        }
    };
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> AppConfig {
    let config = parse_config(include_str!("../../../config.toml"));
    apply_env_overrides(config, |key| {
        match key {
            "API_URL" => option_env!("API_URL"),
            "IDENTITY_API_KEY" => option_env!("IDENTITY_API_KEY"),
            "PROFILE_URL" => option_env!("PROFILE_URL"),
            _ => None,
        }
        .map(str::to_string)
    })
}
