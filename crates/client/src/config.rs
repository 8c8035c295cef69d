use shared_types::{AppConfig, JoinError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Copy of `config.toml` taken at build time. Web builds have no filesystem,
/// so this is the only source there.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a `config.toml` document.
pub fn parse_config(contents: &str) -> Result<AppConfig, JoinError> {
    toml::from_str(contents).map_err(|e| JoinError::invalid_config(e.to_string()))
}

/// Load the config once and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call has effect.
///
/// Native builds read `config.toml` from the working directory and fall back
/// to the embedded copy, then to defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = read_runtime_config().unwrap_or_else(embedded_config);
        tracing::info!(action = %config.join.action, "join config loaded");
        config
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_runtime_config() -> Option<AppConfig> {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(error = %e, path = CONFIG_PATH, "config unparseable, using embedded copy");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, path = CONFIG_PATH, "config not found, using embedded copy");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_config() -> Option<AppConfig> {
    None
}

fn embedded_config() -> AppConfig {
    parse_config(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "embedded config unparseable, defaulting");
        AppConfig::default()
    })
}
