//! Configuration loading for Talk2Leader.
//!
//! - Data directory: `TALK2LEADER_DATA_DIR`, else `~/.talk2leader`.
//! - `config.toml` in the data directory deserializes into [`GlobalConfig`];
//!   a missing or malformed file falls back to defaults.
//! - Secrets come from the environment only and are wrapped in
//!   [`SecretString`]: `GEMINI_API_KEY` and `TALK2LEADER_SESSION_SECRET`.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

use talk2leader_types::config::GlobalConfig;
use talk2leader_types::error::ConfigError;

use crate::crypto::session_token::{MIN_SECRET_LEN, generate_secret};

pub const DATA_DIR_ENV: &str = "TALK2LEADER_DATA_DIR";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const SESSION_SECRET_ENV: &str = "TALK2LEADER_SESSION_SECRET";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `TALK2LEADER_DATA_DIR` environment variable
/// 2. `~/.talk2leader`
/// 3. `./.talk2leader`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".talk2leader");
    }

    PathBuf::from(".talk2leader")
}

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

/// Read a non-empty environment variable as a secret.
fn env_secret(key: &str) -> Option<SecretString> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
}

/// The generative provider API key. Required to serve.
pub fn gemini_api_key() -> Result<SecretString, ConfigError> {
    env_secret(GEMINI_API_KEY_ENV).ok_or(ConfigError::Missing(GEMINI_API_KEY_ENV))
}

/// Where the session secret came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretOrigin {
    Configured,
    Ephemeral,
}

/// Resolve the session signing secret.
///
/// A configured secret must be at least [`MIN_SECRET_LEN`] bytes. Without
/// one, startup fails unless `allow_ephemeral` is set, in which case a
/// random secret is generated and sessions will not survive a restart.
pub fn resolve_session_secret(
    configured: Option<SecretString>,
    allow_ephemeral: bool,
) -> Result<(SecretString, SecretOrigin), ConfigError> {
    match configured {
        Some(secret) if secret.expose_secret().len() < MIN_SECRET_LEN => Err(ConfigError::Invalid {
            key: SESSION_SECRET_ENV,
            reason: format!("must be at least {MIN_SECRET_LEN} bytes"),
        }),
        Some(secret) => Ok((secret, SecretOrigin::Configured)),
        None if allow_ephemeral => {
            tracing::warn!("No session secret configured; generated an ephemeral one (sessions end on restart)");
            Ok((SecretString::from(generate_secret()), SecretOrigin::Ephemeral))
        }
        None => Err(ConfigError::Missing(SESSION_SECRET_ENV)),
    }
}

/// Session secret from `TALK2LEADER_SESSION_SECRET`, if set.
pub fn configured_session_secret() -> Option<SecretString> {
    env_secret(SESSION_SECRET_ENV)
}
