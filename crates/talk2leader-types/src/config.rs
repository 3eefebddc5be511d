//! Global configuration types for Talk2Leader.
//!
//! `GlobalConfig` represents the optional `config.toml` in the data
//! directory. Secrets never live here: the API key and session secret
//! are read from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default generative model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Top-level configuration for the Talk2Leader server.
///
/// Loaded from `~/.talk2leader/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Interface to bind the HTTP server to.
    pub host: String,
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Generative model identifier.
    pub model: String,
    /// Base URL of the generative-text API.
    pub gemini_base_url: String,
    /// Encyclopedia settings.
    pub wikipedia: WikipediaConfig,
    /// Maximum summary length in characters before truncation.
    pub summary_max_chars: usize,
    /// Session cookie and expiry settings.
    pub session: SessionConfig,
    /// Directory served under `/static`, if it exists.
    pub static_dir: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            model: DEFAULT_MODEL.to_string(),
            gemini_base_url: "https://generativelanguage.googleapis.com".to_string(),
            wikipedia: WikipediaConfig::default(),
            summary_max_chars: 1000,
            session: SessionConfig::default(),
            static_dir: None,
        }
    }
}

/// Encyclopedia (Wikipedia) client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaConfig {
    /// Language edition, e.g. `en`.
    pub language: String,
    /// User-Agent sent with every request (required by Wikimedia policy).
    pub user_agent: String,
    /// Override for the API base URL; defaults to `https://{language}.wikipedia.org`.
    pub base_url: Option<String>,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            user_agent: "Talk2Leader/1.0 (talk2leader@gmail.com)".to_string(),
            base_url: None,
        }
    }
}

impl WikipediaConfig {
    /// Resolve the API base URL for the configured language edition.
    pub fn resolved_base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("https://{}.wikipedia.org", self.language))
    }
}

/// Session cookie settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the cookie carrying the signed session id.
    pub cookie_name: String,
    /// Histories not updated within this many days are purged.
    pub ttl_days: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "talk2leader_session".to_string(),
            ttl_days: 31,
        }
    }
}

/// Log output format, chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.summary_max_chars, 1000);
        assert_eq!(config.session.ttl_days, 31);
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_str = r#"
port = 8080

[wikipedia]
language = "fr"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.wikipedia.language, "fr");
        assert!(config.wikipedia.user_agent.starts_with("Talk2Leader/1.0"));
        assert_eq!(config.wikipedia.resolved_base_url(), "https://fr.wikipedia.org");
    }

    #[test]
    fn test_static_dir_parses_path() {
        let config: GlobalConfig = toml::from_str(r#"static_dir = "/srv/talk2leader/static""#).unwrap();
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/talk2leader/static")));
    }

    #[test]
    fn test_wikipedia_base_url_override() {
        let wiki = WikipediaConfig {
            base_url: Some("http://localhost:9000".to_string()),
            ..Default::default()
        };
        assert_eq!(wiki.resolved_base_url(), "http://localhost:9000");
    }
}
