use thiserror::Error;

/// Errors from repository operations (used by trait definitions in talk2leader-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by an encyclopedia source.
///
/// Callers of the biography lookup never see these: they are logged and
/// downgraded to "not found".
#[derive(Debug, Error)]
pub enum BiographyError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_repository_error_variants() {
        for err in [
            RepositoryError::Query("locked".to_string()),
            RepositoryError::Serialization("bad json".to_string()),
        ] {
            let text = match &err {
                RepositoryError::Query(_) => "query",
                RepositoryError::Serialization(_) => "serialization",
            };
            assert!(err.to_string().starts_with(text));
        }
    }

    #[test]
    fn test_biography_error_display() {
        let err = BiographyError::Status {
            status: 503,
            body: "down".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 503: down");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Missing("GEMINI_API_KEY");
        assert_eq!(err.to_string(), "missing required setting: GEMINI_API_KEY");
    }
}
