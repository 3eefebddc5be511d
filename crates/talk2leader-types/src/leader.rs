//! Leader biography types.
//!
//! A [`LeaderInfo`] is built on demand for each chat page render and
//! discarded once the response is sent. It is never persisted.

use serde::{Deserialize, Serialize};

/// Normalized biography record shown on the chat page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderInfo {
    /// The name exactly as supplied by the caller (not the resolved page title).
    pub name: String,
    /// Introductory summary, capped at the configured length plus an ellipsis.
    pub summary: String,
    /// Canonical URL of the encyclopedia page.
    pub wiki_url: String,
    /// Always `true` for a constructed record; absent pages yield no record.
    pub exists: bool,
}

/// Raw page data returned by an encyclopedia source before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncyclopediaPage {
    /// Resolved page title (may differ from the query after redirects).
    pub title: String,
    /// Plain-text introductory extract.
    pub extract: String,
    /// Canonical full URL of the page.
    pub full_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leader_info_serializes_expected_fields() {
        let info = LeaderInfo {
            name: "Napoleon".to_string(),
            summary: "French emperor.".to_string(),
            wiki_url: "https://en.wikipedia.org/wiki/Napoleon".to_string(),
            exists: true,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["name"], "Napoleon");
        assert_eq!(json["wiki_url"], "https://en.wikipedia.org/wiki/Napoleon");
        assert_eq!(json["exists"], true);
    }
}
