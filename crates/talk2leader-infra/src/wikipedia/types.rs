//! MediaWiki `action=query` response types (`formatversion=2`).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub query: Option<QueryBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryBody {
    #[serde(default)]
    pub pages: Vec<QueryPage>,
}

/// One page entry. Missing and invalid titles come back flagged rather
/// than absent.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryPage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub missing: bool,
    #[serde(default)]
    pub invalid: bool,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub fullurl: Option<String>,
}
