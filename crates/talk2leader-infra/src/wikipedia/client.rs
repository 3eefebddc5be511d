//! WikipediaClient -- concrete [`BiographySource`] backed by Wikipedia.
//!
//! Issues one `action=query` request per lookup asking for the plain-text
//! introduction (`prop=extracts`, `exintro`, `explaintext`) and the page URL
//! (`prop=info`, `inprop=url`). Redirects are followed server-side.

use reqwest::header::USER_AGENT;

use talk2leader_core::biography::source::BiographySource;
use talk2leader_types::config::WikipediaConfig;
use talk2leader_types::error::BiographyError;
use talk2leader_types::leader::EncyclopediaPage;

use super::types::{QueryPage, QueryResponse};

/// Wikipedia encyclopedia client.
pub struct WikipediaClient {
    client: reqwest::Client,
    base_url: String,
    user_agent: String,
}

impl WikipediaClient {
    pub fn new(config: &WikipediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.resolved_base_url().trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/w/api.php", self.base_url)
    }

    /// Pick the page for `title` out of a decoded query response.
    fn into_page(response: QueryResponse) -> Option<EncyclopediaPage> {
        let page: QueryPage = response.query?.pages.into_iter().next()?;
        if page.missing || page.invalid {
            return None;
        }

        Some(EncyclopediaPage {
            full_url: page.fullurl.unwrap_or_default(),
            extract: page.extract.unwrap_or_default().trim().to_string(),
            title: page.title,
        })
    }
}

impl BiographySource for WikipediaClient {
    async fn fetch_page(&self, title: &str) -> Result<Option<EncyclopediaPage>, BiographyError> {
        if title.is_empty() {
            return Ok(None);
        }

        let response = self
            .client
            .get(self.api_url())
            .header(USER_AGENT, &self.user_agent)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "extracts|info"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("inprop", "url"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .send()
            .await
            .map_err(|e| BiographyError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BiographyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: QueryResponse = response
            .json()
            .await
            .map_err(|e| BiographyError::Deserialization(e.to_string()))?;

        Ok(Self::into_page(decoded))
    }
}
