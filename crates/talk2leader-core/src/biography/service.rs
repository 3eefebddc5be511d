//! Biography lookup with summary truncation and a not-found fallback.
//!
//! # Fallback policy
//!
//! Biography data only enriches the chat page. Any fault raised by the
//! encyclopedia source is logged at `warn` and reported to the caller as
//! "not found", so a failing encyclopedia can never block a page render.

use tracing::{debug, warn};

use talk2leader_types::leader::LeaderInfo;

use super::source::BoxBiographySource;

/// Marker appended to a truncated summary.
pub const ELLIPSIS: &str = "...";

/// Default summary cap in characters.
pub const DEFAULT_SUMMARY_MAX_CHARS: usize = 1000;

/// Cap `summary` at `max_chars` characters, appending [`ELLIPSIS`] when cut.
///
/// Counts Unicode scalar values, not bytes. A summary of exactly
/// `max_chars` characters is returned unchanged.
pub fn truncate_summary(summary: &str, max_chars: usize) -> String {
    match summary.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &summary[..byte_idx]),
        None => summary.to_string(),
    }
}

/// Looks up leader biographies from an encyclopedia source.
pub struct BiographyService {
    source: BoxBiographySource,
    summary_max_chars: usize,
}

impl BiographyService {
    pub fn new(source: BoxBiographySource, summary_max_chars: usize) -> Self {
        Self {
            source,
            summary_max_chars,
        }
    }

    /// Look up `name` (untrimmed, case as supplied).
    ///
    /// Returns `None` when the page does not exist or the source fails.
    pub async fn lookup(&self, name: &str) -> Option<LeaderInfo> {
        match self.source.fetch_page(name).await {
            Ok(Some(page)) => Some(LeaderInfo {
                name: name.to_string(),
                summary: truncate_summary(&page.extract, self.summary_max_chars),
                wiki_url: page.full_url,
                exists: true,
            }),
            Ok(None) => {
                debug!(leader = %name, "No encyclopedia page");
                None
            }
            Err(e) => {
                warn!(leader = %name, error = %e, "Biography lookup failed, treating as not found");
                None
            }
        }
    }
}
