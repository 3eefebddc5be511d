//! BiographySource trait and its object-safe wrapper.

use std::future::Future;
use std::pin::Pin;

use talk2leader_types::error::BiographyError;
use talk2leader_types::leader::EncyclopediaPage;

/// Port to an encyclopedia service.
///
/// Implementations live in talk2leader-infra (e.g., `WikipediaClient`).
pub trait BiographySource: Send + Sync {
    /// Fetch the page whose title matches `title` exactly.
    ///
    /// Returns `Ok(None)` when no such page exists.
    fn fetch_page(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Option<EncyclopediaPage>, BiographyError>> + Send;
}

/// Object-safe version of [`BiographySource`] with boxed futures.
pub trait BiographySourceDyn: Send + Sync {
    fn fetch_page_boxed<'a>(
        &'a self,
        title: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<EncyclopediaPage>, BiographyError>> + Send + 'a>>;
}

impl<T: BiographySource> BiographySourceDyn for T {
    fn fetch_page_boxed<'a>(
        &'a self,
        title: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<EncyclopediaPage>, BiographyError>> + Send + 'a>>
    {
        Box::pin(self.fetch_page(title))
    }
}

/// Type-erased encyclopedia source.
pub struct BoxBiographySource {
    inner: Box<dyn BiographySourceDyn + Send + Sync>,
}

impl BoxBiographySource {
    pub fn new<T: BiographySource + 'static>(source: T) -> Self {
        Self {
            inner: Box::new(source),
        }
    }

    pub async fn fetch_page(&self, title: &str) -> Result<Option<EncyclopediaPage>, BiographyError> {
        self.inner.fetch_page_boxed(title).await
    }
}
