//! Application state wiring all services together.
//!
//! Built once at process start and shared immutably by every handler.
//! The provider and biography source are type-erased so tests can swap
//! them; the history store is pinned to SQLite.

use std::path::Path;
use std::sync::Arc;

use secrecy::SecretString;

use talk2leader_core::biography::service::BiographyService;
use talk2leader_core::biography::source::BoxBiographySource;
use talk2leader_core::chat::responder::ChatResponder;
use talk2leader_core::history::service::HistoryService;
use talk2leader_core::llm::box_provider::BoxLlmProvider;
use talk2leader_infra::crypto::session_token::SessionSigner;
use talk2leader_infra::llm::gemini::GeminiProvider;
use talk2leader_infra::sqlite::history::SqliteHistoryStore;
use talk2leader_infra::sqlite::pool::DatabasePool;
use talk2leader_infra::wikipedia::WikipediaClient;
use talk2leader_types::config::GlobalConfig;

/// Concrete history service pinned to the SQLite store.
pub type ConcreteHistoryService = HistoryService<SqliteHistoryStore>;

/// Cookie settings used by the session middleware.
#[derive(Clone)]
pub struct SessionSettings {
    pub signer: SessionSigner,
    pub cookie_name: String,
}

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<ChatResponder>,
    pub biography: Arc<BiographyService>,
    pub history: Arc<ConcreteHistoryService>,
    pub sessions: Arc<SessionSettings>,
    pub config: Arc<GlobalConfig>,
}

impl AppState {
    /// Initialize the production state: open the session database and
    /// build the Gemini and Wikipedia clients.
    pub async fn init(
        config: GlobalConfig,
        data_dir: &Path,
        api_key: SecretString,
        session_secret: SecretString,
    ) -> anyhow::Result<Self> {
        let pool = DatabasePool::open_in(data_dir).await?;

        let provider = GeminiProvider::new(api_key).with_base_url(config.gemini_base_url.clone());
        let wikipedia = WikipediaClient::new(&config.wikipedia);

        Ok(Self::from_parts(
            config,
            BoxLlmProvider::new(provider),
            BoxBiographySource::new(wikipedia),
            SqliteHistoryStore::new(pool),
            session_secret,
        ))
    }

    /// Assemble state from already-built components.
    pub fn from_parts(
        config: GlobalConfig,
        provider: BoxLlmProvider,
        biography_source: BoxBiographySource,
        store: SqliteHistoryStore,
        session_secret: SecretString,
    ) -> Self {
        let responder = ChatResponder::new(provider, config.model.clone());
        let biography = BiographyService::new(biography_source, config.summary_max_chars);
        let sessions = SessionSettings {
            signer: SessionSigner::new(session_secret),
            cookie_name: config.session.cookie_name.clone(),
        };

        Self {
            responder: Arc::new(responder),
            biography: Arc::new(biography),
            history: Arc::new(HistoryService::new(store)),
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}
