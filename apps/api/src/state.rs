use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::document::DocumentExtractor;
use crate::interview::models::Session;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: Arc<dyn CompletionService>,
    pub documents: Arc<dyn DocumentExtractor>,
    /// The one interview session of this process. The lock is held for a whole
    /// interaction, so interactions are processed one at a time.
    pub session: Arc<Mutex<Session>>,
}

impl AppState {
    pub fn new(
        config: Config,
        llm: Arc<dyn CompletionService>,
        documents: Arc<dyn DocumentExtractor>,
    ) -> Self {
        Self {
            config,
            llm,
            documents,
            session: Arc::new(Mutex::new(Session::new())),
        }
    }
}
