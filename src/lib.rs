pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod tracing;
pub mod youtube;

use std::sync::Arc;

use config::Config;
use llm::Summarizer;
use youtube::TranscriptFetcher;

/// Application state that will be shared across handlers
pub struct AppState<F, S>
where
    F: TranscriptFetcher,
    S: Summarizer,
{
    pub config: Arc<Config>,
    pub fetcher: Arc<F>,
    pub summarizer: Arc<S>,
}

impl<F, S> Clone for AppState<F, S>
where
    F: TranscriptFetcher,
    S: Summarizer,
{
    fn clone(&self) -> Self {
        AppState {
            config: Arc::clone(&self.config),
            fetcher: Arc::clone(&self.fetcher),
            summarizer: Arc::clone(&self.summarizer),
        }
    }
}
