use crate::transcript::TranscriptFetcher;
use std::sync::Arc;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Caption source used by the transcript route
    pub fetcher: Arc<dyn TranscriptFetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn TranscriptFetcher>) -> Self {
        Self { fetcher }
    }
}
