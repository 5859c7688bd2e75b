use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Text generator backing the assistant endpoints.
    /// `None` when no API key is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// The configured generator, or `LlmNotConfigured`.
    pub fn generator(&self) -> Result<Arc<dyn TextGenerator>, AppError> {
        self.generator.clone().ok_or(AppError::LlmNotConfigured)
    }
}
