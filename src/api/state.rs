use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    panel::RecommendationPanel,
    services::{HttpRecommendationSource, RecommendationSource},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub panel: RecommendationPanel,
}

impl AppState {
    /// Wraps an existing panel
    pub fn new(panel: RecommendationPanel) -> Self {
        Self { panel }
    }

    /// Builds the panel against the configured remote service
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let source: Arc<dyn RecommendationSource> =
            Arc::new(HttpRecommendationSource::new(&config.recommendations_url)?);
        let panel = RecommendationPanel::new(source, &config.search_url)?;
        Ok(Self::new(panel))
    }
}
