//! The recommendations panel
//!
//! Owns the container state and drives it through
//! `Idle → Loading → {Populated | Empty | Error}` on every trigger. Each trigger
//! takes a sequence token; a fetch result is only applied while its token is
//! still the latest one issued, so an older response that resolves late never
//! overwrites a newer one.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use reqwest::Url;
use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    services::RecommendationSource,
};

pub mod render;
pub mod state;

pub use render::render;
pub use state::{Card, PanelState};

#[derive(Clone)]
pub struct RecommendationPanel {
    source: Arc<dyn RecommendationSource>,
    search_base: Url,
    state: Arc<RwLock<PanelState>>,
    latest_token: Arc<AtomicU64>,
}

impl RecommendationPanel {
    /// Creates an idle panel backed by `source`, linking platforms through `search_url`
    pub fn new(source: Arc<dyn RecommendationSource>, search_url: &str) -> AppResult<Self> {
        let search_base = Url::parse(search_url).map_err(|e| {
            AppError::Config(format!("Invalid search URL '{}': {}", search_url, e))
        })?;

        Ok(Self {
            source,
            search_base,
            state: Arc::new(RwLock::new(PanelState::Idle)),
            latest_token: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Runs one fetch cycle and returns the state on display once it finishes
    ///
    /// Never fails: every retrieval error becomes [`PanelState::Error`] and is
    /// logged. If a newer trigger was issued meanwhile, this call's result is
    /// discarded and the returned state is whatever the newer one has applied.
    pub async fn fetch_recommendations(&self) -> PanelState {
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;

        self.apply(token, PanelState::Loading).await;

        let next = match self.source.fetch_recommendations().await {
            Ok(recommendations) => {
                PanelState::from_recommendations(&recommendations, &self.search_base)
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    source = self.source.name(),
                    token,
                    "There was a problem fetching recommendations"
                );
                PanelState::Error
            }
        };

        self.apply(token, next).await;
        self.state().await
    }

    /// Replaces the container state if `token` is still the latest.
    async fn apply(&self, token: u64, next: PanelState) {
        let mut state = self.state.write().await;

        let latest = self.latest_token.load(Ordering::SeqCst);
        if token != latest {
            tracing::debug!(
                token,
                latest,
                discarded = next.label(),
                "Discarding stale panel update"
            );
            return;
        }

        tracing::debug!(token, from = state.label(), to = next.label(), "Panel state change");
        *state = next;
    }

    /// Snapshot of the current container state
    pub async fn state(&self) -> PanelState {
        self.state.read().await.clone()
    }

    /// Current container HTML
    pub async fn render(&self) -> String {
        render(&*self.state.read().await)
    }
}
