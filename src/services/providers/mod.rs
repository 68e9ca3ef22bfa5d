/// Recommendation data sources
///
/// The panel only depends on [`RecommendationSource`], so the remote service can be
/// swapped for a stub in tests or pointed at a different host through configuration.
use crate::{error::AppResult, models::Recommendation};

pub mod http;

pub use http::HttpRecommendationSource;

/// Trait for anything that can produce a batch of recommendations
///
/// One call corresponds to one outbound request. Implementations must not retry or
/// cache; every failure is returned to the caller as-is.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch the current recommendations, in the order they should be displayed
    async fn fetch_recommendations(&self) -> AppResult<Vec<Recommendation>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}
