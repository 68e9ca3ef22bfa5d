pub mod providers;

pub use providers::{HttpRecommendationSource, RecommendationSource};
