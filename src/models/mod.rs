mod recommendation;

pub use recommendation::{
    search_url, split_platforms, PlatformLink, Recommendation, PLATFORM_DELIMITER,
};
