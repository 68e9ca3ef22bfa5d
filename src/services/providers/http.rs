/// Remote recommendation service over HTTP
///
/// Issues `GET {base}/recommendations` and expects a JSON array of
/// [`Recommendation`]. The client keeps a cookie store so the session cookie the
/// service hands out on the first call is sent back on every later one.
use crate::{
    error::{AppError, AppResult},
    models::Recommendation,
    services::providers::RecommendationSource,
};
use reqwest::{Client as HttpClient, Url};

const RECOMMENDATIONS_PATH: &str = "recommendations";

#[derive(Clone)]
pub struct HttpRecommendationSource {
    http_client: HttpClient,
    endpoint: Url,
}

impl HttpRecommendationSource {
    /// Creates a source for the service rooted at `base_url`
    pub fn new(base_url: &str) -> AppResult<Self> {
        let endpoint = Self::endpoint_for(base_url)?;

        // No timeout: a slow service keeps the panel in its loading state.
        let http_client = HttpClient::builder().cookie_store(true).build()?;

        Ok(Self {
            http_client,
            endpoint,
        })
    }

    fn endpoint_for(base_url: &str) -> AppResult<Url> {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), RECOMMENDATIONS_PATH);
        Url::parse(&url).map_err(|e| {
            AppError::Config(format!("Invalid recommendations URL '{}': {}", base_url, e))
        })
    }

    /// Full URL requested on every fetch
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl RecommendationSource for HttpRecommendationSource {
    async fn fetch_recommendations(&self) -> AppResult<Vec<Recommendation>> {
        let response = self.http_client.get(self.endpoint.clone()).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatus { status, body });
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw recommendation service response");

        let recommendations: Vec<Recommendation> =
            serde_json::from_str(&response_text).map_err(|e| {
                tracing::debug!(
                    error = %e,
                    response = %response_text,
                    "Failed to deserialize recommendation response"
                );
                AppError::MalformedBody(e)
            })?;

        tracing::info!(
            endpoint = %self.endpoint,
            results = recommendations.len(),
            source = self.name(),
            "Recommendations fetched"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_appends_recommendations_path() {
        let source = HttpRecommendationSource::new("https://recs.example.com").unwrap();
        assert_eq!(
            source.endpoint().as_str(),
            "https://recs.example.com/recommendations"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let source = HttpRecommendationSource::new("http://localhost:5000/").unwrap();
        assert_eq!(
            source.endpoint().as_str(),
            "http://localhost:5000/recommendations"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = HttpRecommendationSource::new("not a url");
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
