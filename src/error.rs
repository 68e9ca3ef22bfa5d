/// Application-level errors
///
/// The first three variants are the ways a recommendation fetch can fail; the
/// panel folds all of them into its error state. `Config` only surfaces at startup.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Recommendation service returned status {status}: {body}")]
    UpstreamStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Malformed recommendation payload: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
