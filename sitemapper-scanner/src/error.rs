use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to fetch {url}: {reason}")]
    FetchError { url: String, reason: String },

    #[error("Other error: {0}")]
    Other(String),
}

impl ScanError {
    /// Wrap any error raised while fetching `url` as a [`ScanError::FetchError`].
    pub fn fetch(url: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        ScanError::FetchError {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
