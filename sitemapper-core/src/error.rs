use sitemapper_scanner::ScanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SitemapError>;
