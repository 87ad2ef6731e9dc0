//! Where hyperlinks come from.

use crate::error::{Result, ScanError};
use reqwest::Client;
use scraper::{Html, Selector};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// A fetched resource and the raw hyperlink targets found in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// The URL that served the content, after any redirects. Relative links
    /// resolve against this, not against the requested URL.
    pub url: String,
    pub links: Vec<String>,
}

impl FetchedPage {
    pub fn new(url: impl Into<String>, links: Vec<String>) -> Self {
        Self {
            url: url.into(),
            links,
        }
    }
}

/// Given a URL, return the raw hyperlink targets found in the resource.
pub trait LinkSource: Send + Sync {
    fn fetch_links(&self, url: &str) -> impl Future<Output = Result<FetchedPage>> + Send;
}

/// Fetches pages over HTTP and extracts `a[href]` targets.
pub struct HttpLinkSource {
    client: Client,
}

impl HttpLinkSource {
    pub fn new() -> Result<Self> {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Sitemapper/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    /// Extract every `href` of an `<a>` element, in document order.
    pub fn extract_links(html: &str) -> Result<Vec<String>> {
        let anchor_selector = Selector::parse("a[href]")
            .map_err(|e| ScanError::Other(format!("Invalid anchor selector: {}", e)))?;

        let document = Html::parse_document(html);
        Ok(document
            .select(&anchor_selector)
            .filter_map(|element| element.value().attr("href"))
            .map(str::to_string)
            .collect())
    }
}

impl LinkSource for HttpLinkSource {
    async fn fetch_links(&self, url: &str) -> Result<FetchedPage> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScanError::fetch(url, e))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if final_url != url {
            debug!("{} redirected to {}", url, final_url);
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase());

        let body = response.text().await.map_err(|e| ScanError::fetch(url, e))?;

        debug!("{} -> {} ({:?})", url, status.as_u16(), content_type);

        // Only parse HTML content; a missing content type is treated as HTML
        let is_html = content_type
            .as_ref()
            .map(|ct| ct.contains("text/html") || ct.contains("application/xhtml"))
            .unwrap_or(true);

        if !is_html {
            return Ok(FetchedPage::new(final_url, Vec::new()));
        }

        Ok(FetchedPage::new(final_url, Self::extract_links(&body)?))
    }
}
