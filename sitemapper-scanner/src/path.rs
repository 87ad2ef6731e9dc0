//! Site-relative paths and the site they are relative to.

use crate::error::{Result, ScanError};
use std::borrow::Borrow;
use std::fmt;
use url::Url;

/// A normalized, site-relative URL path.
///
/// Paths are the crawl's deduplication key: the escaped path component of a
/// URL with every trailing `/` removed, so `/docs/` and `/docs` are the same
/// path. The site root (`/`) normalizes to the empty path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Path(String);

impl Path {
    pub fn normalize(raw: &str) -> Self {
        Path(raw.trim_end_matches('/').to_string())
    }

    /// Path of an already-parsed URL. `Url::path` is percent-encoded.
    pub fn from_url(url: &Url) -> Self {
        Self::normalize(url.path())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Path {
    fn from(raw: &str) -> Self {
        Path::normalize(raw)
    }
}

/// Scheme and host of the crawl root.
///
/// Host comparison ignores the port, URL reconstruction keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteReference {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl SiteReference {
    pub fn parse(root_url: &str) -> Result<Self> {
        let url = Url::parse(root_url)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", root_url, e)))?;
        Self::from_url(&url)
    }

    pub fn from_url(url: &Url) -> Result<Self> {
        let host = url
            .host_str()
            .ok_or_else(|| ScanError::InvalidUrl(format!("{} has no host", url)))?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port(),
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `scheme://host[:port]`, without a trailing slash.
    pub fn origin(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }

    /// Absolute URL string for a path on this site.
    pub fn absolute(&self, path: &Path) -> String {
        format!("{}{}", self.origin(), path)
    }

    /// URL to fetch for a path. Same as [`absolute`](Self::absolute) except
    /// that the root path is requested as `/`.
    pub fn fetch_url(&self, path: &Path) -> String {
        if path.is_root() {
            format!("{}/", self.origin())
        } else {
            self.absolute(path)
        }
    }

    pub fn is_same_host(&self, url: &Url) -> bool {
        url.host_str() == Some(self.host.as_str())
    }
}
