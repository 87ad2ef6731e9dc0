use crate::path::{Path, SiteReference};
use crate::registry::VisitedRegistry;

/// What the crawler does when a page cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop the whole crawl and return the fetch error.
    #[default]
    Abort,
    /// Record the failure, treat the path as scanned and keep crawling.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub path: Path,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    /// Levels that scanned at least one page; the root scan is level 0.
    pub levels_expanded: usize,
    /// Fetch attempts, including the root and failed ones.
    pub pages_scanned: usize,
    pub cross_domain_skipped: usize,
    pub malformed_links: usize,
}

/// Everything a finished crawl produced.
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub site: SiteReference,
    /// Normalized path of the root URL. Not part of the registry unless
    /// some page links to it.
    pub root: Path,
    pub registry: VisitedRegistry,
    pub failures: Vec<ScanFailure>,
    pub stats: CrawlStats,
}

impl CrawlOutcome {
    pub fn new(site: SiteReference, root: Path) -> Self {
        Self {
            site,
            root,
            registry: VisitedRegistry::new(),
            failures: Vec::new(),
            stats: CrawlStats::default(),
        }
    }

    /// Every path discovered on the site, scanned or not. Unordered.
    pub fn paths(&self) -> Vec<Path> {
        self.registry.paths().cloned().collect()
    }

    /// The paths to emit, optionally adding the root's own path.
    pub fn sitemap_paths(&self, include_root: bool) -> Vec<Path> {
        let mut paths = self.paths();
        if include_root && !self.registry.contains(self.root.as_str()) {
            paths.push(self.root.clone());
        }
        paths
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
