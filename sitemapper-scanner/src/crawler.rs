use crate::error::{Result, ScanError};
use crate::filter::{FilterSummary, Layer, filter_links};
use crate::path::{Path, SiteReference};
use crate::result::{CrawlOutcome, CrawlStats, FailurePolicy, ScanFailure};
use crate::source::LinkSource;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Called with `(level, url)` right before a page is fetched.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Breadth-first, single-site crawler.
///
/// The root page is scanned as level 0. Each following level fetches every
/// not-yet-scanned path discovered by the previous one, with up to `workers`
/// fetches in flight, and the whole level finishes before the next starts.
/// The crawl stops after level `max_depth` or as soon as a level has nothing
/// new to scan.
pub struct Crawler<S> {
    source: S,
    max_depth: usize,
    workers: usize,
    failure_policy: FailurePolicy,
    progress_callback: Option<ProgressCallback>,
}

impl<S: LinkSource> Crawler<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_depth: 3,
            workers: 1,
            failure_policy: FailurePolicy::Abort,
            progress_callback: None,
        }
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch `url` and add the same-site paths it links to into `accumulator`.
    ///
    /// Relative links resolve against the URL that served the page, so a
    /// redirect from `/docs` to `/docs/` changes where `intro` points.
    pub async fn scan_layer(
        &self,
        site: &SiteReference,
        url: &str,
        accumulator: &mut Layer,
    ) -> Result<FilterSummary> {
        debug!("scan_layer: scanning {}", url);

        let page = self.source.fetch_links(url).await?;
        let base = Url::parse(&page.url)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", page.url, e)))?;

        Ok(filter_links(&page.links, site, &base, accumulator))
    }

    pub async fn crawl(&self, root_url: &str) -> Result<CrawlOutcome> {
        let root = Url::parse(root_url)
            .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", root_url, e)))?;
        let site = SiteReference::from_url(&root)?;

        info!(
            "Starting crawl of {} (max depth {}, {} workers)",
            root, self.max_depth, self.workers
        );

        let mut outcome = CrawlOutcome::new(site.clone(), Path::from_url(&root));
        let mut new_layer = Layer::new();

        // Level 0: the root itself. Its failure is always fatal.
        self.report_progress(0, root.to_string());
        let summary = self.scan_layer(&site, root.as_str(), &mut new_layer).await?;
        Self::record(&mut outcome.stats, summary);
        outcome.stats.pages_scanned += 1;
        outcome.stats.levels_expanded += 1;
        for path in &new_layer {
            outcome.registry.discover(path);
        }

        for level in 1..=self.max_depth {
            let current_layer = std::mem::take(&mut new_layer);
            let frontier: Vec<Path> = current_layer
                .into_iter()
                .filter(|path| !outcome.registry.is_scanned(path))
                .collect();

            if frontier.is_empty() {
                info!("Level {}: nothing new to scan, stopping", level);
                break;
            }

            info!("Scanning level {} ({} pages)", level, frontier.len());
            outcome.stats.levels_expanded += 1;

            let site_ref = &site;
            let mut scans = stream::iter(frontier)
                .map(move |path| async move {
                    let url = site_ref.fetch_url(&path);
                    self.report_progress(level, url.clone());

                    let mut found = Layer::new();
                    let result = self.scan_layer(site_ref, &url, &mut found).await;
                    (path, url, result.map(|summary| (found, summary)))
                })
                .buffer_unordered(self.workers);

            while let Some((path, url, result)) = scans.next().await {
                outcome.stats.pages_scanned += 1;

                match result {
                    Ok((found, summary)) => {
                        Self::record(&mut outcome.stats, summary);
                        for discovered in &found {
                            outcome.registry.discover(discovered);
                        }
                        new_layer.extend(found);
                    }
                    Err(e) => match self.failure_policy {
                        FailurePolicy::Abort => {
                            warn!("Aborting crawl: {}", e);
                            return Err(e);
                        }
                        FailurePolicy::Skip => {
                            warn!("Skipping {}: {}", url, e);
                            outcome.failures.push(ScanFailure {
                                path: path.clone(),
                                url,
                                error: e.to_string(),
                            });
                        }
                    },
                }

                outcome.registry.mark_scanned(&path);
            }
        }

        info!(
            "Crawl complete. {} paths discovered, {} pages scanned, {} failed",
            outcome.registry.len(),
            outcome.stats.pages_scanned,
            outcome.failures.len()
        );

        Ok(outcome)
    }

    fn record(stats: &mut CrawlStats, summary: FilterSummary) {
        stats.cross_domain_skipped += summary.cross_domain;
        stats.malformed_links += summary.malformed;
    }

    fn report_progress(&self, level: usize, url: String) {
        if let Some(ref callback) = self.progress_callback {
            callback(level, url);
        }
    }
}
