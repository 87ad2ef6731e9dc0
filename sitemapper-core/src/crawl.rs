use crate::error::{Result, SitemapError};
use indicatif::{ProgressBar, ProgressStyle};
use sitemapper_scanner::{CrawlOutcome, Crawler, FailurePolicy, HttpLinkSource, LinkSource, Path};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use url::Url;

pub const DEFAULT_ROOT_URL: &str = "https://www.calhoun.io/";

/// Options for configuring a crawl operation
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub url: String,
    pub max_depth: usize,
    pub threads: usize,
    pub timeout_secs: u64,
    pub failure_policy: FailurePolicy,
    pub show_progress_bars: bool,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_ROOT_URL.to_string(),
            max_depth: 3,
            threads: 4,
            timeout_secs: 10,
            failure_policy: FailurePolicy::Abort,
            show_progress_bars: true,
        }
    }
}

/// Callback for reporting crawl progress
pub type CrawlProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Extract the normalized path component from a URL, for display.
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = Path::from_url(&u);
            if path.is_root() {
                "/".to_string()
            } else {
                path.to_string()
            }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Crawl over HTTP with the given options
pub async fn execute_crawl(
    options: CrawlOptions,
    progress_callback: Option<CrawlProgressCallback>,
) -> Result<CrawlOutcome> {
    let source = HttpLinkSource::with_timeout(options.timeout_secs)?;
    execute_crawl_with(source, options, progress_callback).await
}

/// Crawl using any link source
pub async fn execute_crawl_with<S: LinkSource>(
    source: S,
    options: CrawlOptions,
    progress_callback: Option<CrawlProgressCallback>,
) -> Result<CrawlOutcome> {
    let CrawlOptions {
        url,
        threads,
        max_depth,
        failure_policy,
        show_progress_bars,
        ..
    } = options;

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    let processed_count = Arc::new(AtomicUsize::new(0));

    let pb_clone = progress_bar.clone();
    let count_clone = processed_count.clone();
    let callback_clone = progress_callback.clone();
    let internal_progress_callback: sitemapper_scanner::ProgressCallback =
        Arc::new(move |level: usize, page_url: String| {
            let count = count_clone.fetch_add(1, Ordering::Relaxed) + 1;
            let path = extract_url_path(&page_url);
            if let Some(ref pb) = pb_clone {
                pb.set_message(format!(
                    "Level {} | {} pages scanned | {}",
                    level, count, path
                ));
            }
            if let Some(ref callback) = callback_clone {
                callback(format!("[level {}] {}", level, page_url));
            }
        });

    let crawler = Crawler::new(source)
        .with_max_depth(max_depth)
        .with_workers(threads)
        .with_failure_policy(failure_policy)
        .with_progress_callback(internal_progress_callback);

    let result = crawler.crawl(&url).await;

    if let Some(ref pb) = progress_bar {
        let total = processed_count.load(Ordering::Relaxed);
        match result {
            Ok(ref outcome) => pb.finish_with_message(format!(
                "Crawl complete! {} pages scanned, {} paths found",
                total,
                outcome.registry.len()
            )),
            Err(_) => pb.abandon_with_message(format!("Crawl failed after {} pages", total)),
        }
    }

    result.map_err(SitemapError::from)
}
