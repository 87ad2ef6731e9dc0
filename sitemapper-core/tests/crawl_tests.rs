// Tests for crawl orchestration

use sitemapper_core::crawl::{CrawlOptions, execute_crawl_with, extract_url_path};
use sitemapper_core::{DEFAULT_ROOT_URL, SitemapError};
use sitemapper_scanner::{FailurePolicy, FetchedPage, LinkSource, Path, ScanError};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

struct FakeSite {
    pages: HashMap<String, Vec<String>>,
}

impl FakeSite {
    fn new(pages: &[(&str, &[&str])]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, links)| {
                    (
                        url.to_string(),
                        links.iter().map(|l| l.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl LinkSource for FakeSite {
    async fn fetch_links(&self, url: &str) -> Result<FetchedPage, ScanError> {
        self.pages
            .get(url)
            .cloned()
            .map(|links| FetchedPage::new(url, links))
            .ok_or_else(|| ScanError::fetch(url, "404 page not wired up"))
    }
}

fn quiet_options(url: &str, max_depth: usize) -> CrawlOptions {
    CrawlOptions {
        url: url.to_string(),
        max_depth,
        show_progress_bars: false,
        ..CrawlOptions::default()
    }
}

// ============================================================================
// URL Path Extraction Tests
// ============================================================================

#[test]
fn test_extract_url_path_root() {
    assert_eq!(extract_url_path("http://example.com/"), "/");
    assert_eq!(extract_url_path("http://example.com"), "/");
}

#[test]
fn test_extract_url_path_simple() {
    assert_eq!(extract_url_path("http://example.com/api"), "/api");
}

#[test]
fn test_extract_url_path_strips_trailing_slash() {
    assert_eq!(extract_url_path("http://example.com/api/"), "/api");
}

#[test]
fn test_extract_url_path_with_query_and_fragment() {
    assert_eq!(extract_url_path("http://example.com/api?key=value#top"), "/api");
}

#[test]
fn test_extract_url_path_encoded_characters() {
    assert_eq!(extract_url_path("http://example.com/api%20test"), "/api%20test");
}

#[test]
fn test_extract_url_path_multiple_slashes() {
    assert_eq!(extract_url_path("http://example.com//api//test"), "//api//test");
}

#[test]
fn test_extract_url_path_invalid_url() {
    let url = "not a valid url";
    assert_eq!(extract_url_path(url), url);
}

// ============================================================================
// Options Tests
// ============================================================================

#[test]
fn test_default_options() {
    let options = CrawlOptions::default();
    assert_eq!(options.url, DEFAULT_ROOT_URL);
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.failure_policy, FailurePolicy::Abort);
}

// ============================================================================
// Crawl Execution Tests
// ============================================================================

#[tokio::test]
async fn test_execute_crawl_collects_same_domain_paths() {
    let site = FakeSite::new(&[
        (
            "https://example.com/",
            &["https://example.com/about", "https://external.com/x"],
        ),
        ("https://example.com/about", &["/about/team", "/"]),
        ("https://example.com/about/team", &[]),
    ]);

    let outcome = execute_crawl_with(site, quiet_options("https://example.com/", 3), None)
        .await
        .unwrap();

    let mut paths: Vec<String> = outcome.paths().iter().map(Path::to_string).collect();
    paths.sort();
    assert_eq!(paths, vec!["", "/about", "/about/team"]);
    // The root is fetched a second time once /about links back to it
    assert_eq!(outcome.stats.cross_domain_skipped, 2);
    assert!(outcome.is_complete());
}

#[tokio::test]
async fn test_execute_crawl_reports_progress() {
    let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let messages_clone = messages.clone();

    let site = FakeSite::new(&[
        ("https://example.com/", &["/a"]),
        ("https://example.com/a", &[]),
    ]);

    execute_crawl_with(
        site,
        quiet_options("https://example.com/", 2),
        Some(Arc::new(move |msg: String| {
            messages_clone.lock().unwrap().push(msg);
        })),
    )
    .await
    .unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages.iter().any(|m| m.contains("[level 1] https://example.com/a")));
}

#[tokio::test]
async fn test_execute_crawl_abort_surfaces_scan_error() {
    let site = FakeSite::new(&[("https://example.com/", &["/gone"])]);

    let result = execute_crawl_with(site, quiet_options("https://example.com/", 1), None).await;

    assert!(matches!(
        result,
        Err(SitemapError::Scan(ScanError::FetchError { .. }))
    ));
}

#[tokio::test]
async fn test_execute_crawl_skip_policy_keeps_going() {
    let site = FakeSite::new(&[
        ("https://example.com/", &["/gone", "/here"]),
        ("https://example.com/here", &[]),
    ]);

    let options = CrawlOptions {
        failure_policy: FailurePolicy::Skip,
        ..quiet_options("https://example.com/", 1)
    };
    let outcome = execute_crawl_with(site, options, None).await.unwrap();

    assert_eq!(outcome.registry.len(), 2);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].url, "https://example.com/gone");
}

#[tokio::test]
async fn test_execute_crawl_rejects_malformed_root() {
    let result = execute_crawl_with(FakeSite::new(&[]), quiet_options("::", 1), None).await;

    assert!(matches!(
        result,
        Err(SitemapError::Scan(ScanError::InvalidUrl(_)))
    ));
}
