// Tests for the crawl summary

use sitemapper_core::crawl::{CrawlOptions, execute_crawl_with};
use sitemapper_core::generate_crawl_summary;
use sitemapper_scanner::{
    CrawlOutcome, FailurePolicy, FetchedPage, LinkSource, Path, ScanError, ScanFailure,
    SiteReference,
};

/// Serves the root and `/a`; everything else is unreachable.
struct TwoPageSite;

impl LinkSource for TwoPageSite {
    async fn fetch_links(&self, url: &str) -> Result<FetchedPage, ScanError> {
        match url {
            "https://example.com/" => Ok(FetchedPage::new(
                url,
                vec!["/a".to_string(), "/down".to_string()],
            )),
            "https://example.com/a" => Ok(FetchedPage::new(url, Vec::new())),
            _ => Err(ScanError::fetch(url, "connection reset")),
        }
    }
}

fn outcome() -> CrawlOutcome {
    let site = SiteReference::parse("https://example.com/").unwrap();
    let mut outcome = CrawlOutcome::new(site, Path::from("/"));
    for path in ["/a", "/b", "/c"] {
        outcome.registry.discover(&Path::from(path));
    }
    outcome.registry.mark_scanned(&Path::from("/a"));
    outcome.stats.levels_expanded = 2;
    outcome.stats.pages_scanned = 2;
    outcome.stats.cross_domain_skipped = 4;
    outcome
}

#[test]
fn test_summary_counts() {
    let report = generate_crawl_summary(&outcome());

    assert!(report.contains("example.com"));
    assert!(report.contains("Paths found: 3"));
    assert!(report.contains("Pages scanned: 2\n"));
    assert!(report.contains("Levels expanded: 2"));
    assert!(report.contains("Cross-domain links skipped: 4"));
    assert!(!report.contains("Malformed links"));
    assert!(!report.contains("Unreachable pages"));
}

#[test]
fn test_summary_lists_failures() {
    let mut outcome = outcome();
    outcome.stats.malformed_links = 2;
    outcome.failures.push(ScanFailure {
        path: Path::from("/b"),
        url: "https://example.com/b".to_string(),
        error: "connection reset".to_string(),
    });

    let report = generate_crawl_summary(&outcome);

    assert!(report.contains("Malformed links"));
    assert!(report.contains("Unreachable pages"));
    assert!(report.contains("https://example.com/b"));
    assert!(report.contains("connection reset"));
}

#[tokio::test]
async fn test_summary_counts_root_and_failed_fetches() {
    let options = CrawlOptions {
        url: "https://example.com/".to_string(),
        max_depth: 1,
        show_progress_bars: false,
        failure_policy: FailurePolicy::Skip,
        ..CrawlOptions::default()
    };
    let outcome = execute_crawl_with(TwoPageSite, options, None).await.unwrap();

    let report = generate_crawl_summary(&outcome);

    // Root, /a and /down were all attempted; /down failed
    assert!(report.contains("Pages scanned: 3 ("));
    assert!(report.contains("failed)"));
    assert!(report.contains("Unreachable pages"));
    assert!(report.contains("https://example.com/down"));
}
