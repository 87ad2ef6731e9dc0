// Human-readable crawl summary

use colored::Colorize;
use sitemapper_scanner::CrawlOutcome;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Generate an end-of-crawl summary from an outcome
pub fn generate_crawl_summary(outcome: &CrawlOutcome) -> String {
    let stats = &outcome.stats;
    let mut report = String::new();

    report.push_str(RULE);
    report.push_str("\n\n");
    report.push_str(&format!("# Summary: {}\n", outcome.site.origin().bold()));
    report.push_str(&format!("  Paths found: {}\n", outcome.registry.len()));
    // Fetch attempts, root included, so it agrees with the spinner
    if outcome.failures.is_empty() {
        report.push_str(&format!("  Pages scanned: {}\n", stats.pages_scanned));
    } else {
        report.push_str(&format!(
            "  Pages scanned: {} ({} failed)\n",
            stats.pages_scanned,
            outcome.failures.len().to_string().red()
        ));
    }
    report.push_str(&format!("  Levels expanded: {}\n", stats.levels_expanded));
    report.push_str(&format!(
        "  Cross-domain links skipped: {}\n",
        stats.cross_domain_skipped
    ));

    if stats.malformed_links > 0 {
        report.push_str(&format!(
            "  Malformed links: {}\n",
            stats.malformed_links.to_string().yellow()
        ));
    }

    if !outcome.failures.is_empty() {
        report.push_str(&format!(
            "\n## {} ({})\n",
            "Unreachable pages".red().bold(),
            outcome.failures.len()
        ));

        let mut failures: Vec<_> = outcome.failures.iter().collect();
        failures.sort_by(|a, b| a.path.cmp(&b.path));
        for failure in failures {
            report.push_str(&format!("  {} {}\n", "✗".red(), failure.url));
            report.push_str(&format!("    {}\n", failure.error.bright_black()));
        }
    }

    report.push('\n');
    report.push_str(RULE);
    report.push('\n');

    report
}
