use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use colored::Colorize;
use sitemapper_core::{
    CrawlOptions, SitemapFormat, SitemapOptions, execute_crawl, generate_crawl_summary,
    render_sitemap, save_sitemap,
};
use sitemapper_scanner::FailurePolicy;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use url::Url;

/// Everything the command line decides about one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub crawl: CrawlOptions,
    pub sitemap: SitemapOptions,
    pub include_root: bool,
    pub output: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

/// Parse the root URL, adding http:// if no scheme was given
pub fn parse_root_url(raw: &str) -> Result<Url, String> {
    let raw = raw.trim();

    // "localhost:3000" parses with "localhost" as the scheme, so require a host
    if let Ok(url) = Url::parse(raw)
        && url.host_str().is_some()
    {
        return Ok(url);
    }

    let with_scheme = format!("http://{}", raw);
    match Url::parse(&with_scheme) {
        Ok(url) if url.host_str().is_some() => Ok(url),
        _ => Err(format!("'{}' is not a valid root URL", raw)),
    }
}

/// Expand `~` in an output path
pub fn expand_output_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).as_ref())
}

pub fn config_from_matches(matches: &ArgMatches) -> Result<RunConfig> {
    let url = matches
        .get_one::<Url>("url")
        .ok_or_else(|| anyhow!("--url is required"))?;
    let max_depth = *matches.get_one::<usize>("max-depth").unwrap_or(&3);
    let threads = *matches.get_one::<usize>("threads").unwrap_or(&4);
    let timeout_secs = *matches.get_one::<u64>("timeout").unwrap_or(&10);
    let quiet = matches.get_flag("quiet");
    let verbose = matches.get_flag("verbose");

    let failure_policy = if matches.get_flag("keep-going") {
        FailurePolicy::Skip
    } else {
        FailurePolicy::Abort
    };

    let format_name = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("xml");
    let format = SitemapFormat::from_str(format_name)
        .ok_or_else(|| anyhow!("Unknown output format '{}'", format_name))?;

    Ok(RunConfig {
        crawl: CrawlOptions {
            url: url.as_str().to_string(),
            max_depth,
            threads,
            timeout_secs,
            failure_policy,
            show_progress_bars: !quiet,
        },
        sitemap: SitemapOptions {
            format,
            sort: matches.get_flag("sort"),
        },
        include_root: matches.get_flag("include-root"),
        output: matches
            .get_one::<String>("output")
            .map(String::as_str)
            .map(expand_output_path),
        quiet,
        verbose,
    })
}

/// Log to stderr so stdout only carries the sitemap
pub fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::WARN
    } else {
        Level::INFO
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

/// Write the rendered sitemap to a file or stdout
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => save_sitemap(content, path)
            .with_context(|| format!("Failed to write sitemap to {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

pub async fn handle_crawl(config: RunConfig) -> Result<()> {
    if !config.quiet {
        eprintln!("\n🕷️  Crawling {}", config.crawl.url.bright_white().bold());
        eprintln!("Max depth: {}", config.crawl.max_depth);
        eprintln!("Workers: {}", config.crawl.threads);
        let policy = match config.crawl.failure_policy {
            FailurePolicy::Abort => "abort on first unreachable page",
            FailurePolicy::Skip => "skip unreachable pages",
        };
        eprintln!("On fetch errors: {}\n", policy);
    }

    let outcome = execute_crawl(config.crawl.clone(), None)
        .await
        .context("Crawl failed")?;

    if !config.quiet {
        eprint!("{}", generate_crawl_summary(&outcome));
    }

    let paths = outcome.sitemap_paths(config.include_root);
    let document = render_sitemap(&paths, &outcome.site, &config.sitemap)?;
    write_output(&document, config.output.as_deref())?;

    if let Some(ref path) = config.output
        && !config.quiet
    {
        eprintln!(
            "{} Sitemap with {} URLs written to {}",
            "✓".green().bold(),
            paths.len(),
            path.display()
        );
    }

    Ok(())
}
