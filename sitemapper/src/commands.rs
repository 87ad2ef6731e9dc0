use crate::handlers::parse_root_url;
use clap::arg;
use sitemapper_core::DEFAULT_ROOT_URL;

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitemapper")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitemapper")
        .about("Crawl a single website breadth-first and print its sitemap")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-u --"url" <URL>)
                .required(false)
                .help("Root URL to crawl")
                .value_parser(parse_root_url)
                .default_value(DEFAULT_ROOT_URL),
        )
        .arg(
            arg!(-d --"max-depth" <DEPTH>)
                .required(false)
                .help("Maximum link depth to follow from the root page")
                .value_parser(clap::value_parser!(usize))
                .default_value("3"),
        )
        .arg(
            arg!(-t --"threads" <NUM_WORKERS>)
                .required(false)
                .help("Number of pages fetched concurrently within a level")
                .value_parser(clap::value_parser!(usize))
                .default_value("4"),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(--"keep-going")
                .required(false)
                .help("Skip pages that fail to load instead of aborting the crawl")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"include-root")
                .required(false)
                .help("Always list the root URL, even if no page links to it")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(--"sort")
                .required(false)
                .help("Sort URLs lexicographically in the output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Output format: xml, text, json")
                .value_parser(["xml", "text", "json"])
                .default_value("xml"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Write the sitemap to a file (default: stdout)"),
        )
        .arg(
            arg!(-q --"quiet" "Only print the sitemap and errors")
                .required(false)
                .conflicts_with("verbose"),
        )
        .arg(
            arg!(-v --"verbose" "Log every page and link decision")
                .required(false)
                .conflicts_with("quiet"),
        )
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
