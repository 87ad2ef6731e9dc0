use colored::Colorize;
use sitemapper::commands::command_argument_builder;
use sitemapper::handlers::{config_from_matches, handle_crawl, init_logging};

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();

    let config = match config_from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(2);
        }
    };

    init_logging(config.quiet, config.verbose);

    if let Err(e) = handle_crawl(config).await {
        eprintln!("{} {:#}", "✗".red().bold(), e);
        std::process::exit(1);
    }
}
