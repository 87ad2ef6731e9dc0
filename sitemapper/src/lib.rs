pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    RunConfig, config_from_matches, expand_output_path, handle_crawl, init_logging,
    parse_root_url, write_output,
};
