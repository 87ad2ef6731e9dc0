pub mod crawl;
pub mod error;
pub mod report;
pub mod sitemap;

pub use crawl::{
    CrawlOptions, CrawlProgressCallback, DEFAULT_ROOT_URL, execute_crawl, execute_crawl_with,
    extract_url_path,
};
pub use error::{Result, SitemapError};
pub use report::generate_crawl_summary;
pub use sitemap::{SITEMAP_XMLNS, SitemapFormat, SitemapOptions, render_sitemap, save_sitemap};
