pub mod crawler;
pub mod error;
pub mod filter;
pub mod path;
pub mod registry;
pub mod result;
pub mod source;

pub use crawler::{Crawler, ProgressCallback};
pub use error::ScanError;
pub use filter::{FilterSummary, Layer, filter_links};
pub use path::{Path, SiteReference};
pub use registry::VisitedRegistry;
pub use result::{CrawlOutcome, CrawlStats, FailurePolicy, ScanFailure};
pub use source::{FetchedPage, HttpLinkSource, LinkSource};
