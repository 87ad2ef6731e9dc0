//! Domain scoping of discovered links.

use crate::path::{Path, SiteReference};
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

/// A set of normalized paths discovered during one round.
pub type Layer = HashSet<Path>;

/// Counts for one pass over a page's links.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Links that resolved to this site, including ones already in the layer.
    pub accepted: usize,
    pub cross_domain: usize,
    pub malformed: usize,
}

/// Resolve `links` against `base`, keep the ones on `site`, and add their
/// normalized paths to `accumulator`.
///
/// Existing entries in `accumulator` are never touched, so the same set can
/// collect the links of several pages.
pub fn filter_links<S: AsRef<str>>(
    links: &[S],
    site: &SiteReference,
    base: &Url,
    accumulator: &mut Layer,
) -> FilterSummary {
    let mut summary = FilterSummary::default();

    for link in links {
        let href = link.as_ref().trim();

        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                warn!("Skipping malformed link {:?}: {}", href, e);
                summary.malformed += 1;
                continue;
            }
        };

        if !site.is_same_host(&resolved) {
            info!("Ignoring {}", href);
            summary.cross_domain += 1;
            continue;
        }

        let path = Path::from_url(&resolved);
        if accumulator.insert(path.clone()) {
            debug!("Discovered {:?} via {}", path.as_str(), href);
        }
        summary.accepted += 1;
    }

    summary
}
