use crate::path::Path;
use std::collections::HashMap;

/// Every path seen during one crawl, and whether it has itself been scanned.
///
/// `false` means discovered but not yet fetched. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct VisitedRegistry {
    entries: HashMap<Path, bool>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as known. Returns true if it was not a key before.
    /// An existing entry keeps its scanned flag.
    pub fn discover(&mut self, path: &Path) -> bool {
        if self.entries.contains_key(path) {
            return false;
        }
        self.entries.insert(path.clone(), false);
        true
    }

    pub fn mark_scanned(&mut self, path: &Path) {
        self.entries.insert(path.clone(), true);
    }

    pub fn is_scanned(&self, path: &Path) -> bool {
        self.entries.get(path).copied().unwrap_or(false)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scanned_count(&self) -> usize {
        self.entries.values().filter(|scanned| **scanned).count()
    }

    /// All known paths, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_does_not_reset_scanned() {
        let mut registry = VisitedRegistry::new();
        let about = Path::from("/about");

        assert!(registry.discover(&about));
        assert!(!registry.is_scanned(&about));

        registry.mark_scanned(&about);
        assert!(!registry.discover(&about));
        assert!(registry.is_scanned(&about));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_path_is_not_scanned() {
        let registry = VisitedRegistry::new();
        assert!(!registry.is_scanned(&Path::from("/nowhere")));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_scanned_count() {
        let mut registry = VisitedRegistry::new();
        registry.discover(&Path::from("/a"));
        registry.discover(&Path::from("/b"));
        registry.mark_scanned(&Path::from("/a"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.scanned_count(), 1);
        assert!(registry.contains("/b"));
    }
}
