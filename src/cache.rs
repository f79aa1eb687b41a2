//! View cache invalidation.
//!
//! Replaces the implicit "revalidate this path" mechanism with an explicit
//! abstraction: each view path carries a generation counter, mutations bump
//! it, and handlers derive cache validators (ETags) from it so stale cached
//! renderings are discarded on the next access.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Cache-invalidation signal for rendered views.
pub trait ViewCache: Send + Sync {
    /// Current generation for a view path. Starts at zero.
    fn generation(&self, path: &str) -> u64;

    /// Discard any cached rendering of the view path.
    fn invalidate(&self, path: &str);
}

/// In-process view cache keyed by path.
#[derive(Debug, Default)]
pub struct InMemoryViewCache {
    generations: RwLock<HashMap<String, u64>>,
}

impl InMemoryViewCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewCache for InMemoryViewCache {
    fn generation(&self, path: &str) -> u64 {
        self.generations.read().get(path).copied().unwrap_or(0)
    }

    fn invalidate(&self, path: &str) {
        let mut generations = self.generations.write();
        let entry = generations.entry(path.to_string()).or_insert(0);
        *entry += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_starts_at_zero() {
        let cache = InMemoryViewCache::new();
        assert_eq!(cache.generation("/dashboard/invoices"), 0);
    }

    #[test]
    fn test_invalidate_bumps_generation() {
        let cache = InMemoryViewCache::new();
        cache.invalidate("/dashboard/invoices");
        cache.invalidate("/dashboard/invoices");
        assert_eq!(cache.generation("/dashboard/invoices"), 2);
        assert_eq!(cache.generation("/other"), 0);
    }
}
