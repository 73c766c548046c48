// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-shot bookkeeping.

use alloc::collections::BTreeSet;
use alloc::string::{String, ToString};

/// Remembers which single-shot spotlights have been dismissed.
///
/// Hosts back this with whatever persistent settings store they have; this crate
/// only reads and writes through the trait.
pub trait SeenRegistry {
    /// Whether the spotlight with `id` was dismissed before.
    fn has_seen(&self, id: &str) -> bool;
    /// Record that the spotlight with `id` was dismissed.
    fn mark_seen(&mut self, id: &str);
}

/// In-memory [`SeenRegistry`], for tests and hosts without storage.
#[derive(Clone, Debug, Default)]
pub struct MemorySeenRegistry {
    seen: BTreeSet<String>,
}

impl MemorySeenRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget `id`, so its spotlight shows again.
    pub fn forget(&mut self, id: &str) -> bool {
        self.seen.remove(id)
    }

    /// Number of recorded ids.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

impl SeenRegistry for MemorySeenRegistry {
    fn has_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    fn mark_seen(&mut self, id: &str) {
        // Skip the allocation for ids already recorded.
        if !self.seen.contains(id) {
            self.seen.insert(id.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_forget() {
        let mut reg = MemorySeenRegistry::new();
        assert!(reg.is_empty());
        reg.mark_seen("intro.search");
        reg.mark_seen("intro.search");
        assert!(reg.has_seen("intro.search"));
        assert!(!reg.has_seen("intro.share"));
        assert_eq!(reg.len(), 1);
        assert!(reg.forget("intro.search"));
        assert!(!reg.has_seen("intro.search"));
    }
}
