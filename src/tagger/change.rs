//! ChangeDetector: content-addressable rescan skipping
//!
//! Hashes the text seen at each change notification so the reconciler can
//! skip the erase-and-rebuild pass when a notification carries content
//! identical to the last scan. The resulting annotation set is the same
//! either way; skipping only avoids add/remove churn against the host.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Content-hash change detector with check/skip counters.
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last_hash: Option<u64>,
    check_count: u64,
    skip_count: u64,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if content differs from the last check. The first check always
    /// counts as changed.
    pub fn has_changed(&mut self, text: &str) -> bool {
        self.check_count += 1;

        let current_hash = Self::compute_hash(text);
        let changed = match self.last_hash {
            None => true,
            Some(prev) => prev != current_hash,
        };

        if !changed {
            self.skip_count += 1;
        }

        self.last_hash = Some(current_hash);
        changed
    }

    /// Fraction of checks that were skipped, as a percentage.
    pub fn skip_rate(&self) -> f64 {
        if self.check_count == 0 {
            return 0.0;
        }
        (self.skip_count as f64 / self.check_count as f64) * 100.0
    }

    pub fn check_count(&self) -> u64 {
        self.check_count
    }

    pub fn skip_count(&self) -> u64 {
        self.skip_count
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn compute_hash(text: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        hasher.finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_check_is_changed() {
        let mut detector = ChangeDetector::new();
        assert!(detector.has_changed("hello"));
    }

    #[test]
    fn test_identical_content_skips() {
        let mut detector = ChangeDetector::new();
        assert!(detector.has_changed("hello #world"));
        assert!(!detector.has_changed("hello #world"));
        assert!(detector.has_changed("hello #worlds"));
        assert_eq!(detector.check_count(), 3);
        assert_eq!(detector.skip_count(), 1);
    }

    #[test]
    fn test_skip_rate() {
        let mut detector = ChangeDetector::new();
        assert_eq!(detector.skip_rate(), 0.0);
        detector.has_changed("a");
        detector.has_changed("a");
        assert_eq!(detector.skip_rate(), 50.0);
    }

    #[test]
    fn test_reset() {
        let mut detector = ChangeDetector::new();
        detector.has_changed("a");
        detector.reset();
        assert_eq!(detector.check_count(), 0);
        assert!(detector.has_changed("a"));
    }
}
