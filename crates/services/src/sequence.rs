//! Latest-wins guard for overlapping requests.
//!
//! Responses carry no ordering guarantee: a slow, stale generate call can
//! resolve after a newer one. Each dispatch takes a tag from the sequencer
//! and only applies its response if no newer dispatch happened in between.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tag identifying one dispatched request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTag(u64);

/// Monotonic sequence shared by all dispatches of one logical operation.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new dispatch, invalidating all earlier tags.
    #[must_use]
    pub fn begin(&self) -> RequestTag {
        RequestTag(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `tag` is still the most recent dispatch. A response whose
    /// tag is no longer current must be discarded.
    #[must_use]
    pub fn is_current(&self, tag: RequestTag) -> bool {
        self.latest.load(Ordering::Acquire) == tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_single_dispatch_stays_current() {
        let sequencer = RequestSequencer::new();
        let tag = sequencer.begin();
        assert!(sequencer.is_current(tag));
    }

    #[test]
    fn a_newer_dispatch_invalidates_the_older_one() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn clones_share_the_sequence() {
        let sequencer = RequestSequencer::new();
        let clone = sequencer.clone();
        let tag = sequencer.begin();
        assert!(clone.is_current(tag));
        let _ = clone.begin();
        assert!(!sequencer.is_current(tag));
    }
}
