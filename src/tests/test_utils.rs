//! Shared test utilities for FlakeID tests

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{Clock, FlakeId};

/// Assert that all IDs in the collection are unique
pub fn assert_unique_ids(ids: &[FlakeId], expected_count: usize) {
    let set: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(
        set.len(),
        expected_count,
        "Expected {} unique IDs, but got {} (duplicates detected)",
        expected_count,
        set.len()
    );
}

/// Assert that IDs are strictly increasing in the given order
pub fn assert_ids_monotonic(ids: &[FlakeId]) {
    for (i, pair) in ids.windows(2).enumerate() {
        assert!(
            pair[1] > pair[0],
            "ID at position {} ({}) is not greater than previous ID ({})",
            i + 1,
            pair[1],
            pair[0]
        );
    }
}

/// Assert collection has expected unique count and is strictly increasing once sorted
pub fn assert_unique_and_monotonic(mut ids: Vec<FlakeId>, expected_count: usize) {
    assert_unique_ids(&ids, expected_count);
    ids.sort_unstable();
    assert_ids_monotonic(&ids);
}

/// Clock under test control, frozen at a Unix millisecond until moved
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn at(millis: i64) -> Arc<Self> {
        Arc::new(Self {
            millis: AtomicI64::new(millis),
        })
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        DateTime::from_timestamp_millis(millis).expect("manual clock out of range")
    }
}
