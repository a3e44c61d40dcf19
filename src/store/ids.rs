//! Entry id allocation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Hands out entry ids that never repeat within the process.
///
/// Ids follow the wall clock in milliseconds so they stay unique against
/// entries written by earlier runs, but each id is also strictly greater
/// than the previous one and than any id passed to [`IdAllocator::observe`].
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicI64,
}

impl IdAllocator {
    /// Creates an allocator that has seen no ids.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an existing id so later allocations stay above it.
    pub fn observe(&self, id: i64) {
        self.last.fetch_max(id, Ordering::SeqCst);
    }

    /// Returns the next unused id.
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}
