use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::CardId;

/// Monotonic identity source owned by a store.
///
/// The first identity handed out is 1; zero means "unassigned".
#[derive(Debug, Default)]
pub struct IdAllocator {
    current: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identity.
    pub fn next(&self) -> CardId {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Highest identity handed out so far, or 0.
    pub fn current(&self) -> CardId {
        self.current.load(Ordering::SeqCst)
    }
}
