//! Connection limiting.
//!
//! A counting semaphore caps the number of connections served at once. The
//! permit travels with the connection task and is released when it ends.

use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

/// Caps the number of simultaneously served connections.
#[derive(Debug, Clone)]
pub struct ConnectionLimiter {
    permits: Arc<Semaphore>,
    capacity: usize,
}

impl ConnectionLimiter {
    /// Create a limiter admitting at most `capacity` connections.
    pub fn new(capacity: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Try to admit one more connection.
    ///
    /// Returns `None` when the cap is reached; never waits.
    pub fn try_acquire(&self) -> Option<OwnedSemaphorePermit> {
        Arc::clone(&self.permits).try_acquire_owned().ok()
    }

    /// Configured maximum.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently free.
    #[cfg(test)]
    fn available(&self) -> usize {
        self.permits.available_permits()
    }
}
