use crate::clock::Clock;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A list of items captured at one moment
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub captured_at: DateTime<Utc>,
}

/// Single-slot cache holding one snapshot with a fixed time-to-live.
///
/// The snapshot is only ever replaced wholesale, never merged. Two refreshes
/// racing each other both write and the last one wins.
pub struct SnapshotCache<T> {
    slot: RwLock<Option<Snapshot<T>>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<T: Clone> SnapshotCache<T> {
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Items of the current snapshot, if it is younger than the TTL
    pub async fn get(&self) -> Option<Vec<T>> {
        let slot = self.slot.read().await;
        let snapshot = slot.as_ref()?;

        let age = self.clock.now() - snapshot.captured_at;
        if age < self.ttl {
            debug!("Snapshot hit (age {}s)", age.num_seconds());
            Some(snapshot.items.clone())
        } else {
            debug!("Snapshot expired (age {}s)", age.num_seconds());
            None
        }
    }

    /// Replace the snapshot, stamping it with the current time
    pub async fn store(&self, items: Vec<T>) {
        let captured_at = self.clock.now();
        let mut slot = self.slot.write().await;
        *slot = Some(Snapshot { items, captured_at });
    }

    /// Age of the current snapshot, fresh or not
    pub async fn age(&self) -> Option<Duration> {
        let slot = self.slot.read().await;
        slot.as_ref().map(|s| self.clock.now() - s.captured_at)
    }

    pub async fn invalidate(&self) {
        let mut slot = self.slot.write().await;
        *slot = None;
    }
}
