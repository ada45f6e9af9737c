// In-memory snapshot cache
// Keeps outbound API calls down between refreshes

pub mod cache;
pub mod clock;

pub use cache::{Snapshot, SnapshotCache};
pub use clock::{Clock, ManualClock, SystemClock};
