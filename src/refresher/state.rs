use crate::infrastructure::TaskManager;
use crate::types::{PresenceSnapshot, RefreshPhase};

/// Consolidated mutable state for PresenceRefresher
/// Using a single struct keeps every write behind one lock
pub struct RefreshState {
    /// Last snapshot handed to the sinks
    pub snapshot: PresenceSnapshot,

    /// Lifecycle phase
    pub phase: RefreshPhase,

    /// Background schedule handles
    pub task_manager: TaskManager,
}

impl RefreshState {
    pub fn new(total: u64) -> Self {
        Self {
            snapshot: PresenceSnapshot::fallback(total),
            phase: RefreshPhase::Uninitialized,
            task_manager: TaskManager::new(),
        }
    }
}
