//! Deferred actions — explicit scheduled callbacks replacing the
//! fire-and-forget timers of a browser host.
//!
//! Entries are due against the engine's accumulated wall clock and are
//! never cancelled by a level clear or restart; consumers guard against
//! acting on state that no longer exists.

/// An action scheduled to run at a wall-clock instant.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    /// Hide a killed enemy's death animation. Ignored if the enemy was
    /// cleared in the meantime.
    HideDeathAnimation { enemy_id: u32 },
    /// Stop the ticker after a win, once the final visual update had a
    /// frame to render. Ignored if a new level started in the window.
    StopTicker,
}

#[derive(Debug, Clone)]
struct Deferred {
    due_at_ms: f64,
    action: DeferredAction,
}

/// Pending deferred actions, processed on every tick regardless of phase.
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    entries: Vec<Deferred>,
}

impl DeferredQueue {
    pub fn schedule(&mut self, due_at_ms: f64, action: DeferredAction) {
        self.entries.push(Deferred { due_at_ms, action });
    }

    /// Remove and return every action due at `now_ms`, in schedule order.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<DeferredAction> {
        let mut due = Vec::new();
        self.entries.retain(|entry| {
            if entry.due_at_ms <= now_ms {
                due.push(entry.action.clone());
                false
            } else {
                true
            }
        });
        due
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
