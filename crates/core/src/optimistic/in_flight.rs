//! Per-item single-flight tracking for mutations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lifecycle of one item mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationPhase {
    #[default]
    Idle,
    /// Optimistic state is displayed; the request has not answered yet
    Pending,
}

/// What happened to a requested mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationOutcome {
    /// Not started: invalid input, unknown item, or already in flight.
    Rejected,
    Confirmed,
    RolledBack,
}

impl MutationOutcome {
    pub fn is_confirmed(self) -> bool {
        self == MutationOutcome::Confirmed
    }
}

/// Map from item id to its mutation phase. Absent ids are idle.
#[derive(Debug, Clone, Default)]
pub struct InFlightTracker {
    phases: HashMap<String, MutationPhase>,
}

impl InFlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self, item_id: &str) -> MutationPhase {
        self.phases.get(item_id).copied().unwrap_or_default()
    }

    pub fn is_pending(&self, item_id: &str) -> bool {
        self.phase(item_id) == MutationPhase::Pending
    }

    /// Moves `item_id` to `Pending`. Returns false if it already was.
    pub fn try_begin(&mut self, item_id: &str) -> bool {
        if self.is_pending(item_id) {
            return false;
        }
        self.phases.insert(item_id.to_string(), MutationPhase::Pending);
        true
    }

    /// Returns `item_id` to `Idle` whatever the outcome was.
    pub fn finish(&mut self, item_id: &str, outcome: MutationOutcome) -> MutationOutcome {
        self.phases.remove(item_id);
        outcome
    }

    pub fn pending_count(&self) -> usize {
        self.phases
            .values()
            .filter(|phase| **phase == MutationPhase::Pending)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_flight_per_item() {
        let mut tracker = InFlightTracker::new();
        assert!(tracker.try_begin("a"));
        assert!(!tracker.try_begin("a"));
        assert!(tracker.try_begin("b"));
        assert_eq!(tracker.pending_count(), 2);

        assert_eq!(
            tracker.finish("a", MutationOutcome::RolledBack),
            MutationOutcome::RolledBack
        );
        assert_eq!(tracker.phase("a"), MutationPhase::Idle);
        assert!(tracker.try_begin("a"));
    }
}
