use std::collections::BTreeSet;

use infohub_common::EntityId;

/// Remembers who was inside the notification radius at the last update and
/// reports identities that newly entered.
///
/// The first update after a (re)bind only primes the set; it reports nothing,
/// so joining a crowded world does not produce a burst of notices. Leaving the
/// radius is never reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationTracker {
    known: BTreeSet<EntityId>,
    initialized: bool,
}

impl NotificationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the known set with `current`; return identities not previously known.
    pub fn update(&mut self, current: BTreeSet<EntityId>) -> Vec<EntityId> {
        let entered = if self.initialized {
            current.difference(&self.known).copied().collect()
        } else {
            self.initialized = true;
            Vec::new()
        };
        self.known = current;
        entered
    }

    /// Forget everything and go back to priming mode.
    pub fn reset(&mut self) {
        self.known.clear();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn known(&self) -> &BTreeSet<EntityId> {
        &self.known
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<EntityId> {
        (0..n).map(|_| EntityId::new()).collect()
    }

    #[test]
    fn first_update_is_silent() {
        let mut tracker = NotificationTracker::new();
        let people = ids(3);
        let entered = tracker.update(people.iter().copied().collect());
        assert!(entered.is_empty());
        assert!(tracker.is_initialized());
        assert_eq!(tracker.known().len(), 3);
    }

    #[test]
    fn new_arrival_reported_once() {
        let mut tracker = NotificationTracker::new();
        let people = ids(3);
        let mut set: BTreeSet<EntityId> = people.iter().copied().collect();
        tracker.update(set.clone());

        let newcomer = EntityId::new();
        set.insert(newcomer);
        assert_eq!(tracker.update(set.clone()), vec![newcomer]);
        assert!(tracker.update(set).is_empty());
    }

    #[test]
    fn departures_are_not_reported() {
        let mut tracker = NotificationTracker::new();
        let people = ids(3);
        tracker.update(people.iter().copied().collect());

        let remaining: BTreeSet<EntityId> = people[..1].iter().copied().collect();
        assert!(tracker.update(remaining).is_empty());
        assert_eq!(tracker.known().len(), 1);
    }

    #[test]
    fn returning_player_is_reported_again() {
        let mut tracker = NotificationTracker::new();
        let p = EntityId::new();
        tracker.update(BTreeSet::new());
        assert_eq!(tracker.update([p].into()), vec![p]);
        tracker.update(BTreeSet::new());
        assert_eq!(tracker.update([p].into()), vec![p]);
    }

    #[test]
    fn reset_returns_to_priming() {
        let mut tracker = NotificationTracker::new();
        tracker.update(ids(2).into_iter().collect());
        tracker.reset();
        assert!(!tracker.is_initialized());
        assert!(tracker.known().is_empty());
        assert!(tracker.update(ids(4).into_iter().collect()).is_empty());
    }
}
