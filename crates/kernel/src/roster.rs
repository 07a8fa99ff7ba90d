use infohub_common::EntityId;
use std::collections::HashMap;

/// The host's connection roster (tab list): latency per connected player.
pub trait ConnectionRoster {
    /// Reported latency in milliseconds, or `None` if the player has no entry.
    fn latency_ms(&self, id: EntityId) -> Option<i32>;
}

/// In-memory roster keyed by player identity.
#[derive(Debug, Clone, Default)]
pub struct PlayerList {
    latencies: HashMap<EntityId, i32>,
}

impl PlayerList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_latency(&mut self, id: EntityId, latency_ms: i32) {
        self.latencies.insert(id, latency_ms);
    }

    pub fn remove(&mut self, id: EntityId) -> Option<i32> {
        self.latencies.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }
}

impl ConnectionRoster for PlayerList {
    fn latency_ms(&self, id: EntityId) -> Option<i32> {
        self.latencies.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_and_unknown() {
        let mut list = PlayerList::new();
        let id = EntityId::new();
        list.set_latency(id, 42);
        assert_eq!(list.latency_ms(id), Some(42));
        assert_eq!(list.latency_ms(EntityId::new()), None);
    }

    #[test]
    fn remove_entry() {
        let mut list = PlayerList::new();
        let id = EntityId::new();
        list.set_latency(id, 7);
        assert_eq!(list.remove(id), Some(7));
        assert!(list.is_empty());
    }
}
