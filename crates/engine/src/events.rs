use std::fmt;

use infohub_common::EntityId;
use serde::Serialize;

/// One-line user-facing message produced during a tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum HubEvent {
    SpawnMarkersToggled {
        enabled: bool,
    },
    PlayerNearby {
        id: EntityId,
        /// Display name, or the identity string when the host has none.
        name: String,
        radius_blocks: u32,
    },
}

impl fmt::Display for HubEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpawnMarkersToggled { enabled } => write!(
                f,
                "[InfoHub] Spawn markers: {}",
                if *enabled { "ON" } else { "OFF" }
            ),
            Self::PlayerNearby {
                name,
                radius_blocks,
                ..
            } => write!(f, "[InfoHub] Player nearby (<= {radius_blocks}b): {name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_message() {
        let on = HubEvent::SpawnMarkersToggled { enabled: true };
        let off = HubEvent::SpawnMarkersToggled { enabled: false };
        assert_eq!(on.to_string(), "[InfoHub] Spawn markers: ON");
        assert_eq!(off.to_string(), "[InfoHub] Spawn markers: OFF");
    }

    #[test]
    fn nearby_message() {
        let e = HubEvent::PlayerNearby {
            id: EntityId::new(),
            name: "Alex".into(),
            radius_blocks: 64,
        };
        assert_eq!(e.to_string(), "[InfoHub] Player nearby (<= 64b): Alex");
    }
}
