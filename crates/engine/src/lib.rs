//! Engine: the per-tick scheduler that owns every piece of derived state.
//!
//! # Invariants
//! - Exactly one `TickScheduler::tick` per host tick; nothing runs in between.
//! - World-scoped caches (counters, proximity set, spawn markers) are cleared
//!   together, before any computation against a new world identity.
//! - Only `EntityId`s and `BlockPos`es survive from one tick to the next.
//! - Missing world, observer or roster data degrades to defaults; the tick
//!   path has no error return.

pub mod config;
pub mod events;
pub mod metrics;
pub mod notify;
pub mod scheduler;
pub mod state;

pub use config::{ConfigError, EngineConfig, MAX_RADIUS_CHUNKS};
pub use events::HubEvent;
pub use metrics::{DayPhase, DerivedMetrics, LightSample, MetricsComputer};
pub use notify::NotificationTracker;
pub use scheduler::{Binding, TickInput, TickScheduler};
pub use state::HubState;

pub fn crate_info() -> &'static str {
    "infohub-engine v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("engine"));
    }
}
