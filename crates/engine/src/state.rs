use infohub_common::BlockPos;
use infohub_spatial::{CounterSet, MobTally};
use serde::Serialize;

use crate::metrics::DerivedMetrics;

/// Everything the presentation layer reads.
///
/// Cloned out of the scheduler when it has to cross to another thread; a
/// clone may mix values from different ticks, which readers must tolerate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HubState {
    pub metrics: DerivedMetrics,
    pub players: CounterSet<u32>,
    pub mobs: CounterSet<MobTally>,
    pub spawn_markers_enabled: bool,
    /// Spawn blocks from the latest scan; empty while markers are disabled.
    pub spawn_markers: Vec<BlockPos>,
}

impl HubState {
    pub(crate) fn new(player_buckets: usize, mob_buckets: usize) -> Self {
        Self {
            players: CounterSet::zeroed(player_buckets),
            mobs: CounterSet::zeroed(mob_buckets),
            ..Self::default()
        }
    }

    /// Player count for a bucket; 0 for an unknown index.
    pub fn players_in_radius(&self, index: usize) -> u32 {
        self.players.get(index)
    }

    /// Mob split for a bucket; zeroes for an unknown index.
    pub fn mobs_in_radius(&self, index: usize) -> MobTally {
        self.mobs.get(index)
    }

    /// Zero metrics and counters. Marker state is left alone.
    pub(crate) fn reset_derived(&mut self) {
        self.metrics = DerivedMetrics::default();
        self.players.clear();
        self.mobs.clear();
    }
}
