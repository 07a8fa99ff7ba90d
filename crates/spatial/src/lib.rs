//! Spatial Sampling: radius-bucketed counting of players and mobs around the observer.
//!
//! # Invariants
//! - Counting is nested-inclusive: an entity inside radius `r` is counted in
//!   every bucket of the same family whose radius is `>= r`.
//! - Distance families and chunk-grid families are evaluated independently;
//!   a chunk-grid bucket is never approximated by a distance test.
//! - Samplers hold only precomputed thresholds; every result is a pure
//!   function of the world snapshot and observer passed in.

mod counts;
mod grid;
mod radius;
mod sampler;

pub use counts::{CounterSet, MobTally};
pub use grid::ChunkGridTable;
pub use radius::{chunks_to_blocks, MobRadius, RadiusMetric, RadiusTable};
pub use sampler::{MobSampler, PlayerSample, PlayerSampler};

pub fn crate_info() -> &'static str {
    "infohub-spatial v0.1.0"
}
