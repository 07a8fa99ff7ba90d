//! Shared types for the InfoHub engine.
//!
//! # Invariants
//! - Only identity tokens and quantized positions from this crate may be held
//!   across tick boundaries.

pub mod coords;
pub mod types;

pub use coords::{BlockPos, ChunkPos, CHUNK_SIZE};
pub use types::{EntityId, LightChannel, WorldId};

/// Host simulation rate.
pub const TICKS_PER_SECOND: u32 = 20;

/// Length of one full day/night cycle, in ticks.
pub const DAY_LENGTH_TICKS: i64 = 24_000;

/// Time-of-day (mod day length) at which night begins.
pub const NIGHT_START_TICKS: i64 = 13_000;
