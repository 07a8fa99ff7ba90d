//! Spawn Scan: enumerate a bounded block volume around the observer and collect
//! positions where a hostile mob could plausibly spawn.
//!
//! # Invariants
//! - Enumeration order is fixed: `dx`, then `dz`, then `y`, all ascending.
//! - The scan stops the moment the marker cap is reached; cost is bounded by
//!   the cap and the integer loop ranges, never by a timer.
//! - Every scan returns a fresh marker list; results are never merged.
//! - The heuristic is an approximation of the host's spawn rules, not a copy.

mod predicate;
mod scanner;

pub use predicate::{DarkSolidGround, SpawnPredicate};
pub use scanner::{scan, ScanConfig, ScanResult};

pub fn crate_info() -> &'static str {
    "infohub-scan v0.1.0"
}
