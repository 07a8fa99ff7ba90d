//! Input: turn the host's per-tick "key is down" state into discrete presses.
//!
//! # Invariants
//! - A key held across many ticks produces exactly one press.

pub mod edge;

pub use edge::KeyEdge;
