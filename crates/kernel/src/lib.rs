//! Host Interfaces: the read-only world snapshot, observer and connection roster
//! the engine consumes each tick, plus an in-memory host world.
//!
//! # Invariants
//! - Everything returned through `WorldView` is an owned, tick-local value.
//! - The engine never holds a `WorldView` borrow past the tick that produced it.

pub mod roster;
pub mod view;
pub mod world;

pub use roster::{ConnectionRoster, PlayerList};
pub use view::{Aabb, BlockInfo, EntityFilter, EntityKind, EntityRecord, Observer, WorldView};
pub use world::World;
