use glam::DVec3;
use infohub_common::{BlockPos, EntityId, LightChannel, WorldId};
use serde::{Deserialize, Serialize};

/// Collision/fluid facts about a single block, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub is_air: bool,
    /// Full solid top face that an entity can stand on.
    pub solid_top: bool,
    pub collision_empty: bool,
    pub fluid_empty: bool,
}

impl BlockInfo {
    pub const AIR: Self = Self {
        is_air: true,
        solid_top: false,
        collision_empty: true,
        fluid_empty: true,
    };

    pub const SOLID: Self = Self {
        is_air: false,
        solid_top: true,
        collision_empty: false,
        fluid_empty: true,
    };

    pub const WATER: Self = Self {
        is_air: false,
        solid_top: false,
        collision_empty: true,
        fluid_empty: false,
    };

    /// Non-air with no collision, e.g. grass or a torch.
    pub const PASSABLE: Self = Self {
        is_air: false,
        solid_top: false,
        collision_empty: true,
        fluid_empty: true,
    };

    /// Has collision but no full top face, e.g. a fence or glass pane.
    pub const PARTIAL: Self = Self {
        is_air: false,
        solid_top: false,
        collision_empty: false,
        fluid_empty: true,
    };
}

impl Default for BlockInfo {
    fn default() -> Self {
        Self::AIR
    }
}

/// Category of a movable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Mob { hostile: bool },
}

/// Owned, tick-local copy of an entity's state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub position: DVec3,
    pub kind: EntityKind,
    /// Set when the host has already scheduled the entity for removal.
    pub removed: bool,
}

impl EntityRecord {
    pub fn block_pos(&self) -> BlockPos {
        BlockPos::containing(self.position)
    }

    pub fn is_hostile(&self) -> bool {
        matches!(self.kind, EntityKind::Mob { hostile: true })
    }
}

/// Type filter for entity enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityFilter {
    Players,
    Mobs,
}

impl EntityFilter {
    pub fn matches(self, kind: EntityKind) -> bool {
        match self {
            Self::Players => kind == EntityKind::Player,
            Self::Mobs => matches!(kind, EntityKind::Mob { .. }),
        }
    }
}

/// Axis-aligned box in continuous world coordinates (inclusive bounds).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn contains(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// The local observer for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub id: EntityId,
    pub position: DVec3,
    /// Velocity in blocks per tick.
    pub velocity: DVec3,
}

impl Observer {
    pub fn block_pos(&self) -> BlockPos {
        BlockPos::containing(self.position)
    }
}

/// Read-only world snapshot the host hands to the engine each tick.
///
/// All queries are synchronous and bounded; implementations must not block.
pub trait WorldView {
    /// Identity of the world; changes on dimension switch or reconnect.
    fn world_id(&self) -> WorldId;

    /// Absolute time of day in ticks (not yet reduced modulo the day length).
    fn time_of_day(&self) -> i64;

    /// Lowest buildable Y (inclusive).
    fn bottom_y(&self) -> i32;

    /// Upper build limit (exclusive).
    fn top_y(&self) -> i32;

    fn light_level(&self, pos: BlockPos, channel: LightChannel) -> u8;

    fn block(&self, pos: BlockPos) -> BlockInfo;

    /// Entities of the filtered kind whose position lies inside `region`.
    fn entities_in(&self, region: &Aabb, filter: EntityFilter) -> Vec<EntityRecord>;

    /// All players in the world, including the observer.
    fn players(&self) -> Vec<EntityRecord>;

    /// Display name of an entity, if the host knows one.
    fn display_name(&self, id: EntityId) -> Option<String>;
}
