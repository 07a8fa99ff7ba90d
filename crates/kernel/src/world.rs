use glam::DVec3;
use infohub_common::{BlockPos, EntityId, LightChannel, WorldId};
use std::collections::{BTreeMap, HashMap};

use crate::view::{Aabb, BlockInfo, EntityFilter, EntityKind, EntityRecord, WorldView};

/// Per-entity data stored in the world.
#[derive(Debug, Clone)]
pub struct EntityData {
    pub position: DVec3,
    pub kind: EntityKind,
    pub name: Option<String>,
    pub removed: bool,
}

/// In-memory host world.
///
/// Stands in for the live client world: sparse block storage (unset blocks
/// are air), per-block light overrides on top of a uniform ambient sky
/// light, and entities keyed by identity.
///
/// Entities live in a BTreeMap so enumeration order is deterministic.
#[derive(Debug, Clone)]
pub struct World {
    id: WorldId,
    time_of_day: i64,
    bottom_y: i32,
    top_y: i32,
    blocks: HashMap<BlockPos, BlockInfo>,
    sky_light: HashMap<BlockPos, u8>,
    block_light: HashMap<BlockPos, u8>,
    ambient_sky_light: u8,
    entities: BTreeMap<EntityId, EntityData>,
}

impl Default for World {
    fn default() -> Self {
        Self::new(-64, 320)
    }
}

impl World {
    /// Create an empty world with the given vertical bounds (`top_y` exclusive).
    pub fn new(bottom_y: i32, top_y: i32) -> Self {
        assert!(bottom_y < top_y, "bottom_y must be below top_y");
        Self {
            id: WorldId::new(),
            time_of_day: 0,
            bottom_y,
            top_y,
            blocks: HashMap::new(),
            sky_light: HashMap::new(),
            block_light: HashMap::new(),
            ambient_sky_light: 15,
            entities: BTreeMap::new(),
        }
    }

    pub fn set_time_of_day(&mut self, time: i64) {
        self.time_of_day = time;
    }

    /// Advance time of day by one tick.
    pub fn step(&mut self) {
        self.time_of_day += 1;
    }

    /// Sky light reported for every block without an explicit override.
    pub fn set_ambient_sky_light(&mut self, level: u8) {
        self.ambient_sky_light = level.min(15);
    }

    pub fn set_block(&mut self, pos: BlockPos, block: BlockInfo) {
        if block == BlockInfo::AIR {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, block);
        }
    }

    /// Fill an inclusive box of blocks.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, block: BlockInfo) {
        for x in from.x.min(to.x)..=from.x.max(to.x) {
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                for z in from.z.min(to.z)..=from.z.max(to.z) {
                    self.set_block(BlockPos::new(x, y, z), block);
                }
            }
        }
    }

    pub fn set_block_light(&mut self, pos: BlockPos, level: u8) {
        self.block_light.insert(pos, level.min(15));
    }

    pub fn set_sky_light(&mut self, pos: BlockPos, level: u8) {
        self.sky_light.insert(pos, level.min(15));
    }

    /// Number of non-air blocks stored.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn spawn_player(&mut self, name: impl Into<String>, position: DVec3) -> EntityId {
        self.spawn(EntityKind::Player, Some(name.into()), position)
    }

    pub fn spawn_mob(&mut self, hostile: bool, position: DVec3) -> EntityId {
        self.spawn(EntityKind::Mob { hostile }, None, position)
    }

    /// Spawn an entity with a specific id (used when the identity is already known).
    pub fn spawn_with_id(
        &mut self,
        id: EntityId,
        kind: EntityKind,
        name: Option<String>,
        position: DVec3,
    ) {
        self.entities.insert(
            id,
            EntityData {
                position,
                kind,
                name,
                removed: false,
            },
        );
    }

    fn spawn(&mut self, kind: EntityKind, name: Option<String>, position: DVec3) -> EntityId {
        let id = EntityId::new();
        self.spawn_with_id(id, kind, name, position);
        id
    }

    /// Remove an entity. Returns the data if it existed.
    pub fn despawn(&mut self, id: EntityId) -> Option<EntityData> {
        self.entities.remove(&id)
    }

    /// Flag an entity as pending removal without dropping it yet.
    pub fn mark_removed(&mut self, id: EntityId) -> bool {
        match self.entities.get_mut(&id) {
            Some(data) => {
                data.removed = true;
                true
            }
            None => false,
        }
    }

    pub fn set_position(&mut self, id: EntityId, position: DVec3) -> bool {
        match self.entities.get_mut(&id) {
            Some(data) => {
                data.position = position;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityData> {
        self.entities.get(&id)
    }

    fn record(id: EntityId, data: &EntityData) -> EntityRecord {
        EntityRecord {
            id,
            position: data.position,
            kind: data.kind,
            removed: data.removed,
        }
    }
}

impl WorldView for World {
    fn world_id(&self) -> WorldId {
        self.id
    }

    fn time_of_day(&self) -> i64 {
        self.time_of_day
    }

    fn bottom_y(&self) -> i32 {
        self.bottom_y
    }

    fn top_y(&self) -> i32 {
        self.top_y
    }

    fn light_level(&self, pos: BlockPos, channel: LightChannel) -> u8 {
        let sky = self
            .sky_light
            .get(&pos)
            .copied()
            .unwrap_or(self.ambient_sky_light);
        let block = self.block_light.get(&pos).copied().unwrap_or(0);
        match channel {
            LightChannel::Sky => sky,
            LightChannel::Block => block,
            LightChannel::Combined => sky.max(block),
        }
    }

    fn block(&self, pos: BlockPos) -> BlockInfo {
        self.blocks.get(&pos).copied().unwrap_or(BlockInfo::AIR)
    }

    fn entities_in(&self, region: &Aabb, filter: EntityFilter) -> Vec<EntityRecord> {
        self.entities
            .iter()
            .filter(|(_, data)| filter.matches(data.kind) && region.contains(data.position))
            .map(|(id, data)| Self::record(*id, data))
            .collect()
    }

    fn players(&self) -> Vec<EntityRecord> {
        self.entities
            .iter()
            .filter(|(_, data)| data.kind == EntityKind::Player)
            .map(|(id, data)| Self::record(*id, data))
            .collect()
    }

    fn display_name(&self, id: EntityId) -> Option<String> {
        self.entities.get(&id).and_then(|data| data.name.clone())
    }
}
