use infohub_common::{BlockPos, LightChannel};
use infohub_kernel::WorldView;

/// Decides whether the column standing on `ground` is a spawn candidate.
///
/// The marker recorded for an accepted column is `ground.up(1)`.
pub trait SpawnPredicate {
    fn accepts(&self, world: &dyn WorldView, ground: BlockPos) -> bool;
}

impl<F> SpawnPredicate for F
where
    F: Fn(&dyn WorldView, BlockPos) -> bool,
{
    fn accepts(&self, world: &dyn WorldView, ground: BlockPos) -> bool {
        self(world, ground)
    }
}

/// Default heuristic for two-block-tall hostile mobs:
/// - the ground block is not air and has a solid top face,
/// - the spawn (y+1) and head (y+2) blocks have no collision and no fluid,
/// - block light at the spawn block is exactly 0.
///
/// Sky light is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DarkSolidGround;

impl DarkSolidGround {
    fn is_open(world: &dyn WorldView, pos: BlockPos) -> bool {
        let block = world.block(pos);
        block.collision_empty && block.fluid_empty
    }
}

impl SpawnPredicate for DarkSolidGround {
    fn accepts(&self, world: &dyn WorldView, ground: BlockPos) -> bool {
        let floor = world.block(ground);
        if floor.is_air || !floor.solid_top {
            return false;
        }

        let spawn = ground.up(1);
        if !Self::is_open(world, spawn) || !Self::is_open(world, ground.up(2)) {
            return false;
        }

        world.light_level(spawn, LightChannel::Block) == 0
    }
}
