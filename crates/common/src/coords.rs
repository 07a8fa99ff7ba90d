use glam::{DVec3, IVec3};
use serde::{Deserialize, Serialize};

/// Side length of a chunk in blocks.
pub const CHUNK_SIZE: i32 = 16;

/// Integer block-grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Block containing a continuous position (floor on every axis).
    pub fn containing(pos: DVec3) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
            z: pos.z.floor() as i32,
        }
    }

    /// One block lower; saturates at the bottom of the `i32` range.
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y.saturating_sub(1), self.z)
    }

    /// `n` blocks higher; saturates at the top of the `i32` range.
    pub const fn up(self, n: i32) -> Self {
        Self::new(self.x, self.y.saturating_add(n), self.z)
    }

    pub fn chunk(self) -> ChunkPos {
        ChunkPos::new(self.x >> 4, self.z >> 4)
    }

    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

/// A 2D chunk coordinate (XZ plane, 16x16 blocks per chunk).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chebyshev (max-axis) distance in chunks.
    pub fn chebyshev(self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containing_floors_negative_coordinates() {
        let p = BlockPos::containing(DVec3::new(-0.5, 64.9, 15.99));
        assert_eq!(p, BlockPos::new(-1, 64, 15));
    }

    #[test]
    fn chunk_of_block_uses_floor_division() {
        assert_eq!(BlockPos::new(0, 0, 15).chunk(), ChunkPos::new(0, 0));
        assert_eq!(BlockPos::new(16, 0, -1).chunk(), ChunkPos::new(1, -1));
        assert_eq!(BlockPos::new(-16, 0, -17).chunk(), ChunkPos::new(-1, -2));
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        let a = ChunkPos::new(0, 0);
        assert_eq!(a.chebyshev(ChunkPos::new(2, -1)), 2);
        assert_eq!(a.chebyshev(ChunkPos::new(-3, 3)), 3);
        assert_eq!(a.chebyshev(a), 0);
    }

    #[test]
    fn down_and_up_are_vertical() {
        let p = BlockPos::new(3, 10, -4);
        assert_eq!(p.down(), BlockPos::new(3, 9, -4));
        assert_eq!(p.up(2), BlockPos::new(3, 12, -4));
    }

    #[test]
    fn far_positions_saturate() {
        let far = BlockPos::containing(DVec3::new(3.0e9, -3.0e9, 0.0));
        assert_eq!(far, BlockPos::new(i32::MAX, i32::MIN, 0));
        assert_eq!(far.down().y, i32::MIN);
        assert_eq!(BlockPos::new(0, i32::MAX, 0).up(2).y, i32::MAX);
    }
}
