use std::collections::BTreeSet;

use glam::DVec3;
use infohub_common::EntityId;
use infohub_kernel::{Aabb, EntityFilter, Observer, WorldView};

use crate::counts::{CounterSet, MobTally};
use crate::grid::ChunkGridTable;
use crate::radius::{chunks_to_blocks, MobRadius, RadiusMetric, RadiusTable};

fn horizontal_dist_sq(a: DVec3, b: DVec3) -> f64 {
    let dx = a.x - b.x;
    let dz = a.z - b.z;
    dx * dx + dz * dz
}

/// Result of one player sampling pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerSample {
    pub counts: CounterSet<u32>,
    /// Players (other than the observer) inside the notification radius.
    pub nearby: BTreeSet<EntityId>,
}

/// Counts other players in nested distance buckets and collects those inside
/// the notification radius.
#[derive(Debug, Clone)]
pub struct PlayerSampler {
    table: RadiusTable,
    bucket_count: usize,
    notify_radius_sq: f64,
}

impl PlayerSampler {
    pub fn new(radii_chunks: &[u32], notify_radius_chunks: u32) -> Self {
        let notify = chunks_to_blocks(notify_radius_chunks);
        Self {
            table: RadiusTable::from_chunks(radii_chunks.iter().copied().enumerate()),
            bucket_count: radii_chunks.len(),
            notify_radius_sq: notify * notify,
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn sample(&self, world: &dyn WorldView, observer: &Observer) -> PlayerSample {
        let mut counts: CounterSet<u32> = CounterSet::zeroed(self.bucket_count);
        let mut nearby = BTreeSet::new();
        let max_sq = self.table.max_radius_sq().unwrap_or(0.0);

        for other in world.players() {
            if other.id == observer.id || other.removed {
                continue;
            }
            let dist_sq = horizontal_dist_sq(other.position, observer.position);
            if dist_sq <= max_sq {
                for bucket in self.table.buckets_containing(dist_sq) {
                    if let Some(c) = counts.bucket_mut(bucket) {
                        *c += 1;
                    }
                }
            }
            if dist_sq <= self.notify_radius_sq {
                nearby.insert(other.id);
            }
        }

        tracing::trace!(
            counts = ?counts.as_slice(),
            nearby = nearby.len(),
            "player sample"
        );
        PlayerSample { counts, nearby }
    }
}

/// Counts mobs per bucket, split hostile / non-hostile.
///
/// Distance buckets go through a [`RadiusTable`]; chunk-grid buckets go
/// through a [`ChunkGridTable`]. Both are evaluated for every candidate.
#[derive(Debug, Clone)]
pub struct MobSampler {
    distance: RadiusTable,
    grid: ChunkGridTable,
    bucket_count: usize,
    reach_blocks: f64,
}

impl MobSampler {
    pub fn new(radii: &[MobRadius]) -> Self {
        let by_metric = |metric: RadiusMetric| {
            radii
                .iter()
                .enumerate()
                .filter(move |(_, r)| r.metric == metric)
                .map(|(i, r)| (i, r.chunks))
        };
        Self {
            distance: RadiusTable::from_chunks(by_metric(RadiusMetric::Distance)),
            grid: ChunkGridTable::new(by_metric(RadiusMetric::ChunkGrid)),
            bucket_count: radii.len(),
            reach_blocks: radii
                .iter()
                .map(MobRadius::reach_blocks)
                .fold(0.0, f64::max),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Prefilter region: a full-height square around the observer that covers
    /// every configured bucket.
    pub fn query_region(&self, world: &dyn WorldView, observer: &Observer) -> Aabb {
        let p = observer.position;
        let r = self.reach_blocks;
        Aabb::new(
            DVec3::new(p.x - r, f64::from(world.bottom_y()), p.z - r),
            DVec3::new(p.x + r, f64::from(world.top_y()), p.z + r),
        )
    }

    pub fn sample(&self, world: &dyn WorldView, observer: &Observer) -> CounterSet<MobTally> {
        let mut counts: CounterSet<MobTally> = CounterSet::zeroed(self.bucket_count);
        let region = self.query_region(world, observer);
        let center = observer.block_pos().chunk();

        let candidates = world.entities_in(&region, EntityFilter::Mobs);
        let mut skipped = 0usize;
        for mob in &candidates {
            if mob.removed {
                skipped += 1;
                continue;
            }
            let hostile = mob.is_hostile();
            let dist_sq = horizontal_dist_sq(mob.position, observer.position);
            let chunk = mob.block_pos().chunk();

            let buckets = self
                .distance
                .buckets_containing(dist_sq)
                .chain(self.grid.buckets_containing(center, chunk));
            for bucket in buckets {
                if let Some(tally) = counts.bucket_mut(bucket) {
                    tally.record(hostile);
                }
            }
        }

        tracing::trace!(candidates = candidates.len(), skipped, "mob sample");
        counts
    }
}
