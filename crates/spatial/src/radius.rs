use infohub_common::CHUNK_SIZE;
use serde::{Deserialize, Serialize};

/// Convert a radius in chunks to a linear distance in blocks.
pub fn chunks_to_blocks(chunks: u32) -> f64 {
    f64::from(chunks) * f64::from(CHUNK_SIZE)
}

/// How membership in a radius bucket is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMetric {
    /// Horizontal Euclidean distance against `chunks * 16` blocks.
    Distance,
    /// Chebyshev distance between chunk coordinates, in whole chunks.
    ChunkGrid,
}

/// One configured mob counting radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobRadius {
    pub chunks: u32,
    pub metric: RadiusMetric,
}

impl MobRadius {
    pub const fn distance(chunks: u32) -> Self {
        Self {
            chunks,
            metric: RadiusMetric::Distance,
        }
    }

    pub const fn chunk_grid(chunks: u32) -> Self {
        Self {
            chunks,
            metric: RadiusMetric::ChunkGrid,
        }
    }

    /// Farthest horizontal offset (in blocks, per axis) at which an entity can
    /// still be a member of this bucket.
    ///
    /// A chunk-grid window reaches one chunk further than its radius because
    /// the observer may stand anywhere inside the center chunk.
    pub fn reach_blocks(&self) -> f64 {
        match self.metric {
            RadiusMetric::Distance => chunks_to_blocks(self.chunks),
            RadiusMetric::ChunkGrid => chunks_to_blocks(self.chunks.saturating_add(1)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Threshold {
    bucket: usize,
    radius_sq: f64,
}

/// Squared-distance thresholds sorted ascending, each tagged with the bucket
/// index it feeds.
///
/// Built once; evaluated once per candidate. A candidate at squared distance
/// `d` belongs to the suffix of thresholds with `radius_sq >= d`, which is
/// what makes the counting nested-inclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadiusTable {
    thresholds: Vec<Threshold>,
}

impl RadiusTable {
    /// Build from `(bucket index, radius in chunks)` pairs.
    pub fn from_chunks(radii: impl IntoIterator<Item = (usize, u32)>) -> Self {
        let mut thresholds: Vec<Threshold> = radii
            .into_iter()
            .map(|(bucket, chunks)| {
                let r = chunks_to_blocks(chunks);
                Threshold {
                    bucket,
                    radius_sq: r * r,
                }
            })
            .collect();
        thresholds.sort_by(|a, b| a.radius_sq.total_cmp(&b.radius_sq));
        Self { thresholds }
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Largest squared radius, or `None` for an empty table.
    pub fn max_radius_sq(&self) -> Option<f64> {
        self.thresholds.last().map(|t| t.radius_sq)
    }

    /// Bucket indices whose threshold contains `dist_sq`, smallest radius first.
    pub fn buckets_containing(&self, dist_sq: f64) -> impl Iterator<Item = usize> + '_ {
        let start = self.thresholds.partition_point(|t| t.radius_sq < dist_sq);
        self.thresholds[start..].iter().map(|t| t.bucket)
    }
}
