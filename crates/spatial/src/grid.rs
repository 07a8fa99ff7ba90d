use infohub_common::ChunkPos;

/// Chunk-grid membership windows, each tagged with the bucket index it feeds.
///
/// An entity belongs to a window when both the X and Z deltas between its
/// chunk and the center chunk are within the window radius (Chebyshev
/// distance). This is a different rule from the distance table and is kept
/// separate from it on purpose.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkGridTable {
    windows: Vec<(usize, i32)>,
}

impl ChunkGridTable {
    /// Build from `(bucket index, radius in chunks)` pairs.
    pub fn new(windows: impl IntoIterator<Item = (usize, u32)>) -> Self {
        Self {
            windows: windows
                .into_iter()
                .map(|(bucket, chunks)| (bucket, i32::try_from(chunks).unwrap_or(i32::MAX)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Bucket indices whose window around `center` contains `chunk`.
    pub fn buckets_containing(
        &self,
        center: ChunkPos,
        chunk: ChunkPos,
    ) -> impl Iterator<Item = usize> + '_ {
        let d = center.chebyshev(chunk);
        self.windows
            .iter()
            .filter(move |(_, radius)| d <= *radius)
            .map(|(bucket, _)| *bucket)
    }
}
