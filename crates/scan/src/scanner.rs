use infohub_common::BlockPos;
use infohub_kernel::WorldView;
use serde::{Deserialize, Serialize};

use crate::predicate::SpawnPredicate;

/// Scan window, cadence and cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Horizontal half-width of the scanned square, in blocks.
    pub radius_blocks: i32,
    /// Vertical half-range around the observer's Y, in blocks.
    pub vertical_blocks: i32,
    /// Rescan every N ticks while markers are enabled.
    pub interval_ticks: u32,
    /// Maximum number of markers; the scan stops as soon as it is reached.
    pub max_markers: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            radius_blocks: 24,
            vertical_blocks: 12,
            interval_ticks: 10,
            max_markers: 800,
        }
    }
}

/// Outcome of one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Accepted spawn positions (one above the ground block), in scan order.
    pub markers: Vec<BlockPos>,
    /// Number of ground positions handed to the predicate.
    pub examined: usize,
    /// True if the scan stopped early because the cap was reached.
    pub capped: bool,
}

/// Inclusive Y range for ground blocks: one block of margin above the floor
/// and one block of margin below the build limit.
fn ground_y_range(world: &dyn WorldView, center_y: i32, vertical: i32) -> (i32, i32) {
    let min_y = (world.bottom_y() + 1).max(center_y.saturating_sub(vertical));
    let max_y = (world.top_y() - 2).min(center_y.saturating_add(vertical));
    (min_y, max_y)
}

/// Scan the box around `center` for spawn candidates.
pub fn scan(
    world: &dyn WorldView,
    center: BlockPos,
    config: &ScanConfig,
    predicate: &dyn SpawnPredicate,
) -> ScanResult {
    let _span = tracing::debug_span!("spawn_scan", ?center).entered();
    let mut result = ScanResult::default();
    if config.max_markers == 0 {
        return result;
    }

    let r = config.radius_blocks.max(0);
    let (min_y, max_y) = ground_y_range(world, center.y, config.vertical_blocks.max(0));

    'columns: for dx in -r..=r {
        let Some(x) = center.x.checked_add(dx) else {
            continue;
        };
        for dz in -r..=r {
            let Some(z) = center.z.checked_add(dz) else {
                continue;
            };
            for y in min_y..=max_y {
                let ground = BlockPos::new(x, y, z);
                result.examined += 1;
                if predicate.accepts(world, ground) {
                    result.markers.push(ground.up(1));
                    if result.markers.len() >= config.max_markers {
                        result.capped = true;
                        break 'columns;
                    }
                }
            }
        }
    }

    tracing::debug!(
        markers = result.markers.len(),
        examined = result.examined,
        capped = result.capped,
        "spawn scan complete"
    );
    result
}
