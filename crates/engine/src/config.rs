use infohub_scan::ScanConfig;
use infohub_spatial::MobRadius;
use serde::{Deserialize, Serialize};

/// Errors from loading or validating an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
    #[error("{field} must list at least one radius")]
    EmptyRadii { field: &'static str },
    #[error("{field} contains a zero radius")]
    ZeroRadius { field: &'static str },
    #[error("scan.max_markers must be greater than zero")]
    ZeroMarkerCap,
    #[error("scan window must not be negative (radius {radius}, vertical {vertical})")]
    NegativeScanWindow { radius: i32, vertical: i32 },
    #[error("{field} radius {chunks} is larger than the block grid")]
    RadiusTooLarge { field: &'static str, chunks: u32 },
}

/// Largest radius, in chunks, whose block distance still fits the block grid.
pub const MAX_RADIUS_CHUNKS: u32 = (i32::MAX / infohub_common::CHUNK_SIZE) as u32;

/// Engine tunables.
///
/// Radii are in chunks (16 blocks). Every field has a default, so a YAML file
/// only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Recompute player/mob counters every N ticks.
    pub counter_interval_ticks: u32,
    /// Radius for "player nearby" notifications.
    pub player_notify_radius_chunks: u32,
    /// Nested player count buckets, in display order.
    pub player_radii_chunks: Vec<u32>,
    /// Mob count buckets, in display order.
    pub mob_radii: Vec<MobRadius>,
    pub scan: ScanConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            counter_interval_ticks: 10,
            player_notify_radius_chunks: 4,
            player_radii_chunks: vec![3, 5, 7],
            // Bucket 2 counts by chunk grid, not by distance.
            mob_radii: vec![
                MobRadius::distance(1),
                MobRadius::chunk_grid(2),
                MobRadius::distance(3),
                MobRadius::distance(4),
            ],
            scan: ScanConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.counter_interval_ticks == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "counter_interval_ticks",
            });
        }
        if self.scan.interval_ticks == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "scan.interval_ticks",
            });
        }
        if self.player_notify_radius_chunks == 0 {
            return Err(ConfigError::ZeroRadius {
                field: "player_notify_radius_chunks",
            });
        }
        if self.player_radii_chunks.is_empty() {
            return Err(ConfigError::EmptyRadii {
                field: "player_radii_chunks",
            });
        }
        if self.player_radii_chunks.contains(&0) {
            return Err(ConfigError::ZeroRadius {
                field: "player_radii_chunks",
            });
        }
        if self.mob_radii.is_empty() {
            return Err(ConfigError::EmptyRadii { field: "mob_radii" });
        }
        if self.mob_radii.iter().any(|r| r.chunks == 0) {
            return Err(ConfigError::ZeroRadius { field: "mob_radii" });
        }
        let radii = std::iter::once(("player_notify_radius_chunks", self.player_notify_radius_chunks))
            .chain(self.player_radii_chunks.iter().map(|&c| ("player_radii_chunks", c)))
            .chain(self.mob_radii.iter().map(|r| ("mob_radii", r.chunks)));
        for (field, chunks) in radii {
            if chunks > MAX_RADIUS_CHUNKS {
                return Err(ConfigError::RadiusTooLarge { field, chunks });
            }
        }
        if self.scan.max_markers == 0 {
            return Err(ConfigError::ZeroMarkerCap);
        }
        if self.scan.radius_blocks < 0 || self.scan.vertical_blocks < 0 {
            return Err(ConfigError::NegativeScanWindow {
                radius: self.scan.radius_blocks,
                vertical: self.scan.vertical_blocks,
            });
        }
        Ok(())
    }
}
