use std::fmt::Write as _;

use infohub_engine::{EngineConfig, HubState};

use crate::{HudRenderer, HudView};

/// Three-line text overlay.
///
/// Bucket labels come from the configured radii so the lines stay in step
/// with whatever the engine counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextHud {
    player_labels: Vec<u32>,
    mob_labels: Vec<u32>,
}

impl Default for TextHud {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl TextHud {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            player_labels: config.player_radii_chunks.clone(),
            mob_labels: config.mob_radii.iter().map(|r| r.chunks).collect(),
        }
    }

    /// `FPS:.. RTT:..ms V:.. TD|TN:..s L:c(sky/block)`
    pub fn metrics_line(state: &HubState) -> String {
        let m = &state.metrics;
        // Night counts down to day, day counts down to night.
        let phase = if m.is_night { "TD" } else { "TN" };
        format!(
            "FPS:{} RTT:{}ms V:{:.2} {}:{}s L:{}({}/{})",
            m.fps,
            m.latency_ms,
            m.speed_bps,
            phase,
            m.seconds_to_transition,
            m.light.combined,
            m.light.sky,
            m.light.block
        )
    }

    /// `P3/5/7:a/b/c  SM:ON|OFF`
    pub fn players_line(&self, state: &HubState) -> String {
        let labels = join(self.player_labels.iter());
        let counts = join((0..self.player_labels.len()).map(|i| state.players_in_radius(i)));
        let markers = if state.spawn_markers_enabled { "ON" } else { "OFF" };
        format!("P{labels}:{counts}  SM:{markers}")
    }

    /// `M(H/N) 1:h/n 2:h/n ...`
    pub fn mobs_line(&self, state: &HubState) -> String {
        let mut line = String::from("M(H/N)");
        for (i, label) in self.mob_labels.iter().enumerate() {
            let tally = state.mobs_in_radius(i);
            let _ = write!(line, " {label}:{}/{}", tally.hostile, tally.non_hostile);
        }
        line
    }
}

fn join<T: ToString>(items: impl Iterator<Item = T>) -> String {
    items.map(|v| v.to_string()).collect::<Vec<_>>().join("/")
}

impl HudRenderer for TextHud {
    /// Lines top to bottom; empty while the host's debug overlay is up.
    type Output = Vec<String>;

    fn render(&self, state: &HubState, view: &HudView) -> Vec<String> {
        if view.debug_overlay_visible {
            return Vec::new();
        }
        vec![
            Self::metrics_line(state),
            self.players_line(state),
            self.mobs_line(state),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infohub_engine::{DerivedMetrics, LightSample};
    use infohub_spatial::{CounterSet, MobTally};

    fn sample_state() -> HubState {
        let mobs: Vec<MobTally> = (0..4)
            .map(|i| MobTally {
                hostile: i,
                non_hostile: 10 + i,
            })
            .collect();
        HubState {
            metrics: DerivedMetrics {
                fps: 144,
                latency_ms: 42,
                speed_bps: 4.3,
                is_night: true,
                seconds_to_transition: 550,
                light: LightSample {
                    combined: 11,
                    sky: 4,
                    block: 11,
                },
            },
            players: CounterSet::from(vec![1, 2, 4]),
            mobs: CounterSet::from(mobs),
            spawn_markers_enabled: true,
            spawn_markers: Vec::new(),
        }
    }

    #[test]
    fn metrics_line_format() {
        assert_eq!(
            TextHud::metrics_line(&sample_state()),
            "FPS:144 RTT:42ms V:4.30 TD:550s L:11(4/11)"
        );
    }

    #[test]
    fn day_shows_time_to_night() {
        let mut state = sample_state();
        state.metrics.is_night = false;
        assert!(TextHud::metrics_line(&state).contains(" TN:550s "));
    }

    #[test]
    fn players_line_format() {
        let hud = TextHud::default();
        assert_eq!(hud.players_line(&sample_state()), "P3/5/7:1/2/4  SM:ON");
    }

    #[test]
    fn mobs_line_format() {
        let hud = TextHud::default();
        assert_eq!(
            hud.mobs_line(&sample_state()),
            "M(H/N) 1:0/10 2:1/11 3:2/12 4:3/13"
        );
    }

    #[test]
    fn default_state_renders_zeroes() {
        let lines = TextHud::default().render(&HubState::default(), &HudView::default());
        assert_eq!(
            lines,
            vec![
                "FPS:0 RTT:0ms V:0.00 TN:0s L:0(0/0)".to_string(),
                "P3/5/7:0/0/0  SM:OFF".to_string(),
                "M(H/N) 1:0/0 2:0/0 3:0/0 4:0/0".to_string(),
            ]
        );
    }

    #[test]
    fn hidden_under_debug_overlay() {
        let view = HudView {
            debug_overlay_visible: true,
            ..HudView::default()
        };
        assert!(TextHud::default().render(&sample_state(), &view).is_empty());
    }
}
