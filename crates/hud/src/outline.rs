use glam::DVec3;
use infohub_common::BlockPos;
use infohub_engine::HubState;
use serde::Serialize;

use crate::{HudRenderer, HudView};

/// Outward growth of each marker box, so lines don't z-fight block edges.
pub const MARKER_INFLATE: f64 = 0.002;

/// Straight RGBA; opaque red at 0.85 alpha.
pub const MARKER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 0.85];

/// One wireframe box to draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlineBox {
    pub min: DVec3,
    pub max: DVec3,
    pub color: [f32; 4],
}

impl OutlineBox {
    /// Unit box around a spawn block, inflated on every side.
    pub fn around(pos: BlockPos) -> Self {
        let min = pos.as_ivec3().as_dvec3();
        Self {
            min: min - DVec3::splat(MARKER_INFLATE),
            max: min + DVec3::splat(1.0 + MARKER_INFLATE),
            color: MARKER_COLOR,
        }
    }

    /// Shift into camera-relative coordinates.
    pub fn relative_to(self, camera: DVec3) -> Self {
        Self {
            min: self.min - camera,
            max: self.max - camera,
            ..self
        }
    }
}

/// Produces camera-relative outline boxes for the current spawn markers.
#[derive(Debug, Default)]
pub struct MarkerOutlines;

impl MarkerOutlines {
    pub fn new() -> Self {
        Self
    }
}

impl HudRenderer for MarkerOutlines {
    type Output = Vec<OutlineBox>;

    fn render(&self, state: &HubState, view: &HudView) -> Vec<OutlineBox> {
        if !state.spawn_markers_enabled || state.spawn_markers.is_empty() {
            return Vec::new();
        }
        let boxes: Vec<OutlineBox> = state
            .spawn_markers
            .iter()
            .map(|&p| OutlineBox::around(p).relative_to(view.camera))
            .collect();
        tracing::trace!(count = boxes.len(), "marker outlines");
        boxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(markers: Vec<BlockPos>, enabled: bool) -> HubState {
        HubState {
            spawn_markers_enabled: enabled,
            spawn_markers: markers,
            ..HubState::default()
        }
    }

    #[test]
    fn box_is_inflated_unit_cube() {
        let b = OutlineBox::around(BlockPos::new(2, 64, -3));
        assert!(b.min.abs_diff_eq(DVec3::new(1.998, 63.998, -3.002), 1e-9));
        assert!(b.max.abs_diff_eq(DVec3::new(3.002, 65.002, -1.998), 1e-9));
        assert_eq!(b.color, MARKER_COLOR);
    }

    #[test]
    fn boxes_are_camera_relative() {
        let state = state_with(vec![BlockPos::new(10, 0, 0)], true);
        let view = HudView {
            camera: DVec3::new(10.0, 0.0, 0.0),
            ..HudView::default()
        };
        let boxes = MarkerOutlines::new().render(&state, &view);
        assert_eq!(boxes.len(), 1);
        assert!(boxes[0].min.abs_diff_eq(DVec3::splat(-MARKER_INFLATE), 1e-9));
    }

    #[test]
    fn nothing_when_disabled() {
        let state = state_with(vec![BlockPos::new(0, 0, 0)], false);
        assert!(MarkerOutlines::new().render(&state, &HudView::default()).is_empty());
    }

    #[test]
    fn nothing_when_empty() {
        let state = state_with(Vec::new(), true);
        assert!(MarkerOutlines::new().render(&state, &HudView::default()).is_empty());
    }

    #[test]
    fn outlines_ignore_debug_overlay() {
        let state = state_with(vec![BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 0)], true);
        let view = HudView {
            debug_overlay_visible: true,
            ..HudView::default()
        };
        assert_eq!(MarkerOutlines::new().render(&state, &view).len(), 2);
    }
}
