//! HUD Adapter: turns the engine's exposed state into presentation inputs.
//!
//! # Invariants
//! - Renderers only read `HubState`; they never feed back into the engine.
//! - Output depends on the state and the view alone, so any host (text
//!   overlay, line renderer, CLI) can consume it.

mod outline;
mod text;

pub use outline::{MarkerOutlines, OutlineBox, MARKER_COLOR, MARKER_INFLATE};
pub use text::TextHud;

use glam::DVec3;
use infohub_engine::HubState;

/// What the host knows about its own view this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HudView {
    /// Camera position in world space; outlines are emitted relative to it.
    pub camera: DVec3,
    /// The host's own debug overlay is on screen.
    pub debug_overlay_visible: bool,
}

/// Renderer-agnostic interface over the engine state.
pub trait HudRenderer {
    type Output;

    fn render(&self, state: &HubState, view: &HudView) -> Self::Output;
}

pub fn crate_info() -> &'static str {
    "infohub-hud v0.1.0"
}
