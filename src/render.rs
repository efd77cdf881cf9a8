//! Render snapshots and the presentation seam
//!
//! The simulation never draws. Once per render interval it captures a
//! by-value snapshot of everything a presenter needs and hands it to a
//! `RenderSink`. Presenters own pixels, sprites, shake jitter and the
//! run-cycle sprite wrap; the snapshot is plain data.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::distance_to_meters;
use crate::sim::GameState;

/// Position and size of one live platform segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingView {
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only view of the simulation, captured at the end of a tick
///
/// Always observes a fully consistent post-tick state; no in-progress
/// mutation is ever visible to a presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Runner world position (x right, y up from street level)
    pub runner_pos: Vec2,
    /// Unbounded run-cycle frame counter; wrap modulo
    /// [`crate::consts::RUNNER_RUNNING_FRAME_COUNT`] when mapping to sprites
    pub runner_frame: u32,
    /// Live segments, leftmost first
    pub buildings: Vec<BuildingView>,
    /// Background parallax scroll offsets
    pub bg1_offset: f32,
    pub bg2_offset: f32,
    /// Distance display metric, already rounded to meters
    pub distance_m: u32,
    /// Remaining shake duration; nonzero means jitter this frame
    pub shake_ms: f32,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            runner_pos: Vec2::new(state.runner_x, state.runner.y),
            runner_frame: state.runner.run_frame,
            buildings: state
                .track
                .buildings()
                .map(|b| BuildingView {
                    left: b.left,
                    width: b.width,
                    height: b.height,
                })
                .collect(),
            bg1_offset: state.bg1_offset,
            bg2_offset: state.bg2_offset,
            distance_m: distance_to_meters(state.distance),
            shake_ms: state.shake_ms,
        }
    }
}

/// Presentation adapter: consumes snapshots at render cadence
pub trait RenderSink {
    fn present(&mut self, snapshot: &RenderSnapshot);
}
