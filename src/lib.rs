//! Rooftop Run - an endless side-scrolling runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tick loop, runner physics, track)
//! - `render`: Read-only render snapshots and the presentation seam
//! - `driver`: Wall-clock pacing of the fixed-rate tick
//! - `config`: Tunable parameters with named defaults

pub mod config;
pub mod driver;
pub mod render;
pub mod sim;

pub use config::{Config, ConfigOverrides};
pub use render::{RenderSink, RenderSnapshot};
pub use sim::{GameState, RunPhase, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation cadence (ticks per second)
    pub const CYCLES_PER_SECOND: u32 = 90;
    /// Milliseconds between simulation ticks
    pub const TICK_INTERVAL_MS: f32 = 1000.0 / CYCLES_PER_SECOND as f32;

    /// Distance units to displayed meters
    pub const DISTANCE_TO_METERS_COEFFICIENT: f32 = 0.055;

    /// Runner sprite metrics
    pub const RUNNER_WIDTH: f32 = 24.0;
    pub const RUNNER_HEIGHT: f32 = 38.0;
    /// Runner x offset is sqrt(speed) times this
    pub const RUNNER_X_OFFSET_COEFFICIENT: f32 = 100.0;
    /// Frames in the run cycle (sprite wrap is owned by the presenter)
    pub const RUNNER_RUNNING_FRAME_COUNT: u32 = 16;
    /// Distance units between run-cycle frame advances
    pub const RUNNER_FRAME_CHANGE_DISTANCE: f32 = 15.0;

    /// Parallax background layer speeds (fraction of track speed)
    pub const PARALLAX_BG1_SPEED: f32 = 0.3;
    pub const PARALLAX_BG2_SPEED: f32 = 0.2;

    /// Screen shake at session start (milliseconds) and pixel amplitude
    pub const SHAKE_START_MS: f32 = 3000.0;
    pub const SHAKE_AMPLITUDE: f32 = 20.0;

    /// Building geometry ranges (uniform random within min..min+range)
    pub const BUILDING_WIDTH_MIN: f32 = 300.0;
    pub const BUILDING_WIDTH_RANGE: f32 = 1000.0;
    pub const BUILDING_HEIGHT_MIN: f32 = 30.0;
    pub const BUILDING_HEIGHT_RANGE: f32 = 100.0;
    pub const BUILDING_GAP_MIN: f32 = 100.0;
    pub const BUILDING_GAP_RANGE: f32 = 100.0;
}

/// Convert raw distance units to the displayed meter count
#[inline]
pub fn distance_to_meters(distance: f32) -> u32 {
    (distance * consts::DISTANCE_TO_METERS_COEFFICIENT).round() as u32
}
