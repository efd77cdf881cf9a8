//! Session state and lifecycle
//!
//! All simulation state lives here, owned by a single `GameState`. The state
//! is deterministic for a given seed, config and elapsed-time sequence, and
//! serializable in full (the RNG included).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::runner::Runner;
use super::track::Track;
use crate::config::Config;
use crate::consts::*;

/// Observable status of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// The runner is on (or above) the track
    Running,
    /// The runner landed at street level with nothing underfoot; terminal
    /// until `reset`
    Fallen,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Immutable tuning for this session
    pub config: Config,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Geometry RNG, seeded from `seed`
    pub rng: Pcg32,
    /// Width of the visible world in distance units
    pub viewport_width: f32,
    pub phase: RunPhase,
    /// Ticks are ignored while false; toggled by `start`/`stop`
    pub running: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Horizontal scroll speed (distance units per millisecond)
    pub speed: f32,
    /// Cumulative distance traveled
    pub distance: f32,
    /// Runner x position, derived from speed every tick
    pub runner_x: f32,
    /// Milliseconds accumulated since the last render request
    pub since_render_ms: f32,
    /// Background parallax scroll offsets
    pub bg1_offset: f32,
    pub bg2_offset: f32,
    /// Remaining screen-shake duration, exposed as a trigger to the presenter
    pub shake_ms: f32,
    pub runner: Runner,
    pub track: Track,
}

impl GameState {
    /// New stopped session; call `start` before ticking
    pub fn new(viewport_width: f32, seed: u64, config: Config) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let track = Track::new(viewport_width, &mut rng);
        let speed = config.initial_speed;
        log::info!("new session: seed={seed} viewport={viewport_width}");
        Self {
            config,
            seed,
            rng,
            viewport_width,
            phase: RunPhase::Running,
            running: false,
            time_ticks: 0,
            speed,
            distance: 0.0,
            runner_x: speed.sqrt() * RUNNER_X_OFFSET_COEFFICIENT,
            since_render_ms: 0.0,
            bg1_offset: 0.0,
            bg2_offset: 0.0,
            shake_ms: SHAKE_START_MS,
            runner: Runner::default(),
            track,
        }
    }

    /// Begin (or resume) ticking; idempotent
    ///
    /// Only the render accumulator is reset, so a resume continues from
    /// where `stop` left off. The wall-clock anchor belongs to the driver.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.since_render_ms = 0.0;
            log::info!("session started");
        }
    }

    /// Halt future ticks without touching any other state; idempotent
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("session stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Re-initialize the session in place for a fresh run
    ///
    /// The RNG is re-seeded from the stored seed, so the regenerated track
    /// replays identically. The running flag is preserved.
    pub fn reset(&mut self) {
        let running = self.running;
        *self = Self::new(self.viewport_width, self.seed, self.config);
        self.running = running;
    }

    /// Jump input pressed (key-down edge)
    pub fn start_jump(&mut self) {
        let impulse = self.config.jump_impulse;
        self.runner.start_jump(impulse);
    }

    /// Jump input released (key-up edge)
    pub fn end_jump(&mut self) {
        self.runner.end_jump();
    }

    /// Re-arm the screen-shake countdown
    pub fn shake(&mut self, duration_ms: f32) {
        self.shake_ms = duration_ms;
    }
}
