//! Wall-clock driver for the fixed tick cadence
//!
//! The driver is the only component that reads a clock. It paces `tick()`
//! at the fixed simulation cadence and feeds each tick the measured elapsed
//! milliseconds, keeping the simulation itself deterministic and testable
//! with synthetic time.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::TICK_INTERVAL_MS;
use crate::render::RenderSnapshot;
use crate::sim::{GameState, tick};

/// Paces ticks at [`crate::consts::CYCLES_PER_SECOND`]
#[derive(Debug)]
pub struct Driver {
    tick_interval: Duration,
    last_tick: Instant,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            tick_interval: Duration::from_secs_f32(TICK_INTERVAL_MS / 1000.0),
            last_tick: Instant::now(),
        }
    }

    /// Re-anchor the clock, e.g. after a stopped session resumes
    ///
    /// Without this, the first tick after a long pause would observe the
    /// whole pause as elapsed time and teleport the world forward.
    pub fn rearm(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Sleep to the next cadence boundary, then run one tick
    pub fn step(&mut self, state: &mut GameState) -> Option<RenderSnapshot> {
        let due = self.last_tick + self.tick_interval;
        let now = Instant::now();
        if due > now {
            thread::sleep(due - now);
        }
        let now = Instant::now();
        let elapsed_ms = (now - self.last_tick).as_secs_f32() * 1000.0;
        self.last_tick = now;
        tick(state, elapsed_ms)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
