//! Runner jump state machine and vertical physics

use serde::{Deserialize, Serialize};

/// The player-controlled figure
///
/// Horizontal position is derived from track speed each tick and lives on
/// `GameState`; the runner itself only owns vertical motion, the jump flags
/// and the run-cycle animation counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runner {
    /// Vertical offset above ground level
    pub y: f32,
    /// Vertical velocity (positive = rising)
    pub y_speed: f32,
    /// Vertical physics applies while set
    pub airborne: bool,
    /// Jump input currently held (set on press, cleared on release)
    pub jump_held: bool,
    /// Run-cycle frame counter; the presenter wraps it modulo the frame count
    pub run_frame: u32,
    /// Distance accumulated toward the next frame advance
    pub run_frame_distance: f32,
    /// Id of the building currently underfoot, if any
    pub current_building: Option<u32>,
    /// Whether any building has ever been underfoot (a landing with no
    /// support before the first building arrives is not a loss)
    pub was_supported: bool,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            y: 0.0,
            y_speed: 0.0,
            airborne: false,
            jump_held: false,
            run_frame: 0,
            run_frame_distance: 0.0,
            current_building: None,
            was_supported: false,
        }
    }
}

impl Runner {
    /// Begin a jump on a key-down edge
    ///
    /// No-op while already airborne (including falling off a ledge) or while
    /// the jump input is still held, so repeated presses are idempotent.
    pub fn start_jump(&mut self, jump_impulse: f32) {
        if !self.airborne && !self.jump_held {
            self.airborne = true;
            self.jump_held = true;
            self.y_speed = jump_impulse;
        }
    }

    /// End a jump on a key-up edge
    ///
    /// Releasing while still rising zeroes the vertical speed, cutting the
    /// jump short. The held flag is cleared even if the airborne phase
    /// already ended, so a stale press cannot block the next jump.
    pub fn end_jump(&mut self) {
        if self.airborne && self.jump_held {
            self.jump_held = false;
            if self.y_speed > 0.0 {
                self.y_speed = 0.0;
            }
        } else if self.jump_held {
            self.jump_held = false;
        }
    }

    /// One tick of vertical physics against the given support height
    ///
    /// Only applies while airborne. Gravity is unconditional once in the
    /// air; the held flag only shapes the impulse and early cutoff. Returns
    /// true when this step landed the runner.
    pub fn fall_step(&mut self, support_height: f32, gravity: f32) -> bool {
        if !self.airborne {
            return false;
        }

        self.y += self.y_speed;
        self.y_speed -= gravity;

        if self.y <= support_height {
            self.y = support_height;
            self.y_speed = 0.0;
            self.airborne = false;
            return true;
        }
        false
    }
}
