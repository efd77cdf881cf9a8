//! Fixed-cadence simulation tick
//!
//! One tick advances distance and speed, steps the runner's vertical
//! physics, scrolls and recycles the track, and, at the lower configured
//! frame cadence, emits a render snapshot. The elapsed time is injected by
//! the driver; nothing here reads a wall clock.

use super::state::{GameState, RunPhase};
use crate::consts::*;
use crate::render::RenderSnapshot;

/// Advance the simulation by one tick of `elapsed_ms` wall time
///
/// Returns a snapshot when the render accumulator crosses the configured
/// frame interval; the caller hands it to the presentation adapter. Ticks on
/// a stopped session are ignored. Zero or negative elapsed time produces
/// zero movement.
pub fn tick(state: &mut GameState, elapsed_ms: f32) -> Option<RenderSnapshot> {
    if !state.running {
        return None;
    }
    let elapsed = elapsed_ms.max(0.0);
    state.time_ticks += 1;

    // Distance covered this tick, in whole units
    let distance = (elapsed * state.speed).round();
    state.distance += distance;
    state.runner.run_frame_distance += distance;

    // Speed grows every tick, uncapped
    state.speed += state.config.acceleration;

    // Runner depth on screen is a pure function of speed
    state.runner_x = state.speed.sqrt() * RUNNER_X_OFFSET_COEFFICIENT;

    // Vertical physics against the current support height. The landing check
    // is a height comparison only; which height counts is decided by the
    // track's underfoot bookkeeping below.
    let support = state
        .runner
        .current_building
        .and_then(|id| state.track.height_of(id))
        .unwrap_or(0.0);
    let landed = state.runner.fall_step(support, state.config.gravity);
    if landed
        && state.runner.current_building.is_none()
        && state.runner.was_supported
        && state.phase == RunPhase::Running
    {
        state.phase = RunPhase::Fallen;
        log::info!(
            "runner fell at {} m (tick {})",
            crate::distance_to_meters(state.distance),
            state.time_ticks
        );
    }

    state
        .track
        .advance(distance, state.runner_x, &mut state.runner, &mut state.rng);

    // Parallax layers advance at tick rate, sampled at render rate
    state.bg1_offset -= distance * PARALLAX_BG1_SPEED;
    state.bg2_offset -= distance * PARALLAX_BG2_SPEED;

    if state.shake_ms > 0.0 {
        state.shake_ms = (state.shake_ms - elapsed).max(0.0);
    }

    // Run-cycle frame advance is tied to distance, not render cadence
    if state.runner.run_frame_distance > RUNNER_FRAME_CHANGE_DISTANCE {
        state.runner.run_frame_distance = 0.0;
        state.runner.run_frame += 1;
    }

    state.since_render_ms += elapsed;
    if state.since_render_ms > state.config.render_interval_ms() {
        state.since_render_ms = 0.0;
        return Some(RenderSnapshot::capture(state));
    }
    None
}
