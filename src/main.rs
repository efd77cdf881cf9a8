//! Headless demo: drives a session at the fixed tick cadence with a simple
//! autopilot standing in for keyboard input, and a console presenter
//! standing in for a real renderer.
//!
//! Usage: rooftop-run [config.json] [seed]

use std::env;
use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use rooftop_run::driver::Driver;
use rooftop_run::sim::RunPhase;
use rooftop_run::{Config, ConfigOverrides, GameState, RenderSink, RenderSnapshot};

/// Console presentation adapter: logs a status line once a second
struct ConsolePresenter {
    frames: u64,
    fps: u64,
}

impl RenderSink for ConsolePresenter {
    fn present(&mut self, snapshot: &RenderSnapshot) {
        self.frames += 1;
        if self.frames % self.fps == 0 {
            log::info!(
                "{} m | runner y={:.1} frame={} | {} buildings on screen",
                snapshot.distance_m,
                snapshot.runner_pos.y,
                snapshot.runner_frame % rooftop_run::consts::RUNNER_RUNNING_FRAME_COUNT,
                snapshot.buildings.len()
            );
        }
    }
}

/// Synthesize jump edges from read-only state: press near the far edge of
/// the rooftop underfoot, hold through the rise, release past the apex
fn autopilot(state: &mut GameState) {
    if state.runner.airborne {
        if state.runner.jump_held && state.runner.y_speed <= 0.0 {
            state.end_jump();
        }
        return;
    }

    let near_edge = state
        .runner
        .current_building
        .and_then(|id| state.track.get(id))
        .is_some_and(|b| b.right() - state.runner_x < state.speed * 150.0);
    if near_edge {
        state.start_jump();
    }
}

fn load_overrides(path: Option<&str>) -> ConfigOverrides {
    let Some(path) = path else {
        return ConfigOverrides::default();
    };
    match fs::read_to_string(path).map_err(|e| e.to_string()).and_then(|json| {
        serde_json::from_str::<ConfigOverrides>(&json).map_err(|e| e.to_string())
    }) {
        Ok(overrides) => {
            log::info!("loaded config overrides from {path}");
            overrides
        }
        Err(e) => {
            log::warn!("ignoring config file {path}: {e}");
            ConfigOverrides::default()
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Rooftop Run (headless demo) starting...");

    let args: Vec<String> = env::args().collect();
    let overrides = load_overrides(args.get(1).map(String::as_str));
    let config = Config::with_overrides(&overrides);

    let seed = args
        .get(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("seed: {seed}");

    let mut state = GameState::new(1280.0, seed, config);
    let mut presenter = ConsolePresenter {
        frames: 0,
        fps: (config.fps as u64).max(1),
    };

    state.start();
    let mut driver = Driver::new();
    driver.rearm();

    // Two minutes of play, or until the autopilot misses a gap
    let tick_cap = rooftop_run::consts::CYCLES_PER_SECOND as u64 * 120;
    while state.time_ticks < tick_cap {
        autopilot(&mut state);
        if let Some(snapshot) = driver.step(&mut state) {
            presenter.present(&snapshot);
        }
        if state.phase == RunPhase::Fallen {
            break;
        }
    }

    state.stop();
    let meters = rooftop_run::distance_to_meters(state.distance);
    match state.phase {
        RunPhase::Fallen => log::info!("run over: fell after {meters} m"),
        RunPhase::Running => log::info!("demo cap reached at {meters} m"),
    }
}
