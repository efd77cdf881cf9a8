//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick cadence, elapsed time injected by the driver
//! - Seeded RNG only
//! - Stable track iteration order (oldest segment first)
//! - No rendering or platform dependencies

pub mod runner;
pub mod state;
pub mod tick;
pub mod track;

pub use runner::Runner;
pub use state::{GameState, RunPhase};
pub use tick::tick;
pub use track::{Building, BuildingPhase, Track};
