//! Headless simulator.
//!
//! Plays whole games with the real game core, a virtual clock and an
//! autopilot in place of the player. Useful for checking that tuning changes
//! in `config.json` still produce a beatable game.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{autopilot_should_flap, run_simulation, simulate_single_run};
