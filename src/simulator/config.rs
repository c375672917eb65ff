//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per game before giving up on a crash
    pub max_frames_per_run: u64,

    /// Tunables for the simulated games
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_frames_per_run: 10_000,
            game: GameConfig::default(),
        }
    }
}
