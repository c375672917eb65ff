//! Flappy - Terminal Flappy Bird Library
//!
//! This module exposes the game core, renderer and simulator for testing and
//! for the `flappy` binary.

pub mod assets;
pub mod core;
pub mod game;
pub mod input;
pub mod render;
pub mod simulator;
pub mod ui;
pub mod utils;

pub use crate::core::{FlappyError, FrameScheduler, GameConfig, SpawnTimer};
pub use assets::{AssetLoader, Assets, Image};
pub use game::{
    on_spawn_timer, process_input, process_tick, Bird, Game, GameInput, GamePhase, InputOutcome,
    Obstacle, Particle, TickEvents,
};
pub use render::{render_game, DrawCall, RecordingSurface, Surface};
