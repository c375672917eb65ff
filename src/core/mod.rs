//! Constants, configuration, errors and scheduling shared by the game and its hosts.

pub mod config;
pub mod constants;
pub mod error;
pub mod scheduler;

pub use config::GameConfig;
pub use constants::*;
pub use error::FlappyError;
pub use scheduler::{FrameScheduler, SpawnTimer};
