//! Flappy game core.
//!
//! A real-time action game where the player keeps a bird aloft by pressing
//! Space and threads it through the gaps of scrolling obstacles. Gravity pulls
//! the bird down every frame; touching an obstacle or leaving the playfield
//! ends the game. Reaching the milestone score fires a one-off coin burst.

pub mod logic;
pub mod particles;
pub mod types;

pub use logic::*;
pub use particles::Particle;
pub use types::*;
