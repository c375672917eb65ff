//! Coin burst shown when the player reaches the milestone score.
//!
//! Coins are simple projectiles: no collision, no interaction with the bird
//! or obstacles. Once a coin leaves the playfield it is dropped for good.

use crate::core::constants::*;
use rand::Rng;
use std::f64::consts::TAU;

/// A single coin.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Coin diameter.
    pub size: f64,
    /// Radians.
    pub rotation: f64,
    /// Radians per frame.
    pub spin: f64,
}

impl Particle {
    /// A coin at `(x, y)` flying off at a random angle and speed, biased
    /// upward so the burst fountains before falling.
    pub fn random<R: Rng>(rng: &mut R, x: f64, y: f64) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(PARTICLE_MIN_SPEED..PARTICLE_MAX_SPEED);
        Self {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed - PARTICLE_UPWARD_BIAS,
            size: rng.gen_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            rotation: 0.0,
            spin: rng.gen_range(-PARTICLE_MAX_SPIN..PARTICLE_MAX_SPIN),
        }
    }

    /// Advance one frame. Returns false once the coin has left the playfield.
    pub fn tick(&mut self) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
        self.rotation += self.spin;
        self.is_visible()
    }

    /// Coins may fly above the top edge and fall back in; only the bottom and
    /// side edges are exits.
    pub fn is_visible(&self) -> bool {
        self.y <= PLAYFIELD_HEIGHT && self.x >= 0.0 && self.x <= PLAYFIELD_WIDTH
    }
}

/// `count` coins at the center of the playfield.
pub fn spawn_burst<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    let cx = PLAYFIELD_WIDTH / 2.0;
    let cy = PLAYFIELD_HEIGHT / 2.0;
    (0..count).map(|_| Particle::random(rng, cx, cy)).collect()
}

/// Step every coin and drop the ones that left the playfield.
pub fn update_particles(particles: &mut Vec<Particle>) {
    particles.retain_mut(|particle| particle.tick());
}
