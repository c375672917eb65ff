//! Flappy data structures.
//!
//! Everything lives in one owned `Game` value: the host mutates it through
//! `logic` once per frame or timer firing, and the renderer only borrows it.

use super::particles::Particle;
use crate::core::config::GameConfig;
use crate::core::constants::*;
use rand::Rng;

/// Where the game is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for the first Space press. Nothing moves.
    NotStarted,
    /// Physics, spawning and collision are live.
    Running,
    /// Crashed. Frozen until the player restarts.
    Over,
}

/// The player. Horizontal position never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    /// Center of the bird. 0 = top of the playfield, grows downward.
    pub y: f64,
    /// Units per frame, positive = falling.
    pub velocity: f64,
    /// Collision radius.
    pub size: f64,
    /// Smoothed visual tilt in degrees. Never read by physics or collision.
    pub rotation: f64,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            size: BIRD_SIZE,
            rotation: 0.0,
        }
    }

    pub fn top(&self) -> f64 {
        self.y - self.size
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.size
    }

    pub fn left(&self) -> f64 {
        self.x - self.size
    }

    pub fn right(&self) -> f64 {
        self.x + self.size
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A top/bottom pipe pair with a gap between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge (float for smooth scrolling).
    pub x: f64,
    /// Top of the gap. Fixed at spawn.
    pub gap_y: f64,
    /// Whether the bird has cleared this obstacle (scored at most once).
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, gap_y: f64) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
        }
    }

    /// Right edge; once this is behind the bird the obstacle counts as passed.
    pub fn trailing_edge(&self) -> f64 {
        self.x + OBSTACLE_WIDTH
    }

    /// Fully scrolled off the left side of the playfield.
    pub fn is_off_screen(&self) -> bool {
        self.x < -OBSTACLE_WIDTH
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub phase: GamePhase,

    pub bird: Bird,
    /// Spawn order; new obstacles are appended at the tail.
    pub obstacles: Vec<Obstacle>,
    /// Celebration coins; empty except shortly after the milestone.
    pub particles: Vec<Particle>,

    pub score: u32,
    /// Latched once the milestone burst has fired in this game.
    pub celebrated: bool,

    /// Physics frames run in this game.
    pub frame_count: u64,
    /// Games started since launch, including the current one.
    pub games_played: u32,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phase: GamePhase::NotStarted,
            bird: Bird::new(),
            obstacles: Vec::new(),
            particles: Vec::new(),
            score: 0,
            celebrated: false,
            frame_count: 0,
            games_played: 0,
        }
    }

    /// Put every entity back to its start-of-game value. Launch counters
    /// (`games_played`) survive.
    pub fn reset(&mut self) {
        self.phase = GamePhase::NotStarted;
        self.bird = Bird::new();
        self.obstacles.clear();
        self.particles.clear();
        self.score = 0;
        self.celebrated = false;
        self.frame_count = 0;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Append an obstacle at the right edge with a uniformly random gap in
    /// `[0, PLAYFIELD_HEIGHT - gap_height)`.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let max_gap_y = PLAYFIELD_HEIGHT - self.config.gap_height;
        let gap_y = rng.gen_range(0.0..max_gap_y);
        self.obstacles.push(Obstacle::new(PLAYFIELD_WIDTH, gap_y));
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
