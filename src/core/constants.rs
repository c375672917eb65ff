// Playfield (logical units, independent of terminal size)
pub const PLAYFIELD_WIDTH: f64 = 400.0;
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_START_Y: f64 = 200.0;
pub const BIRD_SIZE: f64 = 20.0;
pub const GRAVITY: f64 = 0.5;
pub const JUMP_VELOCITY: f64 = -8.0;

// Rotation smoothing, in degrees
pub const ROTATION_MIN_DEG: f64 = -30.0;
pub const ROTATION_MAX_DEG: f64 = 45.0;
pub const ROTATION_KEEP: f64 = 0.8;
pub const ROTATION_VELOCITY_FACTOR: f64 = 2.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const GAP_HEIGHT: f64 = 150.0;
pub const SCROLL_SPEED: f64 = 2.0;

// Scheduling
pub const SPAWN_INTERVAL_MS: u64 = 2000;
pub const FRAME_INTERVAL_MS: u64 = 16;

// Milestone celebration
pub const MILESTONE_SCORE: u32 = 10;
pub const PARTICLE_COUNT: usize = 20;
pub const PARTICLE_GRAVITY: f64 = 0.2;
pub const PARTICLE_UPWARD_BIAS: f64 = 3.0;
pub const PARTICLE_MIN_SPEED: f64 = 2.0;
pub const PARTICLE_MAX_SPEED: f64 = 6.0;
pub const PARTICLE_MIN_SIZE: f64 = 6.0;
pub const PARTICLE_MAX_SIZE: f64 = 12.0;
pub const PARTICLE_MAX_SPIN: f64 = 0.2;

// Files under ~/.flappy/
pub const CONFIG_FILENAME: &str = "config.json";
pub const LOG_FILENAME: &str = "flappy.log";
