//! Game logic: input, the per-frame tick, and the spawn timer handler.

use super::particles::{spawn_burst, update_particles};
use super::types::{Bird, Game, GamePhase, Obstacle};
use crate::core::config::GameConfig;
use crate::core::constants::*;
use rand::Rng;
use tracing::{debug, info};

/// The single logical action the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Space: start, flap, or restart depending on phase.
    Activate,
    /// Any other key.
    Other,
}

/// What an input did, so the host knows when to (re)arm its timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Ignored,
    /// NotStarted -> Running. Arm the frame loop and spawn timer.
    Started,
    Flapped,
    /// Over -> fully reset -> Running. Re-arm the spawn timer.
    Restarted,
}

/// Everything that happened during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Obstacles passed this frame.
    pub scored: u32,
    /// Bird overlapped an obstacle outside its gap.
    pub collided: bool,
    /// Bird left the playfield vertically.
    pub out_of_bounds: bool,
    /// The milestone burst fired this frame.
    pub celebrated: bool,
    /// Running -> Over happened this frame.
    pub game_over: bool,
}

/// Process player input.
pub fn process_input<R: Rng>(game: &mut Game, input: GameInput, rng: &mut R) -> InputOutcome {
    if input != GameInput::Activate {
        return InputOutcome::Ignored;
    }

    match game.phase {
        GamePhase::NotStarted => {
            start(game, rng);
            InputOutcome::Started
        }
        GamePhase::Running => {
            flap(&mut game.bird, &game.config);
            debug!(y = game.bird.y, "flap");
            InputOutcome::Flapped
        }
        GamePhase::Over => {
            restart(game, rng);
            InputOutcome::Restarted
        }
    }
}

/// Begin a game: go live and drop in the first obstacle right away.
pub fn start<R: Rng>(game: &mut Game, rng: &mut R) {
    game.phase = GamePhase::Running;
    game.games_played += 1;
    game.spawn_obstacle(rng);
    info!(game = game.games_played, "game started");
}

/// Reset every entity in place and resume play immediately.
pub fn restart<R: Rng>(game: &mut Game, rng: &mut R) {
    info!(previous_score = game.score, "restarting");
    game.reset();
    start(game, rng);
}

/// Jump impulse. Overwrites the velocity rather than adding to it.
pub fn flap(bird: &mut Bird, config: &GameConfig) {
    bird.velocity = config.jump_velocity;
}

/// Process one frame: physics, obstacles, collision and scoring, then the
/// coin burst. Does nothing unless the game is running.
///
/// The whole frame is evaluated even if the bird crashes part way through;
/// the phase flips to `Over` once at the end.
pub fn process_tick<R: Rng>(game: &mut Game, rng: &mut R) -> TickEvents {
    let mut events = TickEvents::default();
    if !game.is_running() {
        return events;
    }

    game.frame_count += 1;

    step_bird(&mut game.bird, &game.config);
    events.out_of_bounds = is_out_of_bounds(&game.bird);

    scroll_obstacles(&mut game.obstacles, game.config.scroll_speed);
    events.collided = game
        .obstacles
        .iter()
        .any(|obstacle| check_collision(&game.bird, obstacle, game.config.gap_height));
    events.scored = score_passed(&mut game.obstacles, &game.bird);
    game.score += events.scored;
    if events.scored > 0 {
        debug!(score = game.score, "obstacle passed");
    }
    cull_obstacles(&mut game.obstacles);

    events.celebrated = maybe_celebrate(game, rng);
    update_particles(&mut game.particles);

    if events.collided || events.out_of_bounds {
        game.phase = GamePhase::Over;
        events.game_over = true;
        info!(
            score = game.score,
            frames = game.frame_count,
            collided = events.collided,
            out_of_bounds = events.out_of_bounds,
            "game over"
        );
    }

    events
}

/// Spawn timer fired. Spawns only if the game is still running; returns
/// whether the host should arm the timer again.
pub fn on_spawn_timer<R: Rng>(game: &mut Game, rng: &mut R) -> bool {
    if !game.is_running() {
        return false;
    }
    game.spawn_obstacle(rng);
    if let Some(obstacle) = game.obstacles.last() {
        debug!(gap_y = obstacle.gap_y, live = game.obstacles.len(), "obstacle spawned");
    }
    true
}

/// Gravity, then position, then the cosmetic tilt.
pub fn step_bird(bird: &mut Bird, config: &GameConfig) {
    bird.velocity += config.gravity;
    bird.y += bird.velocity;

    let target = bird.velocity * ROTATION_VELOCITY_FACTOR;
    bird.rotation = (bird.rotation * ROTATION_KEEP + target * (1.0 - ROTATION_KEEP))
        .clamp(ROTATION_MIN_DEG, ROTATION_MAX_DEG);
}

/// Above the top edge or below the bottom edge.
pub fn is_out_of_bounds(bird: &Bird) -> bool {
    bird.y < 0.0 || bird.y > PLAYFIELD_HEIGHT
}

pub fn scroll_obstacles(obstacles: &mut [Obstacle], speed: f64) {
    for obstacle in obstacles {
        obstacle.x -= speed;
    }
}

/// Horizontal overlap with the obstacle and the bird pokes out of the gap,
/// above or below.
pub fn check_collision(bird: &Bird, obstacle: &Obstacle, gap_height: f64) -> bool {
    let overlaps_x = bird.right() > obstacle.x && bird.left() < obstacle.trailing_edge();
    let outside_gap = bird.top() < obstacle.gap_y || bird.bottom() > obstacle.gap_y + gap_height;
    overlaps_x && outside_gap
}

/// Mark obstacles whose trailing edge is behind the bird. Returns how many
/// were newly passed; each obstacle counts once.
pub fn score_passed(obstacles: &mut [Obstacle], bird: &Bird) -> u32 {
    let mut passed = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.passed && obstacle.trailing_edge() < bird.x {
            obstacle.passed = true;
            passed += 1;
        }
    }
    passed
}

/// Drop obstacles that scrolled fully off the left edge.
pub fn cull_obstacles(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain(|obstacle| !obstacle.is_off_screen());
}

/// Fire the coin burst the first time the milestone score is reached in
/// this game. Returns true on the frame it fires.
pub fn maybe_celebrate<R: Rng>(game: &mut Game, rng: &mut R) -> bool {
    if game.celebrated || game.score != game.config.milestone_score {
        return false;
    }
    game.celebrated = true;
    game.particles
        .extend(spawn_burst(rng, game.config.particle_count));
    info!(score = game.score, "milestone reached");
    true
}
