//! Integration test: Game loop mechanics
//!
//! Drives the public game API the way the terminal host does: input, frame
//! ticks and spawn timer firings, checking physics, scoring, game over and
//! restart from the outside.

use flappy::core::constants::*;
use flappy::game::{
    on_spawn_timer, process_input, process_tick, Game, GameInput, GamePhase, InputOutcome,
    Obstacle,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Start a game and clear the first obstacle so tests can place their own.
fn started_game(rng: &mut ChaCha8Rng) -> Game {
    let mut game = Game::default();
    assert_eq!(
        process_input(&mut game, GameInput::Activate, rng),
        InputOutcome::Started
    );
    game.obstacles.clear();
    game
}

// =============================================================================
// Start and Physics
// =============================================================================

#[test]
fn test_start_then_one_frame() {
    let mut rng = rng();
    let mut game = Game::default();
    assert_eq!(game.phase, GamePhase::NotStarted);

    process_input(&mut game, GameInput::Activate, &mut rng);
    assert_eq!(game.phase, GamePhase::Running);
    assert_eq!(game.bird.y, 200.0);
    assert_eq!(game.bird.velocity, 0.0);

    process_tick(&mut game, &mut rng);
    assert!((game.bird.velocity - 0.5).abs() < f64::EPSILON);
    assert!((game.bird.y - 200.5).abs() < f64::EPSILON);

    assert_eq!(
        process_input(&mut game, GameInput::Activate, &mut rng),
        InputOutcome::Flapped
    );
    assert_eq!(game.bird.velocity, JUMP_VELOCITY);
}

#[test]
fn test_jump_overrides_accumulated_fall() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    for _ in 0..6 {
        process_tick(&mut game, &mut rng);
    }
    assert!((game.bird.velocity - 3.0).abs() < f64::EPSILON);

    process_input(&mut game, GameInput::Activate, &mut rng);
    assert_eq!(game.bird.velocity, -8.0);

    let y_before = game.bird.y;
    process_tick(&mut game, &mut rng);
    assert!((game.bird.velocity - -7.5).abs() < f64::EPSILON);
    assert!((game.bird.y - (y_before - 7.5)).abs() < 1e-9);
}

#[test]
fn test_first_obstacle_spawns_at_right_edge() {
    let mut rng = rng();
    let mut game = Game::default();
    process_input(&mut game, GameInput::Activate, &mut rng);

    assert_eq!(game.obstacles.len(), 1);
    let obstacle = &game.obstacles[0];
    assert_eq!(obstacle.x, PLAYFIELD_WIDTH);
    assert!(obstacle.gap_y >= 0.0);
    assert!(obstacle.gap_y < PLAYFIELD_HEIGHT - GAP_HEIGHT);
}

#[test]
fn test_other_keys_do_nothing() {
    let mut rng = rng();
    let mut game = Game::default();
    assert_eq!(
        process_input(&mut game, GameInput::Other, &mut rng),
        InputOutcome::Ignored
    );
    assert_eq!(game.phase, GamePhase::NotStarted);
}

#[test]
fn test_ticks_before_start_are_ignored() {
    let mut rng = rng();
    let mut game = Game::default();
    for _ in 0..10 {
        process_tick(&mut game, &mut rng);
    }
    assert_eq!(game.bird.y, BIRD_START_Y);
    assert_eq!(game.frame_count, 0);
}

// =============================================================================
// Obstacles, Scoring and Collision
// =============================================================================

#[test]
fn test_obstacle_scores_exactly_once() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    // Trailing edge at 51 before the move, 49 after; bird sits in the gap
    game.obstacles.push(Obstacle::new(1.0, 150.0));
    game.bird.y = 220.0;

    process_tick(&mut game, &mut rng);
    assert_eq!(game.score, 1);
    assert!(game.obstacles[0].passed);

    for _ in 0..5 {
        game.bird.velocity = 0.0;
        process_tick(&mut game, &mut rng);
    }
    assert_eq!(game.score, 1);
}

#[test]
fn test_bird_inside_gap_survives() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.obstacles.push(Obstacle::new(40.0, 150.0));
    game.bird.y = 220.0;

    let events = process_tick(&mut game, &mut rng);
    assert!(!events.collided);
    assert_eq!(game.phase, GamePhase::Running);
}

#[test]
fn test_bird_above_gap_collides() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    // Gap starts at 100; bird centered at 50 with radius 20
    game.obstacles.push(Obstacle::new(40.0, 100.0));
    game.bird.y = 50.0;
    game.bird.velocity = -0.5;

    let events = process_tick(&mut game, &mut rng);
    assert!(events.collided);
    assert!(events.game_over);
    assert_eq!(game.phase, GamePhase::Over);
}

#[test]
fn test_bird_below_gap_collides() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.obstacles.push(Obstacle::new(40.0, 100.0));
    game.bird.y = 260.0;

    process_tick(&mut game, &mut rng);
    assert!(game.is_over());
}

#[test]
fn test_out_of_bounds_ends_game() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.bird.y = 599.8;

    let events = process_tick(&mut game, &mut rng);
    assert!(events.out_of_bounds);
    assert!(game.is_over());
}

#[test]
fn test_out_of_bounds_and_collision_together() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.obstacles.push(Obstacle::new(40.0, 100.0));
    game.bird.y = 1.0;
    game.bird.velocity = -5.5;

    let events = process_tick(&mut game, &mut rng);
    assert!(events.out_of_bounds);
    assert!(events.collided);
    assert!(events.game_over);
    assert_eq!(game.phase, GamePhase::Over);

    // Nothing more happens once over
    let frames = game.frame_count;
    let events = process_tick(&mut game, &mut rng);
    assert!(!events.game_over);
    assert_eq!(game.frame_count, frames);
}

#[test]
fn test_offscreen_obstacle_culled() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    // -49 and -51 after the 2-unit scroll
    game.obstacles.push(Obstacle::new(-47.0, 0.0));
    game.obstacles.push(Obstacle::new(-49.0, 0.0));
    game.bird.y = 300.0;

    process_tick(&mut game, &mut rng);
    assert_eq!(game.obstacles.len(), 1);
    assert_eq!(game.obstacles[0].x, -49.0);
}

#[test]
fn test_obstacles_keep_spawn_order() {
    let mut rng = rng();
    let mut game = Game::default();
    process_input(&mut game, GameInput::Activate, &mut rng);
    assert!(on_spawn_timer(&mut game, &mut rng));
    assert!(on_spawn_timer(&mut game, &mut rng));

    process_tick(&mut game, &mut rng);
    assert_eq!(game.obstacles.len(), 3);
    for obstacle in &game.obstacles {
        assert_eq!(obstacle.x, PLAYFIELD_WIDTH - SCROLL_SPEED);
    }
}

// =============================================================================
// Spawn Timer
// =============================================================================

#[test]
fn test_spawn_timer_after_game_over_is_noop() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.bird.y = -10.0;
    process_tick(&mut game, &mut rng);
    assert!(game.is_over());

    assert!(!on_spawn_timer(&mut game, &mut rng));
    assert!(game.obstacles.is_empty());
}

// =============================================================================
// Milestone and Restart
// =============================================================================

#[test]
fn test_milestone_burst_fires_once() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.score = MILESTONE_SCORE - 1;
    game.obstacles.push(Obstacle::new(1.0, 150.0));
    game.bird.y = 220.0;

    let events = process_tick(&mut game, &mut rng);
    assert!(events.celebrated);
    assert_eq!(game.score, MILESTONE_SCORE);
    assert!(!game.particles.is_empty());
    assert!(game.particles.len() <= PARTICLE_COUNT);

    game.bird.velocity = 0.0;
    let events = process_tick(&mut game, &mut rng);
    assert!(!events.celebrated);
}

#[test]
fn test_particles_die_out() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.score = MILESTONE_SCORE - 1;
    game.obstacles.push(Obstacle::new(1.0, 150.0));
    game.bird.y = 220.0;
    process_tick(&mut game, &mut rng);

    // Hold the bird still so only the coins move
    for _ in 0..500 {
        game.bird.y = 220.0;
        game.bird.velocity = -0.5;
        process_tick(&mut game, &mut rng);
    }
    assert!(game.particles.is_empty());
    assert!(game.celebrated);
}

#[test]
fn test_restart_resets_and_resumes() {
    let mut rng = rng();
    let mut game = started_game(&mut rng);
    game.score = MILESTONE_SCORE;
    game.celebrated = true;
    game.bird.y = 700.0;
    process_tick(&mut game, &mut rng);
    assert!(game.is_over());

    assert_eq!(
        process_input(&mut game, GameInput::Activate, &mut rng),
        InputOutcome::Restarted
    );
    assert_eq!(game.phase, GamePhase::Running);
    assert_eq!(game.score, 0);
    assert!(!game.celebrated);
    assert_eq!(game.bird.y, BIRD_START_Y);
    assert_eq!(game.bird.velocity, 0.0);
    assert_eq!(game.obstacles.len(), 1);
    assert!(game.particles.is_empty());
    assert_eq!(game.games_played, 2);
}
