//! Simulation runner built on the real game core and schedulers.
//!
//! Time is virtual: the clock advances one frame interval per step, so the
//! spawn timer and frame scheduler behave exactly as they do in the terminal
//! host, only faster.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::constants::PLAYFIELD_HEIGHT;
use crate::core::scheduler::{FrameScheduler, SpawnTimer};
use crate::game::{on_spawn_timer, process_input, process_tick, Game, GameInput, InputOutcome};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tracing::debug;

/// How far below the gap center the bird may sink before the autopilot flaps.
const AUTOPILOT_SLACK: f64 = 20.0;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);
        debug!(
            run = run_idx + 1,
            score = stats.score,
            frames = stats.frames,
            crashed = stats.crashed,
            "run finished"
        );
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

/// Play one game until it crashes or hits the frame cap.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = Game::new(config.game.clone());
    let step = Duration::from_millis(game.config.frame_interval_ms);
    let mut frames = FrameScheduler::new(game.config.frame_interval_ms);
    let mut spawner = SpawnTimer::new(game.config.spawn_interval_ms);

    let mut now = Instant::now();
    if process_input(&mut game, GameInput::Activate, rng) == InputOutcome::Started {
        frames.request(now);
        spawner.arm(now);
    }

    let mut flaps = 0u32;
    while !game.is_over() && game.frame_count < config.max_frames_per_run {
        now += step;

        if spawner.poll(now) && on_spawn_timer(&mut game, rng) {
            spawner.arm(now);
        }

        if frames.poll(now) {
            if autopilot_should_flap(&game) {
                process_input(&mut game, GameInput::Activate, rng);
                flaps += 1;
            }
            process_tick(&mut game, rng);
        }
    }

    RunStats {
        score: game.score,
        frames: game.frame_count,
        flaps,
        crashed: game.is_over(),
        reached_milestone: game.celebrated,
    }
}

/// Flap when the bird has sunk below the center of the next gap it has to
/// clear and is still falling. With no obstacle ahead, hold mid-height.
pub fn autopilot_should_flap(game: &Game) -> bool {
    let bird = &game.bird;
    let target = game
        .obstacles
        .iter()
        .find(|obstacle| obstacle.trailing_edge() >= bird.left())
        .map(|obstacle| obstacle.gap_y + game.config.gap_height / 2.0)
        .unwrap_or(PLAYFIELD_HEIGHT / 2.0);

    bird.velocity >= 0.0 && bird.y > target + AUTOPILOT_SLACK
}
