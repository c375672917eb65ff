//! Per-frame drawing of the game state.

use super::{Font, RectF, Rgb, Surface, TextAlign, Transform, Vec2};
use crate::assets::Assets;
use crate::core::constants::*;
use crate::game::{Bird, Game, GamePhase, Obstacle, Particle};

const SCORE_POS: Vec2 = Vec2 { x: 10.0, y: 30.0 };
const MESSAGE_Y: f64 = 300.0;
const PROMPT_Y: f64 = 350.0;

/// Draw the whole frame: clear, bird, obstacles, coins, score, then any
/// phase message. Takes the game by shared reference; rendering never
/// changes state.
pub fn render_game<S: Surface + ?Sized>(game: &Game, assets: &Assets, surface: &mut S) {
    surface.clear();
    draw_bird(&game.bird, assets, surface);
    for obstacle in &game.obstacles {
        draw_obstacle(obstacle, game.config.gap_height, assets, surface);
    }
    for particle in &game.particles {
        draw_particle(particle, surface);
    }
    surface.fill_text(
        &format!("Score: {}", game.score),
        SCORE_POS,
        Font::regular(24.0),
        TextAlign::Left,
        Rgb::TEXT,
    );

    let center_x = PLAYFIELD_WIDTH / 2.0;
    match game.phase {
        GamePhase::NotStarted => {
            surface.fill_text(
                "Press Space to Start",
                Vec2::new(center_x, MESSAGE_Y),
                Font::bold(24.0),
                TextAlign::Center,
                Rgb::TEXT,
            );
        }
        GamePhase::Running => {}
        GamePhase::Over => {
            surface.fill_text(
                "Game Over!",
                Vec2::new(center_x, MESSAGE_Y),
                Font::bold(48.0),
                TextAlign::Center,
                Rgb::TEXT,
            );
            surface.fill_text(
                "Press Space to Restart",
                Vec2::new(center_x, PROMPT_Y),
                Font::regular(24.0),
                TextAlign::Center,
                Rgb::TEXT,
            );
        }
    }
}

/// Sprite tilted by the smoothed rotation once loaded, plain gold disc
/// before that.
fn draw_bird<S: Surface + ?Sized>(bird: &Bird, assets: &Assets, surface: &mut S) {
    let center = Vec2::new(bird.x, bird.y);
    if assets.bird.is_empty() {
        surface.fill_circle(center, bird.size, Rgb::GOLD);
    } else {
        surface.draw_image(
            &assets.bird,
            RectF::centered(center, bird.size),
            Transform::rotated(bird.rotation.to_radians()),
        );
    }
}

/// Top segment `[0, gap_y]`, bottom segment `[gap_y + gap_height, bottom]`.
/// The sprite is laid over each segment, flipped for the top one.
fn draw_obstacle<S: Surface + ?Sized>(
    obstacle: &Obstacle,
    gap_height: f64,
    assets: &Assets,
    surface: &mut S,
) {
    let gap_bottom = obstacle.gap_y + gap_height;
    let top = RectF::new(obstacle.x, 0.0, OBSTACLE_WIDTH, obstacle.gap_y);
    let bottom = RectF::new(
        obstacle.x,
        gap_bottom,
        OBSTACLE_WIDTH,
        PLAYFIELD_HEIGHT - gap_bottom,
    );

    surface.fill_rect(top, Rgb::PIPE);
    surface.fill_rect(bottom, Rgb::PIPE);
    surface.draw_image(&assets.obstacle, top, Transform::rotated(std::f64::consts::PI));
    surface.draw_image(&assets.obstacle, bottom, Transform::IDENTITY);
}

/// A spinning coin, drawn narrower as it turns edge-on.
fn draw_particle<S: Surface + ?Sized>(particle: &Particle, surface: &mut S) {
    let radius = particle.size / 2.0;
    let face = particle.rotation.cos().abs().max(0.3);
    let center = Vec2::new(particle.x, particle.y);
    surface.fill_circle(center, radius, Rgb::COIN_EDGE);
    surface.fill_circle(center, radius * face * 0.7, Rgb::GOLD);
}
