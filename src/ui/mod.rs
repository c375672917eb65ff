pub mod game_common;

use crate::assets::Assets;
use crate::core::error::FlappyError;
use crate::game::{Game, GamePhase};
use crate::render::PlayfieldWidget;
use game_common::{create_game_layout, fit_playfield, render_status_bar};
use ratatui::{layout::Rect, style::Color, Frame};

/// Smallest terminal that still shows a readable playfield.
pub const MIN_TERMINAL_WIDTH: u16 = 30;
pub const MIN_TERMINAL_HEIGHT: u16 = 16;

const CONTROLS: [(&str, &str); 2] = [("[Space]", "Flap"), ("[Esc/q]", "Quit")];

/// Fail fast if the terminal can't host the playfield.
pub fn check_surface(size: Rect) -> Result<(), FlappyError> {
    if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
        return Err(FlappyError::SurfaceUnavailable {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

/// Draw the play screen: bordered playfield plus a status bar.
pub fn draw_ui(frame: &mut Frame, game: &Game, assets: &Assets, assets_pending: bool) {
    let layout = create_game_layout(frame, frame.size(), " Flappy Bird ", Color::Cyan, 10);

    frame.render_widget(
        PlayfieldWidget::new(game, assets),
        fit_playfield(layout.content),
    );

    let (status, status_color) = match game.phase {
        GamePhase::NotStarted if assets_pending => ("Loading sprites...".to_string(), Color::DarkGray),
        GamePhase::NotStarted => ("Press Space to start!".to_string(), Color::Yellow),
        GamePhase::Running => (format!("Score: {}", game.score), Color::Green),
        GamePhase::Over => (
            format!("Crashed with {} points. Space to fly again", game.score),
            Color::Red,
        ),
    };
    render_status_bar(frame, layout.status_bar, &status, status_color, &CONTROLS);
}
