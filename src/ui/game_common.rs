//! Shared layout pieces for the play screen.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Area the playfield is fitted into, inside the outer border
    pub content: Rect,
    /// Status bar area (2 lines) under the content
    pub status_bar: Rect,
}

/// Outer border with a title, content on top and a 2-line status bar below.
///
/// ```text
/// ┌─ Title ─────────────────┐
/// │                         │
/// │   [content area]        │
/// │                         │
/// │ [status bar - 2 lines]  │
/// └─────────────────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(inner);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
    }
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Flap")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Largest rect inside `area` with the playfield's proportions, centered.
///
/// Terminal cells are about twice as tall as they are wide, so a 2:3
/// playfield needs 4 columns for every 3 rows.
pub fn fit_playfield(area: Rect) -> Rect {
    let by_height = (area.height as u32 * 4 / 3) as u16;
    let (width, height) = if by_height <= area.width {
        (by_height, area.height)
    } else {
        (area.width, (area.width as u32 * 3 / 4) as u16)
    };

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_playfield_height_bound() {
        let fitted = fit_playfield(Rect::new(0, 0, 100, 30));
        assert_eq!(fitted.height, 30);
        assert_eq!(fitted.width, 40);
        assert_eq!(fitted.x, 30);
    }

    #[test]
    fn test_fit_playfield_width_bound() {
        let fitted = fit_playfield(Rect::new(2, 1, 20, 40));
        assert_eq!(fitted.width, 20);
        assert_eq!(fitted.height, 15);
        assert_eq!(fitted.x, 2);
        assert_eq!(fitted.y, 1 + 12);
    }
}
