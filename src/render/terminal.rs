//! Rasterizes the playfield into a ratatui buffer.
//!
//! Each terminal cell stands for a block of playfield units. A shape covers a
//! cell when the cell's center falls inside it; shapes smaller than a cell
//! still mark the cell under their center so coins never vanish.

use super::{render_game, Font, RectF, Rgb, Surface, TextAlign, Transform, Vec2};
use crate::assets::{Assets, Image};
use crate::core::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::game::Game;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

const FILL: &str = "█";
const DOT: &str = "●";

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub struct TerminalSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    fn units_per_col(&self) -> f64 {
        PLAYFIELD_WIDTH / self.area.width as f64
    }

    fn units_per_row(&self) -> f64 {
        PLAYFIELD_HEIGHT / self.area.height as f64
    }

    /// Cell containing a playfield point, if it's on screen.
    fn cell_at(&self, p: Vec2) -> Option<(u16, u16)> {
        if self.area.width == 0 || self.area.height == 0 {
            return None;
        }
        let col = (p.x / self.units_per_col()).floor();
        let row = (p.y / self.units_per_row()).floor();
        if col < 0.0 || row < 0.0 || col >= self.area.width as f64 || row >= self.area.height as f64 {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    /// Playfield point at the center of a cell.
    fn cell_center(&self, x: u16, y: u16) -> Vec2 {
        Vec2::new(
            ((x - self.area.x) as f64 + 0.5) * self.units_per_col(),
            ((y - self.area.y) as f64 + 0.5) * self.units_per_row(),
        )
    }

    /// Cells whose centers may fall inside the playfield-space box, clipped
    /// to the drawing area.
    fn cells_in(&self, min: Vec2, max: Vec2) -> impl Iterator<Item = (u16, u16)> {
        let clamp_col = |x: f64| -> u16 {
            (x / self.units_per_col())
                .floor()
                .clamp(0.0, self.area.width as f64) as u16
        };
        let clamp_row = |y: f64| -> u16 {
            (y / self.units_per_row())
                .floor()
                .clamp(0.0, self.area.height as f64) as u16
        };
        let (x0, x1) = (clamp_col(min.x), clamp_col(max.x).saturating_add(1).min(self.area.width));
        let (y0, y1) = (clamp_row(min.y), clamp_row(max.y).saturating_add(1).min(self.area.height));
        let (ax, ay) = (self.area.x, self.area.y);
        (y0..y1).flat_map(move |row| (x0..x1).map(move |col| (ax + col, ay + row)))
    }

    fn paint(&mut self, x: u16, y: u16, symbol: &str, rgb: Rgb) {
        self.buf.get_mut(x, y).set_symbol(symbol).set_fg(color(rgb));
    }
}

impl Surface for TerminalSurface<'_> {
    fn clear(&mut self) {
        for y in self.area.top()..self.area.bottom() {
            for x in self.area.left()..self.area.right() {
                self.buf.get_mut(x, y).reset();
                self.buf.get_mut(x, y).set_bg(color(Rgb::SKY));
            }
        }
    }

    fn fill_rect(&mut self, rect: RectF, rgb: Rgb) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let cells: Vec<_> = self
            .cells_in(Vec2::new(rect.x, rect.y), Vec2::new(rect.x + rect.w, rect.y + rect.h))
            .filter(|&(x, y)| rect.contains(self.cell_center(x, y)))
            .collect();
        for (x, y) in cells {
            self.paint(x, y, FILL, rgb);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, rgb: Rgb) {
        let min = Vec2::new(center.x - radius, center.y - radius);
        let max = Vec2::new(center.x + radius, center.y + radius);
        let cells: Vec<_> = self
            .cells_in(min, max)
            .filter(|&(x, y)| {
                let p = self.cell_center(x, y);
                (p.x - center.x).powi(2) + (p.y - center.y).powi(2) <= radius * radius
            })
            .collect();

        if cells.is_empty() {
            if let Some((x, y)) = self.cell_at(center) {
                self.paint(x, y, DOT, rgb);
            }
            return;
        }
        for (x, y) in cells {
            self.paint(x, y, FILL, rgb);
        }
    }

    fn draw_image(&mut self, image: &Image, dest: RectF, transform: Transform) {
        if image.is_empty() || dest.w <= 0.0 || dest.h <= 0.0 || transform.scale == 0.0 {
            return;
        }

        let center = dest.center();
        // Any rotation stays inside the circle through the scaled corners.
        let reach = (dest.w.hypot(dest.h) / 2.0) * transform.scale.abs();
        let (sin, cos) = (-transform.rotation).sin_cos();

        let hits: Vec<_> = self
            .cells_in(
                Vec2::new(center.x - reach, center.y - reach),
                Vec2::new(center.x + reach, center.y + reach),
            )
            .filter_map(|(x, y)| {
                // Map the cell back into unrotated, unscaled image space.
                let p = self.cell_center(x, y);
                let (dx, dy) = ((p.x - center.x) / transform.scale, (p.y - center.y) / transform.scale);
                let local_x = dx * cos - dy * sin + dest.w / 2.0;
                let local_y = dx * sin + dy * cos + dest.h / 2.0;
                if local_x < 0.0 || local_y < 0.0 || local_x >= dest.w || local_y >= dest.h {
                    return None;
                }
                let u = (local_x / dest.w * image.width() as f64) as usize;
                let v = (local_y / dest.h * image.height() as f64) as usize;
                image.pixel(u, v).map(|rgb| (x, y, rgb))
            })
            .collect();

        for (x, y, rgb) in hits {
            self.paint(x, y, FILL, rgb);
        }
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, align: TextAlign, rgb: Rgb) {
        // `at` is a baseline; lift it to roughly the middle of the glyphs.
        let Some((anchor_x, y)) = self.cell_at(Vec2::new(
            at.x.clamp(0.0, PLAYFIELD_WIDTH - 0.001),
            at.y - font.size * 0.35,
        )) else {
            return;
        };

        let len = text.chars().count() as i32;
        let start = match align {
            TextAlign::Left => anchor_x as i32,
            TextAlign::Center => anchor_x as i32 - len / 2,
            TextAlign::Right => anchor_x as i32 - len,
        };

        let mut style = Style::default().fg(color(rgb));
        if font.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        for (i, ch) in text.chars().enumerate() {
            let x = start + i as i32;
            if x < self.area.left() as i32 || x >= self.area.right() as i32 {
                continue;
            }
            self.buf.get_mut(x as u16, y).set_char(ch).set_style(style);
        }
    }
}

/// Draws one frame of the game into whatever area it is given.
pub struct PlayfieldWidget<'a> {
    game: &'a Game,
    assets: &'a Assets,
}

impl<'a> PlayfieldWidget<'a> {
    pub fn new(game: &'a Game, assets: &'a Assets) -> Self {
        Self { game, assets }
    }
}

impl Widget for PlayfieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let mut surface = TerminalSurface::new(buf, area);
        render_game(self.game, self.assets, &mut surface);
    }
}
