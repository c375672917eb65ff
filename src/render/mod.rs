//! Drawing-surface abstraction.
//!
//! The renderer only ever talks to a `Surface`. Coordinates are playfield
//! units (400x600, origin top-left); each surface maps them to whatever it
//! draws on.

pub mod recording;
pub mod renderer;
pub mod terminal;

pub use recording::{DrawCall, RecordingSurface};
pub use renderer::render_game;
pub use terminal::{PlayfieldWidget, TerminalSurface};

use crate::assets::Image;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const SKY: Rgb = Rgb(112, 197, 206);
    pub const GOLD: Rgb = Rgb(255, 215, 0);
    pub const COIN_EDGE: Rgb = Rgb(218, 165, 32);
    pub const PIPE: Rgb = Rgb(46, 204, 113);
    pub const TEXT: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BEAK: Rgb = Rgb(225, 75, 35);
    pub const PIPE_DARK: Rgb = Rgb(30, 132, 73);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl RectF {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `2 * half` centered on `center`.
    pub fn centered(center: Vec2, half: f64) -> Self {
        Self::new(center.x - half, center.y - half, half * 2.0, half * 2.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }
}

/// Rotation and uniform scale applied about the destination center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Radians, clockwise on screen.
    pub rotation: f64,
    pub scale: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        rotation: 0.0,
        scale: 1.0,
    };

    pub fn rotated(radians: f64) -> Self {
        Self {
            rotation: radians,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    /// Nominal pixel size. Terminal surfaces only use it to place the baseline.
    pub size: f64,
    pub bold: bool,
}

impl Font {
    pub const fn regular(size: f64) -> Self {
        Self { size, bold: false }
    }

    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Primitives the renderer draws with.
///
/// Implementations must treat an empty (zero-size) image as a no-op so the
/// game can draw before its sprites finish loading.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: RectF, color: Rgb);
    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgb);
    fn draw_image(&mut self, image: &Image, dest: RectF, transform: Transform);
    /// `at` is the text baseline anchor; `align` says which end of the text
    /// sits on it.
    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, align: TextAlign, color: Rgb);
}
