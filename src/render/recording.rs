//! A surface that records draw calls instead of drawing.
//!
//! Used by tests to check what a frame draws
//! and in which order.

use super::{Font, RectF, Rgb, Surface, TextAlign, Transform, Vec2};
use crate::assets::Image;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect {
        rect: RectF,
        color: Rgb,
    },
    Circle {
        center: Vec2,
        radius: f64,
        color: Rgb,
    },
    Image {
        width: usize,
        height: usize,
        dest: RectF,
        transform: Transform,
    },
    Text {
        text: String,
        at: Vec2,
        font: Font,
        align: TextAlign,
        color: Rgb,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Hand back everything recorded so far and start over.
    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, rect: RectF, color: Rgb) {
        self.calls.push(DrawCall::Rect { rect, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f64, color: Rgb) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_image(&mut self, image: &Image, dest: RectF, transform: Transform) {
        if image.is_empty() {
            return;
        }
        self.calls.push(DrawCall::Image {
            width: image.width(),
            height: image.height(),
            dest,
            transform,
        });
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, align: TextAlign, color: Rgb) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            at,
            font,
            align,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_is_not_recorded() {
        let mut surface = RecordingSurface::new();
        surface.draw_image(
            &Image::empty(),
            RectF::new(0.0, 0.0, 10.0, 10.0),
            Transform::IDENTITY,
        );
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_take_drains_calls() {
        let mut surface = RecordingSurface::new();
        surface.clear();
        assert_eq!(surface.take(), vec![DrawCall::Clear]);
        assert!(surface.calls().is_empty());
    }
}
