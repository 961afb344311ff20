//! Renderer that records draw calls instead of drawing
//!
//! Used by the native host and by tests to inspect what a frame would draw.

use super::{Color, Renderer};
use crate::sim::SpriteId;

/// Approximate glyph width as a fraction of the font size
const GLYPH_WIDTH_RATIO: f32 = 0.6;

/// One recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    Image {
        sprite: SpriteId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font: String,
    },
}

/// Records the calls of the most recent frame
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub calls: Vec<DrawCall>,
}

impl HeadlessRenderer {
    /// Text strings drawn this frame, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Sprites drawn this frame, in order
    pub fn images(&self) -> Vec<&SpriteId> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Image { sprite, .. } => Some(sprite),
                _ => None,
            })
            .collect()
    }
}

/// Pixel size from a CSS font string such as `"24px Common Pixel"`
fn font_px(font: &str) -> f32 {
    font.split_whitespace()
        .find_map(|part| part.strip_suffix("px")?.parse().ok())
        .unwrap_or(16.0)
}

impl Renderer for HeadlessRenderer {
    fn clear_surface(&mut self) {
        // A clear starts a new frame
        self.calls.clear();
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn draw_image(&mut self, sprite: &SpriteId, x: f32, y: f32, width: f32, height: f32) {
        self.calls.push(DrawCall::Image {
            sprite: sprite.clone(),
            x,
            y,
            width,
            height,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            font: font.to_string(),
        });
    }

    fn measure_text_width(&mut self, text: &str, font: &str) -> f32 {
        text.chars().count() as f32 * font_px(font) * GLYPH_WIDTH_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_px() {
        assert_eq!(font_px("24px Common Pixel"), 24.0);
        assert_eq!(font_px("bold 48px serif"), 48.0);
        assert_eq!(font_px("serif"), 16.0);
    }

    #[test]
    fn test_clear_starts_new_frame() {
        let mut renderer = HeadlessRenderer::default();
        renderer.clear_surface();
        renderer.draw_text("a", 0.0, 0.0, "10px x");
        renderer.clear_surface();
        assert_eq!(renderer.calls, vec![DrawCall::Clear]);
    }
}
