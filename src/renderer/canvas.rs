//! HTML canvas 2D renderer
//!
//! Sprites are loaded as `HtmlImageElement`s before the game is built; the
//! same map answers natural-size queries for the sprite catalog.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Color, Renderer};
use crate::sim::{SpriteId, SpriteMetrics};

/// Draws onto a canvas element's 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    images: HashMap<SpriteId, HtmlImageElement>,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            images: HashMap::new(),
        })
    }

    /// Load every sprite and wait until all of them have decoded
    pub async fn load_sprites<'a>(
        &mut self,
        sprites: impl IntoIterator<Item = &'a SpriteId>,
    ) -> Result<(), JsValue> {
        for sprite in sprites {
            if self.images.contains_key(sprite) {
                continue;
            }
            let image = load_image(sprite.as_str()).await?;
            log::info!(
                "Loaded {} ({}x{})",
                sprite,
                image.natural_width(),
                image.natural_height()
            );
            self.images.insert(sprite.clone(), image);
        }
        Ok(())
    }
}

async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        image.set_onload(Some(&resolve));
        image.set_onerror(Some(&reject));
    });
    image.set_src(src);
    JsFuture::from(promise)
        .await
        .map_err(|_| JsValue::from_str(&format!("failed to load sprite {src}")))?;
    image.set_onload(None);
    image.set_onerror(None);
    Ok(image)
}

impl SpriteMetrics for CanvasRenderer {
    fn natural_size(&self, sprite: &SpriteId) -> Option<Vec2> {
        self.images.get(sprite).map(|image| {
            Vec2::new(image.natural_width() as f32, image.natural_height() as f32)
        })
    }
}

impl Renderer for CanvasRenderer {
    fn clear_surface(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(color.as_css());
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn draw_image(&mut self, sprite: &SpriteId, x: f32, y: f32, width: f32, height: f32) {
        let Some(image) = self.images.get(sprite) else {
            log::warn!("Sprite {} was never loaded", sprite);
            return;
        };
        if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            x as f64,
            y as f64,
            width as f64,
            height as f64,
        ) {
            log::warn!("drawImage({}) failed: {:?}", sprite, e);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(Color::Black.as_css());
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }

    fn measure_text_width(&mut self, text: &str, font: &str) -> f32 {
        self.ctx.set_font(font);
        match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width() as f32,
            Err(e) => {
                log::warn!("measureText failed: {:?}", e);
                0.0
            }
        }
    }
}
