//! Rendering module
//!
//! The game draws through the [`Renderer`] capability and never owns a
//! surface. [`draw_frame`] issues one frame's calls in a fixed order:
//! background, ground, player, obstacles, score, overlay.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use headless::{DrawCall, HeadlessRenderer};

use crate::consts::{HINT_FONT, OVERLAY_FONT, SCORE_FONT};
use crate::sim::{GamePhase, GameState, PlayerFrame, SpriteCatalog, SpriteId};
use crate::tuning::Tuning;

/// Fill colors used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn as_css(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// A 2D drawing surface
pub trait Renderer {
    fn clear_surface(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn draw_image(&mut self, sprite: &SpriteId, x: f32, y: f32, width: f32, height: f32);
    /// Draw `text` with its baseline starting at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str);
    fn measure_text_width(&mut self, text: &str, font: &str) -> f32;
}

pub const START_PROMPT: &str = "PRESS SPACE TO START";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const RESTART_PROMPT: &str = "PRESS SPACE TO RESTART";

/// Draw one complete frame of `state`
pub fn draw_frame(
    renderer: &mut impl Renderer,
    state: &GameState,
    tuning: &Tuning,
    catalog: &SpriteCatalog,
) {
    let width = tuning.canvas_width;
    let height = tuning.canvas_height;

    renderer.clear_surface();
    renderer.fill_rect(0.0, 0.0, width, height, Color::White);

    // Ground line and speckles
    let ground_line = tuning.ground_line();
    renderer.fill_rect(0.0, ground_line, width, 1.0, Color::Black);
    for spec in &state.ground {
        renderer.fill_rect(spec.x, ground_line + spec.y, 1.0, 1.0, Color::Black);
    }

    // Player
    let frame = match state.phase {
        GamePhase::NotStarted => PlayerFrame::Walk(0),
        GamePhase::Running | GamePhase::Ended => {
            state
                .player
                .frame(state.tick_count, state.obstacle_move_speed, tuning)
        }
    };
    let sprite = match frame {
        PlayerFrame::Walk(i) => tuning
            .player_walk_sprites
            .get(i)
            .unwrap_or(&tuning.player_jump_sprite),
        PlayerFrame::Jump => &tuning.player_jump_sprite,
    };
    let size = catalog.player_frame_size(sprite);
    let corner = state.player.top_left(size, tuning);
    renderer.draw_image(sprite, corner.x, corner.y, size.x, size.y);

    for obstacle in &state.obstacles {
        let corner = obstacle.top_left(tuning);
        renderer.draw_image(
            &obstacle.sprite,
            corner.x,
            corner.y,
            obstacle.width,
            obstacle.height,
        );
    }

    renderer.draw_text(&state.score_text(), width - 100.0, 100.0, SCORE_FONT);

    match state.phase {
        GamePhase::NotStarted => {
            draw_centered(renderer, START_PROMPT, width, height / 2.0, HINT_FONT);
        }
        GamePhase::Ended => {
            draw_centered(renderer, GAME_OVER_TEXT, width, height / 2.0, OVERLAY_FONT);
            draw_centered(renderer, RESTART_PROMPT, width, height / 2.0 + 30.0, HINT_FONT);
        }
        GamePhase::Running => {}
    }
}

fn draw_centered(renderer: &mut impl Renderer, text: &str, width: f32, y: f32, font: &str) {
    let text_width = renderer.measure_text_width(text, font);
    renderer.draw_text(text, (width - text_width) / 2.0, y, font);
}
