//! Player physics: jump buffering, drag, ground clamp, walk cycle

use glam::Vec2;

use super::hitbox::HitBox;
use crate::consts::WALK_FRAMES;
use crate::tuning::Tuning;

/// Which player image to draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerFrame {
    /// Index into the walk cycle
    Walk(usize),
    /// Still frame while airborne
    Jump,
}

/// The runner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Player {
    /// Height above the ground line (0 = grounded)
    pub y: f32,
    /// Vertical velocity, positive is up
    pub y_velocity: f32,
    /// Frame of the most recent unconsumed jump press
    pub last_jump_press: Option<u64>,
}

impl Player {
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.y <= 0.0
    }

    /// Buffer a jump press made on `frame`
    pub fn press_jump(&mut self, frame: u64) {
        self.last_jump_press = Some(frame);
    }

    /// Jump if a press is buffered within the window and the player is on
    /// the ground. Returns true when the jump fires.
    pub fn possibly_jump(&mut self, frame: u64, tuning: &Tuning) -> bool {
        let recently_pressed = self
            .last_jump_press
            .is_some_and(|pressed| frame.saturating_sub(pressed) < tuning.jump_buffer_frames);

        if recently_pressed && self.is_grounded() {
            self.y_velocity = tuning.jump_velocity;
            self.last_jump_press = None;
            return true;
        }
        false
    }

    /// Apply drag, integrate, clamp to the ground
    pub fn integrate(&mut self, tuning: &Tuning) {
        if self.y_velocity > tuning.terminal_velocity {
            self.y_velocity -= tuning.gravity_drag;
        }
        self.y += self.y_velocity;

        if self.y <= 0.0 {
            self.y = 0.0;
            self.y_velocity = 0.0;
        }
    }

    /// One physics tick. Returns true if a jump started this tick.
    pub fn update(&mut self, frame: u64, tuning: &Tuning) -> bool {
        let jumped = self.possibly_jump(frame, tuning);
        self.integrate(tuning);
        jumped
    }

    /// Canvas-space collision box for a player drawn at `size`
    pub fn hitbox(&self, size: Vec2, tuning: &Tuning) -> HitBox {
        HitBox::from_corner(self.top_left(size, tuning), size)
    }

    /// Canvas-space position of the sprite's top-left corner
    pub fn top_left(&self, size: Vec2, tuning: &Tuning) -> Vec2 {
        Vec2::new(tuning.player_x, tuning.ground_line() - size.y - self.y)
    }

    /// Animation frame. The walk cycle period shrinks as `speed` grows.
    pub fn frame(&self, tick_count: u64, speed: f32, tuning: &Tuning) -> PlayerFrame {
        if !self.is_grounded() {
            return PlayerFrame::Jump;
        }
        let step = (tick_count as f32 * speed / tuning.walk_cycle_ticks) as usize;
        PlayerFrame::Walk(step % WALK_FRAMES)
    }
}
