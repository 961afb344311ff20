//! Dino Dash - an endless-runner obstacle game
//!
//! Core modules:
//! - `sim`: Simulation (player physics, obstacles, ground, collisions, run state)
//! - `game`: Frame orchestrator tying input, simulation and drawing together
//! - `renderer`: Drawing capability and the per-frame draw order
//! - `platform`: Input mailbox and frame scheduling
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{Game, GameError};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 750.0;
    pub const CANVAS_HEIGHT: f32 = 350.0;

    /// Height of the ground band below the ground line
    pub const GROUND_HEIGHT: f32 = 30.0;
    /// Obstacles never sink deeper than ground height minus this margin
    pub const GROUND_MARGIN: f32 = 10.0;
    /// Every Nth column gets a speckle when the ground is generated
    pub const GROUND_SPEC_STRIDE: usize = 4;

    /// Player sprite placement
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;

    /// Upward impulse applied on jump (pixels/tick)
    pub const JUMP_VELOCITY: f32 = 5.0;
    /// Velocity lost per tick while above terminal velocity
    pub const GRAVITY_DRAG: f32 = 0.07;
    /// Falling speed is not reduced past this
    pub const TERMINAL_VELOCITY: f32 = -10.0;
    /// Frames after a press during which a landing still jumps
    pub const JUMP_BUFFER_FRAMES: u64 = 30;

    /// Scroll speed ramp: start + ticks / ramp, capped at max
    pub const START_SPEED: f32 = 2.0;
    pub const MAX_SPEED: f32 = 6.0;
    pub const SPEED_RAMP_TICKS: f32 = 2000.0;

    /// Obstacle placement
    pub const OBSTACLE_SPACING: f32 = 500.0;
    pub const OBSTACLE_DISTANCE_VARIATION: f32 = 200.0;
    pub const OBSTACLE_MIN_EDGE_OFFSET: f32 = 100.0;

    /// Entities left of this x are culled
    pub const CULL_X: f32 = -1000.0;

    /// Score is one point per this many ticks
    pub const SCORE_TICKS_PER_POINT: u64 = 30;
    /// Score is zero-padded to this many digits
    pub const SCORE_DIGITS: usize = 5;

    /// Walk cycle: ticks per animation frame at speed 1.0
    pub const WALK_CYCLE_TICKS: f32 = 20.0;
    pub const WALK_FRAMES: usize = 4;

    pub const SCORE_FONT: &str = "24px Common Pixel";
    pub const OVERLAY_FONT: &str = "48px Common Pixel";
    pub const HINT_FONT: &str = "16px Common Pixel";
}
