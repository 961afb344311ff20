//! Data-driven game balance
//!
//! Every gameplay constant lives here so a page can override any subset of
//! them with a JSON document. Missing fields fall back to [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::SpriteId;

/// Tuning could not be loaded or is inconsistent
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("obstacle catalog is empty")]
    EmptyCatalog,
    #[error("expected {expected} walk frames, got {got}")]
    WalkFrames { expected: usize, got: usize },
    #[error("`{0}` must be positive")]
    NonPositive(&'static str),
    #[error("`{0}` must not be negative")]
    Negative(&'static str),
    #[error("terminal_velocity ({0}) must be below zero")]
    TerminalVelocity(f32),
    #[error("max_speed ({max}) is below start_speed ({start})")]
    SpeedRange { start: f32, max: f32 },
}

/// One entry of the obstacle catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleType {
    pub sprite: SpriteId,
    /// Drawn height; width follows the sprite's aspect ratio
    pub target_height: f32,
}

/// Game balance and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Surface ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Ground ===
    pub ground_height: f32,
    pub ground_margin: f32,
    pub ground_spec_stride: usize,

    // === Player ===
    pub player_x: f32,
    pub player_height: f32,
    pub jump_velocity: f32,
    pub gravity_drag: f32,
    pub terminal_velocity: f32,
    pub jump_buffer_frames: u64,
    pub walk_cycle_ticks: f32,
    /// Walk cycle frames, in order
    pub player_walk_sprites: Vec<SpriteId>,
    /// Still frame shown while airborne
    pub player_jump_sprite: SpriteId,

    // === Scrolling ===
    pub start_speed: f32,
    pub max_speed: f32,
    pub speed_ramp_ticks: f32,

    // === Obstacles ===
    pub obstacle_spacing: f32,
    pub obstacle_distance_variation: f32,
    pub obstacle_min_edge_offset: f32,
    pub obstacle_types: Vec<ObstacleType>,
    pub cull_x: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            ground_height: GROUND_HEIGHT,
            ground_margin: GROUND_MARGIN,
            ground_spec_stride: GROUND_SPEC_STRIDE,

            player_x: PLAYER_X,
            player_height: PLAYER_HEIGHT,
            jump_velocity: JUMP_VELOCITY,
            gravity_drag: GRAVITY_DRAG,
            terminal_velocity: TERMINAL_VELOCITY,
            jump_buffer_frames: JUMP_BUFFER_FRAMES,
            walk_cycle_ticks: WALK_CYCLE_TICKS,
            player_walk_sprites: (1..=WALK_FRAMES)
                .map(|i| SpriteId::new(format!("miukuMauku-{i}.svg")))
                .collect(),
            player_jump_sprite: SpriteId::new("miukuMauku-jump.svg"),

            start_speed: START_SPEED,
            max_speed: MAX_SPEED,
            speed_ramp_ticks: SPEED_RAMP_TICKS,

            obstacle_spacing: OBSTACLE_SPACING,
            obstacle_distance_variation: OBSTACLE_DISTANCE_VARIATION,
            obstacle_min_edge_offset: OBSTACLE_MIN_EDGE_OFFSET,
            obstacle_types: vec![
                ObstacleType {
                    sprite: SpriteId::new("error.svg"),
                    target_height: 30.0,
                },
                ObstacleType {
                    sprite: SpriteId::new("TiK.svg"),
                    target_height: 100.0,
                },
            ],
            cull_x: CULL_X,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("ground_height", self.ground_height),
            ("player_height", self.player_height),
            ("start_speed", self.start_speed),
            ("speed_ramp_ticks", self.speed_ramp_ticks),
            ("walk_cycle_ticks", self.walk_cycle_ticks),
            ("jump_velocity", self.jump_velocity),
            ("gravity_drag", self.gravity_drag),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NonPositive(name));
            }
        }
        let non_negative = [
            ("ground_margin", self.ground_margin),
            ("obstacle_spacing", self.obstacle_spacing),
            ("obstacle_distance_variation", self.obstacle_distance_variation),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Negative(name));
            }
        }
        if self.ground_spec_stride == 0 {
            return Err(TuningError::NonPositive("ground_spec_stride"));
        }
        if self.jump_buffer_frames == 0 {
            return Err(TuningError::NonPositive("jump_buffer_frames"));
        }
        // Falling must be able to outpace drag or the player never lands
        if self.terminal_velocity >= 0.0 {
            return Err(TuningError::TerminalVelocity(self.terminal_velocity));
        }
        if self.max_speed < self.start_speed {
            return Err(TuningError::SpeedRange {
                start: self.start_speed,
                max: self.max_speed,
            });
        }
        if self.obstacle_types.is_empty() {
            return Err(TuningError::EmptyCatalog);
        }
        if let Some(bad) = self.obstacle_types.iter().find(|t| t.target_height <= 0.0) {
            log::warn!("Obstacle {} has target height {}", bad.sprite, bad.target_height);
            return Err(TuningError::NonPositive("target_height"));
        }
        if self.player_walk_sprites.len() != WALK_FRAMES {
            return Err(TuningError::WalkFrames {
                expected: WALK_FRAMES,
                got: self.player_walk_sprites.len(),
            });
        }
        Ok(())
    }

    /// Canvas y of the line the player stands on
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.canvas_height - self.ground_height
    }

    /// Scroll speed after `tick_count` running ticks
    #[inline]
    pub fn speed_at(&self, tick_count: u64) -> f32 {
        (self.start_speed + tick_count as f32 / self.speed_ramp_ticks).min(self.max_speed)
    }

    /// Every sprite the game will draw, walk frames first
    pub fn all_sprites(&self) -> impl Iterator<Item = &SpriteId> {
        self.player_walk_sprites
            .iter()
            .chain(std::iter::once(&self.player_jump_sprite))
            .chain(self.obstacle_types.iter().map(|t| &t.sprite))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{ "obstacle_spacing": 200.0, "max_speed": 9.5 }"#)
            .expect("partial override should parse");
        assert_eq!(tuning.obstacle_spacing, 200.0);
        assert_eq!(tuning.max_speed, 9.5);
        // Untouched fields keep their defaults
        assert_eq!(tuning.canvas_width, CANVAS_WIDTH);
        assert_eq!(tuning.obstacle_types.len(), 2);
    }

    #[test]
    fn test_catalog_from_json() {
        let tuning = Tuning::from_json(
            r#"{ "obstacle_types": [ { "sprite": "cactus.png", "target_height": 40.0 } ] }"#,
        )
        .unwrap();
        assert_eq!(tuning.obstacle_types.len(), 1);
        assert_eq!(tuning.obstacle_types[0].sprite.as_str(), "cactus.png");
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_catalog() {
        let err = Tuning::from_json(r#"{ "obstacle_types": [] }"#).unwrap_err();
        assert!(matches!(err, TuningError::EmptyCatalog));
    }

    #[test]
    fn test_rejects_inverted_speed_range() {
        let err = Tuning::from_json(r#"{ "start_speed": 5.0, "max_speed": 3.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::SpeedRange { .. }));
    }

    #[test]
    fn test_rejects_wrong_walk_frame_count() {
        let err = Tuning::from_json(r#"{ "player_walk_sprites": ["a.svg"] }"#).unwrap_err();
        assert!(matches!(err, TuningError::WalkFrames { expected: 4, got: 1 }));
    }

    #[test]
    fn test_rejects_zero_gravity_drag() {
        let err = Tuning::from_json(r#"{ "gravity_drag": 0.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NonPositive("gravity_drag")));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let err = Tuning::from_json(r#"{ "jump_velocity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NonPositive("jump_velocity")));
    }

    #[test]
    fn test_rejects_zero_jump_buffer() {
        let err = Tuning::from_json(r#"{ "jump_buffer_frames": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::NonPositive("jump_buffer_frames")));
    }

    #[test]
    fn test_rejects_upward_terminal_velocity() {
        for json in [
            r#"{ "terminal_velocity": 3.0 }"#,
            r#"{ "terminal_velocity": 0.0 }"#,
        ] {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(matches!(err, TuningError::TerminalVelocity(_)), "{json}");
        }
    }

    #[test]
    fn test_rejects_negative_spacing() {
        let err = Tuning::from_json(r#"{ "obstacle_spacing": -5000.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Negative("obstacle_spacing")));
    }

    #[test]
    fn test_accepted_tuning_lands_after_jump() {
        use crate::sim::Player;

        let tuning = Tuning::from_json(r#"{ "gravity_drag": 0.01, "terminal_velocity": -0.5 }"#)
            .expect("slow fall is still valid");
        let mut player = Player::default();
        player.press_jump(0);
        assert!(player.update(0, &tuning));
        let mut frame = 1;
        while !player.is_grounded() {
            player.update(frame, &tuning);
            frame += 1;
            assert!(frame < 100_000, "player never landed");
        }
    }

    #[test]
    fn test_speed_ramp_is_capped() {
        let tuning = Tuning::default();
        assert_eq!(tuning.speed_at(0), START_SPEED);
        assert!((tuning.speed_at(2000) - (START_SPEED + 1.0)).abs() < 1e-5);
        assert_eq!(tuning.speed_at(1_000_000), MAX_SPEED);
    }

    #[test]
    fn test_all_sprites_lists_everything() {
        let tuning = Tuning::default();
        assert_eq!(tuning.all_sprites().count(), WALK_FRAMES + 1 + 2);
    }
}
