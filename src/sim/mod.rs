//! Simulation module
//!
//! All gameplay logic lives here. It is deterministic given a seeded RNG and
//! has no rendering or platform dependencies:
//! - One `tick` per animation frame; ticks only count while running
//! - Sprite sizes are resolved before the first frame
//! - Entity lists are kept oldest first

pub mod ground;
pub mod hitbox;
pub mod obstacle;
pub mod player;
pub mod sprite;
pub mod state;
pub mod tick;

pub use ground::{GroundSpec, advance_ground, generate_ground};
pub use hitbox::HitBox;
pub use obstacle::{
    Obstacle, create_obstacle, maybe_spawn_obstacle, scroll_obstacles, should_spawn_obstacle,
};
pub use player::{Player, PlayerFrame};
pub use sprite::{ObstacleKind, SpriteCatalog, SpriteError, SpriteId, SpriteMetrics, scale_to_height};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, resolve_collisions, tick};
