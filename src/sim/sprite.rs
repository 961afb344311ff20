//! Sprite identifiers and aspect-preserving scaling
//!
//! The simulation never touches pixels, but obstacle and player hitboxes are
//! sized from the sprites' natural dimensions. Those come from a
//! [`SpriteMetrics`] provider and are resolved once, up front, into a
//! [`SpriteCatalog`].

use std::collections::HashMap;
use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tuning::Tuning;

/// Sprite lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteError {
    #[error("sprite `{0}` has no natural size (not loaded?)")]
    Unresolved(SpriteId),
}

/// Identifier of a drawable image (its asset path)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpriteId(String);

impl SpriteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of natural sprite dimensions
pub trait SpriteMetrics {
    /// Natural (width, height) in pixels, `None` if the sprite is not available
    fn natural_size(&self, sprite: &SpriteId) -> Option<Vec2>;
}

impl<F> SpriteMetrics for F
where
    F: Fn(&SpriteId) -> Option<Vec2>,
{
    fn natural_size(&self, sprite: &SpriteId) -> Option<Vec2> {
        self(sprite)
    }
}

/// Scale `natural` to `target_height`, keeping the aspect ratio
#[inline]
pub fn scale_to_height(natural: Vec2, target_height: f32) -> Vec2 {
    let multiplier = target_height / natural.y;
    natural * multiplier
}

/// An obstacle type with its drawn size already computed
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleKind {
    pub sprite: SpriteId,
    pub size: Vec2,
}

/// All sprite sizes the simulation needs, resolved from tuning
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteCatalog {
    /// Player hitbox size (the first walk frame, scaled)
    pub player_size: Vec2,
    /// Drawn size of each player image, scaled to the player height
    pub player_frame_sizes: HashMap<SpriteId, Vec2>,
    pub obstacle_kinds: Vec<ObstacleKind>,
}

impl SpriteCatalog {
    /// Resolve every sprite in `tuning`. Fails on the first sprite without a
    /// usable natural size.
    pub fn resolve(tuning: &Tuning, metrics: &impl SpriteMetrics) -> Result<Self, SpriteError> {
        let lookup = |sprite: &SpriteId| -> Result<Vec2, SpriteError> {
            metrics
                .natural_size(sprite)
                .filter(|size| size.x >= 0.0 && size.y > 0.0)
                .ok_or_else(|| SpriteError::Unresolved(sprite.clone()))
        };

        // Check every sprite, even those only drawn (never measured)
        for sprite in tuning.all_sprites() {
            lookup(sprite)?;
        }

        let first_frame = tuning
            .player_walk_sprites
            .first()
            .unwrap_or(&tuning.player_jump_sprite);
        let player_size = scale_to_height(lookup(first_frame)?, tuning.player_height);

        let player_frame_sizes = tuning
            .player_walk_sprites
            .iter()
            .chain(std::iter::once(&tuning.player_jump_sprite))
            .map(|sprite| {
                let size = scale_to_height(lookup(sprite)?, tuning.player_height);
                Ok((sprite.clone(), size))
            })
            .collect::<Result<HashMap<_, _>, SpriteError>>()?;

        let obstacle_kinds = tuning
            .obstacle_types
            .iter()
            .map(|t| {
                Ok(ObstacleKind {
                    sprite: t.sprite.clone(),
                    size: scale_to_height(lookup(&t.sprite)?, t.target_height),
                })
            })
            .collect::<Result<Vec<_>, SpriteError>>()?;

        Ok(Self {
            player_size,
            player_frame_sizes,
            obstacle_kinds,
        })
    }

    /// Drawn size of a player image, the hitbox size if it is not a player image
    pub fn player_frame_size(&self, sprite: &SpriteId) -> Vec2 {
        self.player_frame_sizes
            .get(sprite)
            .copied()
            .unwrap_or(self.player_size)
    }
}
