//! Obstacle factory and lifecycle
//!
//! Obstacles enter beyond the right edge at a random offset, scroll left at
//! the current speed and are culled far off-screen.

use glam::Vec2;
use rand::Rng;

use super::hitbox::HitBox;
use super::sprite::{SpriteCatalog, SpriteId};
use crate::tuning::Tuning;

/// A scrolling obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    /// Height of the obstacle's top above the canvas bottom
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: SpriteId,
}

impl Obstacle {
    /// Canvas-space position of the sprite's top-left corner
    pub fn top_left(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(self.x, tuning.canvas_height - self.y)
    }

    pub fn hitbox(&self, tuning: &Tuning) -> HitBox {
        HitBox::new(self.width, self.height, self.top_left(tuning))
    }
}

/// Build one obstacle of a random catalog type just past the right edge
pub fn create_obstacle(catalog: &SpriteCatalog, tuning: &Tuning, rng: &mut impl Rng) -> Obstacle {
    let kind = &catalog.obstacle_kinds[rng.random_range(0..catalog.obstacle_kinds.len())];
    let sink_range = (tuning.ground_height - tuning.ground_margin).max(0.0);

    Obstacle {
        x: tuning.canvas_width
            + rng.random::<f32>() * tuning.obstacle_distance_variation
            + tuning.obstacle_min_edge_offset,
        y: kind.size.y + rng.random::<f32>() * sink_range,
        width: kind.size.x,
        height: kind.size.y,
        sprite: kind.sprite.clone(),
    }
}

/// Whether a new obstacle is due: none on screen, or the newest one has
/// travelled far enough from the right edge
pub fn should_spawn_obstacle(obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    match obstacles.last() {
        None => true,
        Some(newest) => newest.x < tuning.canvas_width - tuning.obstacle_spacing,
    }
}

/// Append a new obstacle if one is due. Returns true when one was spawned.
pub fn maybe_spawn_obstacle(
    obstacles: &mut Vec<Obstacle>,
    catalog: &SpriteCatalog,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> bool {
    if !should_spawn_obstacle(obstacles, tuning) {
        return false;
    }
    let obstacle = create_obstacle(catalog, tuning, rng);
    log::debug!("Spawned {} at x={:.0}", obstacle.sprite, obstacle.x);
    obstacles.push(obstacle);
    true
}

/// Move every obstacle left by `speed` and drop the ones past the cull line
pub fn scroll_obstacles(obstacles: &mut Vec<Obstacle>, speed: f32, cull_x: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
    obstacles.retain(|o| o.x >= cull_x);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use crate::sim::sprite::ObstacleKind;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn catalog() -> SpriteCatalog {
        SpriteCatalog {
            player_size: Vec2::new(60.0, 80.0),
            player_frame_sizes: HashMap::new(),
            obstacle_kinds: vec![
                ObstacleKind {
                    sprite: SpriteId::new("small.svg"),
                    size: Vec2::new(20.0, 30.0),
                },
                ObstacleKind {
                    sprite: SpriteId::new("tall.svg"),
                    size: Vec2::new(40.0, 100.0),
                },
            ],
        }
    }

    fn obstacle_at(x: f32) -> Obstacle {
        Obstacle {
            x,
            y: 30.0,
            width: 20.0,
            height: 30.0,
            sprite: SpriteId::new("small.svg"),
        }
    }

    #[test]
    fn test_created_obstacle_placement() {
        let tuning = Tuning::default();
        let catalog = catalog();
        let mut rng = Pcg32::seed_from_u64(7);

        for _ in 0..200 {
            let o = create_obstacle(&catalog, &tuning, &mut rng);
            let min_x = tuning.canvas_width + tuning.obstacle_min_edge_offset;
            let max_x = min_x + tuning.obstacle_distance_variation;
            assert!(o.x >= min_x && o.x <= max_x, "x out of range: {}", o.x);

            let sink = tuning.ground_height - tuning.ground_margin;
            assert!(o.y >= o.height && o.y <= o.height + sink, "y out of range: {}", o.y);

            let kind = catalog
                .obstacle_kinds
                .iter()
                .find(|k| k.sprite == o.sprite)
                .expect("sprite from catalog");
            assert_eq!(Vec2::new(o.width, o.height), kind.size);
        }
    }

    #[test]
    fn test_both_types_get_picked() {
        let tuning = Tuning::default();
        let catalog = catalog();
        let mut rng = Pcg32::seed_from_u64(1);
        let tall = (0..100)
            .filter(|_| create_obstacle(&catalog, &tuning, &mut rng).sprite.as_str() == "tall.svg")
            .count();
        assert!(tall > 10 && tall < 90);
    }

    #[test]
    fn test_spawn_when_empty() {
        let tuning = Tuning::default();
        let mut obstacles = Vec::new();
        let mut rng = Pcg32::seed_from_u64(3);
        assert!(maybe_spawn_obstacle(&mut obstacles, &catalog(), &tuning, &mut rng));
        assert_eq!(obstacles.len(), 1);
    }

    #[test]
    fn test_spawn_spacing_threshold() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);

        let mut far_enough = vec![obstacle_at(tuning.canvas_width - 501.0)];
        assert!(maybe_spawn_obstacle(&mut far_enough, &catalog(), &tuning, &mut rng));
        assert_eq!(far_enough.len(), 2);

        let mut too_close = vec![obstacle_at(tuning.canvas_width - 499.0)];
        assert!(!maybe_spawn_obstacle(&mut too_close, &catalog(), &tuning, &mut rng));
        assert_eq!(too_close.len(), 1);
    }

    #[test]
    fn test_only_newest_obstacle_gates_spawning() {
        let tuning = Tuning::default();
        // Oldest far left, newest still near the edge
        let obstacles = vec![obstacle_at(-500.0), obstacle_at(tuning.canvas_width)];
        assert!(!should_spawn_obstacle(&obstacles, &tuning));
    }

    #[test]
    fn test_scroll_and_cull() {
        let mut obstacles = vec![obstacle_at(-997.0), obstacle_at(100.0)];
        scroll_obstacles(&mut obstacles, 2.0, -1000.0);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].x, -999.0);
        assert_eq!(obstacles[1].x, 98.0);

        scroll_obstacles(&mut obstacles, 2.0, -1000.0);
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].x, 96.0);
    }

    #[test]
    fn test_obstacle_hitbox_sits_in_ground_band() {
        let tuning = Tuning::default();
        let o = Obstacle {
            y: 35.0,
            ..obstacle_at(300.0)
        };
        let hb = o.hitbox(&tuning);
        assert_eq!(hb.min_y(), tuning.canvas_height - 35.0);
        assert_eq!(hb.max_y(), tuning.canvas_height - 5.0);
    }
}
