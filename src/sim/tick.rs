//! Per-frame simulation step
//!
//! A frame is `tick` (input, physics, scrolling, spawning), then drawing,
//! then `resolve_collisions`. Collisions are tested against the layout that
//! was just drawn.

use rand::Rng;

use super::ground::advance_ground;
use super::obstacle::{maybe_spawn_obstacle, scroll_obstacles};
use super::sprite::SpriteCatalog;
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Input collected for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump, start or restart depending on phase
    pub activate: bool,
}

/// Advance the game by one animation frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    tuning: &Tuning,
    catalog: &SpriteCatalog,
    rng: &mut impl Rng,
) {
    match state.phase {
        GamePhase::NotStarted => {
            // The activate that starts the run is not also a jump
            if input.activate {
                state.phase = GamePhase::Running;
                state.events.push(GameEvent::RunStarted);
            }
        }
        GamePhase::Ended => {
            if input.activate {
                state.restart(tuning, rng);
            }
        }
        GamePhase::Running => {
            if input.activate {
                state.player.press_jump(state.frame_count);
            }
            step_running(state, tuning, catalog, rng);
        }
    }

    state.frame_count += 1;
}

fn step_running(
    state: &mut GameState,
    tuning: &Tuning,
    catalog: &SpriteCatalog,
    rng: &mut impl Rng,
) {
    state.tick_count += 1;
    state.obstacle_move_speed = tuning.speed_at(state.tick_count);
    let speed = state.obstacle_move_speed;

    if state.player.update(state.frame_count, tuning) {
        state.events.push(GameEvent::Jumped);
    }

    scroll_obstacles(&mut state.obstacles, speed, tuning.cull_x);
    maybe_spawn_obstacle(&mut state.obstacles, catalog, tuning, rng);
    advance_ground(&mut state.ground, speed, tuning, rng);
}

/// End the run if any obstacle overlaps the player. Returns true only on
/// the frame the run ends.
pub fn resolve_collisions(state: &mut GameState, tuning: &Tuning, catalog: &SpriteCatalog) -> bool {
    if state.phase != GamePhase::Running {
        return false;
    }

    let player_box = state.player.hitbox(catalog.player_size, tuning);
    let hit = state
        .obstacles
        .iter()
        .any(|o| o.hitbox(tuning).is_collision_with(&player_box));

    hit && state.end_run()
}
