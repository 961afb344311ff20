//! Ground speckles
//!
//! A stream of single-pixel specs below the ground line. They scroll with
//! the obstacles so the ground appears to move.

use rand::Rng;

use crate::tuning::Tuning;

/// One speckle. `y` is depth below the ground line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSpec {
    pub x: f32,
    pub y: f32,
}

fn random_depth(tuning: &Tuning, rng: &mut impl Rng) -> f32 {
    rng.random::<f32>() * tuning.ground_height
}

/// Speckles covering the whole visible width, one every `ground_spec_stride` columns
pub fn generate_ground(tuning: &Tuning, rng: &mut impl Rng) -> Vec<GroundSpec> {
    let columns = tuning.canvas_width.max(0.0) as usize;
    (0..columns)
        .step_by(tuning.ground_spec_stride.max(1))
        .map(|x| GroundSpec {
            x: x as f32,
            y: random_depth(tuning, rng),
        })
        .collect()
}

/// Scroll left by `speed`, cull, then append one spec at the right edge
pub fn advance_ground(specs: &mut Vec<GroundSpec>, speed: f32, tuning: &Tuning, rng: &mut impl Rng) {
    for spec in specs.iter_mut() {
        spec.x -= speed;
    }
    specs.retain(|s| s.x >= tuning.cull_x);
    specs.push(GroundSpec {
        x: tuning.canvas_width,
        y: random_depth(tuning, rng),
    });
}
