//! Axis-aligned collision boxes
//!
//! Boxes are rebuilt from entity positions every frame; nothing here is
//! stored between frames.

use glam::Vec2;

/// An axis-aligned box anchored at its minimum corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub width: f32,
    pub height: f32,
    /// Minimum corner (canvas coordinates)
    pub bottom_left: Vec2,
}

impl HitBox {
    pub fn new(width: f32, height: f32, bottom_left: Vec2) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative hitbox extent");
        Self {
            width,
            height,
            bottom_left,
        }
    }

    /// Box covering `size` with its minimum corner at `corner`
    pub fn from_corner(corner: Vec2, size: Vec2) -> Self {
        Self::new(size.x, size.y, corner)
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.bottom_left.x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.bottom_left.y
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.bottom_left.x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.bottom_left.y + self.height
    }

    /// Overlap test, inclusive on every edge (touching boxes collide)
    pub fn is_collision_with(&self, other: &HitBox) -> bool {
        let x_collide = self.min_x() <= other.max_x() && self.max_x() >= other.min_x();
        let y_collide = self.min_y() <= other.max_y() && self.max_y() >= other.min_y();
        x_collide && y_collide
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_collide() {
        let a = HitBox::new(10.0, 10.0, Vec2::new(0.0, 0.0));
        let b = HitBox::new(10.0, 10.0, Vec2::new(5.0, 5.0));
        assert!(a.is_collision_with(&b));
        assert!(b.is_collision_with(&a));
    }

    #[test]
    fn test_separated_boxes_miss() {
        let a = HitBox::new(10.0, 10.0, Vec2::new(0.0, 0.0));
        // Overlaps on x only
        let b = HitBox::new(10.0, 10.0, Vec2::new(5.0, 20.0));
        // Overlaps on y only
        let c = HitBox::new(10.0, 10.0, Vec2::new(30.0, 5.0));
        assert!(!a.is_collision_with(&b));
        assert!(!a.is_collision_with(&c));
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = HitBox::new(10.0, 10.0, Vec2::new(0.0, 0.0));
        let b = HitBox::new(10.0, 10.0, Vec2::new(10.0, 10.0));
        assert!(a.is_collision_with(&b));
    }

    #[test]
    fn test_degenerate_boxes() {
        let point = HitBox::new(0.0, 0.0, Vec2::new(3.0, 3.0));
        let same_point = HitBox::new(0.0, 0.0, Vec2::new(3.0, 3.0));
        let area = HitBox::new(10.0, 10.0, Vec2::ZERO);
        assert!(point.is_collision_with(&same_point));
        assert!(point.is_collision_with(&area));
        assert!(!point.is_collision_with(&HitBox::new(0.0, 0.0, Vec2::new(3.1, 3.0))));
    }

    #[test]
    fn test_derived_bounds() {
        let b = HitBox::from_corner(Vec2::new(2.0, 3.0), Vec2::new(4.0, 5.0));
        assert_eq!((b.min_x(), b.min_y(), b.max_x(), b.max_y()), (2.0, 3.0, 6.0, 8.0));
    }
}
