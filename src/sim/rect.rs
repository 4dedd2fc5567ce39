//! Axis-aligned rectangle geometry
//!
//! Bricks, the paddle and the swept ball bounds are all AABBs. Width and
//! height are required to be positive by caller contract; nothing here
//! validates them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, top-left anchored (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounding square of a circle.
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// 1-D open-interval overlap. Ranges that merely touch do not intersect.
#[inline]
pub fn ranges_intersect(begin_a: f32, end_a: f32, begin_b: f32, end_b: f32) -> bool {
    end_a > begin_b && end_b > begin_a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_around_circle() {
        let r = Rect::around(Vec2::new(5.0, 5.0), 2.0);
        assert_eq!(r, Rect::new(3.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn test_ranges_intersect() {
        assert!(ranges_intersect(0.0, 2.0, 1.0, 3.0));
        assert!(ranges_intersect(1.0, 3.0, 0.0, 2.0));
        // Touching endpoints do not count as overlap.
        assert!(!ranges_intersect(0.0, 2.0, 2.0, 4.0));
        assert!(!ranges_intersect(0.0, 1.0, 2.0, 3.0));
    }
}
