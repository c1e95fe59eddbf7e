//! Axis-aligned bodies for every moving sprite
//!
//! Positions are in screen pixels with the origin at the top-left corner
//! and y growing downward, so "falling" means increasing y.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Position, extent and per-tick velocity of a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height, both > 0
    pub size: IVec2,
    /// Displacement applied by `advance`
    pub vel: IVec2,
}

impl Body {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        debug_assert!(size.x > 0 && size.y > 0, "body size must be positive");
        Self {
            pos,
            size,
            vel: IVec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, vel: IVec2) -> Self {
        self.vel = vel;
        self
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Move by one tick of velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Strict AABB overlap; touching edges do not count
    pub fn overlaps(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(x: i32, y: i32, w: i32, h: i32) -> Body {
        Body::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    #[test]
    fn test_advance_applies_velocity() {
        let mut b = body(10, 10, 4, 4).with_velocity(IVec2::new(-3, 2));
        b.advance();
        b.advance();
        assert_eq!(b.pos, IVec2::new(4, 14));
    }

    #[test]
    fn test_overlap_partial() {
        let a = body(0, 0, 80, 80);
        let b = body(79, 79, 2, 8);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = body(0, 0, 80, 80);
        assert!(!a.overlaps(&body(80, 0, 10, 10)));
        assert!(!a.overlaps(&body(0, 80, 10, 10)));
        assert!(!a.overlaps(&body(-10, 0, 10, 10)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = body(0, 0, 1280, 1);
        let inner = body(400, 0, 2, 8);
        assert!(outer.overlaps(&inner));
    }
}
