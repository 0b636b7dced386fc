use crate::math::vec2::Vec2;

/// Axis-aligned rectangle stored as two arbitrary corners.
///
/// The corners need not be ordered; the accessors normalize them. `top` is
/// the larger y (y grows upward in world space).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub point1: Vec2,
    pub point2: Vec2,
}

impl Rect {
    pub const fn new(point1: Vec2, point2: Vec2) -> Self {
        Self { point1, point2 }
    }

    pub fn left(&self) -> f32 {
        self.point1.x.min(self.point2.x)
    }

    pub fn right(&self) -> f32 {
        self.point1.x.max(self.point2.x)
    }

    pub fn top(&self) -> f32 {
        self.point1.y.max(self.point2.y)
    }

    pub fn bottom(&self) -> f32 {
        self.point1.y.min(self.point2.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right() - self.left(), self.top() - self.bottom())
    }

    /// Closed outline: the four corners in order, starting at `point1`.
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.point1,
            Vec2::new(self.point2.x, self.point1.y),
            self.point2,
            Vec2::new(self.point1.x, self.point2.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_corners_normalize() {
        let r = Rect::new(Vec2::new(4.0, -1.0), Vec2::new(-2.0, 3.0));
        assert_eq!(r.left(), -2.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.top(), 3.0);
        assert_eq!(r.bottom(), -1.0);
        assert_eq!(r.size(), Vec2::new(6.0, 4.0));
    }
}
