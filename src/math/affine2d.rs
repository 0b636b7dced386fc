//! 3×3 homogeneous transform for 2D affine maps.
//!
//! Storage is column-major: `column0` is the image of the x axis, `column1` the
//! image of the y axis and `column2` the translation. The bottom row is always
//! `[0 0 1]` for matrices produced by the builders below, so transforming a
//! point never needs the homogeneous divide.
//!
//! Local → world for a game object is `T * R * S`: applied right-to-left to a
//! point that means scale first, then rotate, then translate.

use std::ops::{Mul, MulAssign};

use crate::math::vec2::Vec2;

/// One column of an [`Affine2D`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Column {
    const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine2D {
    pub column0: Column,
    pub column1: Column,
    pub column2: Column,
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        column0: Column::new(1.0, 0.0, 0.0),
        column1: Column::new(0.0, 1.0, 0.0),
        column2: Column::new(0.0, 0.0, 1.0),
    };

    pub fn build_translation(dx: f32, dy: f32) -> Self {
        Self {
            column2: Column::new(dx, dy, 1.0),
            ..Self::IDENTITY
        }
    }

    pub fn build_translation_v(offset: Vec2) -> Self {
        Self::build_translation(offset.x, offset.y)
    }

    pub fn build_scale(sx: f32, sy: f32) -> Self {
        Self {
            column0: Column::new(sx, 0.0, 0.0),
            column1: Column::new(0.0, sy, 0.0),
            ..Self::IDENTITY
        }
    }

    pub fn build_scale_v(scale: Vec2) -> Self {
        Self::build_scale(scale.x, scale.y)
    }

    pub fn build_uniform_scale(s: f32) -> Self {
        Self::build_scale(s, s)
    }

    /// Counter-clockwise rotation by `theta` radians.
    pub fn build_rotation(theta: f32) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self {
            column0: Column::new(cos, sin, 0.0),
            column1: Column::new(-sin, cos, 0.0),
            ..Self::IDENTITY
        }
    }

    /// Translation part (column 2) as a point.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.column2.x, self.column2.y)
    }

    fn row(&self, r: usize) -> [f32; 3] {
        match r {
            0 => [self.column0.x, self.column1.x, self.column2.x],
            1 => [self.column0.y, self.column1.y, self.column2.y],
            _ => [self.column0.z, self.column1.z, self.column2.z],
        }
    }

    fn apply(&self, c: &Column) -> Column {
        let dot = |row: [f32; 3]| row[0] * c.x + row[1] * c.y + row[2] * c.z;
        Column::new(dot(self.row(0)), dot(self.row(1)), dot(self.row(2)))
    }
}

impl Mul for Affine2D {
    type Output = Affine2D;

    fn mul(self, rhs: Affine2D) -> Affine2D {
        Affine2D {
            column0: self.apply(&rhs.column0),
            column1: self.apply(&rhs.column1),
            column2: self.apply(&rhs.column2),
        }
    }
}

impl MulAssign for Affine2D {
    fn mul_assign(&mut self, rhs: Affine2D) {
        *self = *self * rhs;
    }
}

impl Mul<Vec2> for Affine2D {
    type Output = Vec2;

    /// Transforms `(x, y, 1)`; the resulting homogeneous coordinate is dropped.
    fn mul(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.column0.x * p.x + self.column1.x * p.y + self.column2.x,
            self.column0.y * p.x + self.column1.y * p.y + self.column2.y,
        )
    }
}
