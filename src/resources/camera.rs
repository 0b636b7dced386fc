//! Shared 2D camera.
//!
//! Maps world coordinates to screen pixels. Screens own one and pass its
//! [`Camera::matrix`] to every draw so objects agree on a single view.

use crate::math::{Affine2D, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World point shown at the viewport centre.
    pub position: Vec2,
    /// Radians; the world appears rotated by the opposite amount.
    pub rotation: f32,
    pub zoom: f32,
    /// Viewport size in pixels.
    pub viewport: Vec2,
}

impl Camera {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
            viewport,
        }
    }

    /// Camera whose viewport matches a `(width, height)` screen.
    pub fn for_screen((width, height): (u32, u32)) -> Self {
        Self::new(Vec2::new(width as f32, height as f32))
    }

    /// World → screen transform.
    pub fn matrix(&self) -> Affine2D {
        Affine2D::build_translation_v(self.viewport * 0.5)
            * Affine2D::build_uniform_scale(self.zoom)
            * Affine2D::build_rotation(-self.rotation)
            * Affine2D::build_translation_v(-self.position)
    }

    pub fn look_at(&mut self, position: Vec2) {
        self.position = position;
    }
}
