//! Narrow interfaces to the rendering and asset collaborators.
//!
//! The simulation core never talks to a GPU. It emits outlines and textured
//! quads through [`ShapeRenderer`] and [`SpriteDrawer`], and acquires textures
//! through a [`TextureLoader`]. Backends implement these traits:
//!
//! - [`drawlist`] – records draw calls as [`DrawCommand`]s for later replay
//! - [`headless`] – window-less backend used by tests and the headless demo
//! - `raylib` – windowed backend (feature `raylib`)

pub mod drawlist;
pub mod headless;
#[cfg(feature = "raylib")]
pub mod raylib;

use std::path::Path;

use crate::error::EngineResult;
use crate::math::{Affine2D, Vec2};
use crate::resources::input::InputState;

pub use drawlist::{DrawCommand, DrawList};

/// RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Opaque handle to a texture owned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

/// What the core knows about a loaded texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureInfo {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Sub-rectangle of a texture in source pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexelRegion {
    pub offset: Vec2,
    pub size: Vec2,
}

/// Draws a closed line loop through `points` (local space) under `transform`.
pub trait ShapeRenderer {
    fn draw_outline(&mut self, points: &[Vec2], transform: &Affine2D, color: Color);
}

/// Draws a textured unit quad under `transform`, optionally restricted to a
/// sub-region of the texture.
pub trait SpriteDrawer {
    fn draw_sprite(&mut self, texture: TextureId, transform: &Affine2D, region: Option<TexelRegion>);
}

/// Anything that accepts both shape and sprite draws.
pub trait Canvas: ShapeRenderer + SpriteDrawer {}

impl<T: ShapeRenderer + SpriteDrawer> Canvas for T {}

/// Image decoding and GPU upload. Failures are fatal for the caller.
pub trait TextureLoader {
    fn load(&mut self, path: &Path, enable_texel: bool) -> EngineResult<TextureInfo>;
    fn unload(&mut self, id: TextureId);
}

/// Window, input and presentation services for the engine loop.
pub trait Backend: TextureLoader {
    /// Pump window events and refresh `input` for the new frame.
    fn begin_frame(&mut self, input: &mut InputState);
    /// Raw seconds since the previous frame, before clamping.
    fn frame_time(&mut self) -> f32;
    /// Replay the recorded frame.
    fn present(&mut self, frame: &DrawList);
    fn should_close(&self) -> bool;
    /// Current drawable size in pixels.
    fn screen_size(&self) -> (u32, u32);
}
