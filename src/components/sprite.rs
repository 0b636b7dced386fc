//! Textured, animated visual component.
//!
//! A sprite is a texture sliced into equally sized frames, a set of hot spots
//! (pivot points in frame pixels) and a list of animations over those frames.
//! Sheets are described in JSON:
//!
//! ```json
//! {
//!   "texture": "assets/images/ship.png",
//!   "frame_size": [32, 32],
//!   "hot_spots": [[16, 16]],
//!   "animations": [
//!     { "frames": [ { "frame": 0, "duration": 0.1 }, { "frame": 1, "duration": 0.1 } ] }
//!   ]
//! }
//! ```
//!
//! `frames` (explicit texel offsets) may be given; otherwise the texture is
//! sliced row-major by `frame_size`. Hot spot 0 defaults to the frame centre.

use std::path::{Path, PathBuf};

use log::warn;
use serde::Deserialize;

use crate::components::Component;
use crate::components::animation::{Animation, AnimationDef};
use crate::error::{EngineError, EngineResult};
use crate::math::{Affine2D, Vec2};
use crate::render::{SpriteDrawer, TexelRegion, TextureInfo, TextureLoader};

/// On-disk sprite-sheet description.
#[derive(Debug, Clone, Deserialize)]
pub struct SpriteSheet {
    pub texture: PathBuf,
    pub frame_size: [f32; 2],
    #[serde(default)]
    pub frames: Vec<[f32; 2]>,
    #[serde(default)]
    pub hot_spots: Vec<[f32; 2]>,
    #[serde(default)]
    pub animations: Vec<AnimationDef>,
    #[serde(default)]
    pub enable_texel: bool,
}

#[derive(Debug, Clone)]
pub struct Sprite {
    texture: TextureInfo,
    frame_size: Vec2,
    frame_texels: Vec<Vec2>,
    hot_spots: Vec<Vec2>,
    animations: Vec<Animation>,
    current_anim: usize,
}

impl Sprite {
    /// Read a sprite-sheet file and load its texture through `loader`.
    pub fn load(path: &Path, loader: &mut dyn TextureLoader) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let sheet: SpriteSheet =
            serde_json::from_str(&text).map_err(|source| EngineError::SpriteSheet {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_sheet(&sheet, path, loader)
    }

    /// Build from an already parsed sheet. `source` is used in error reports.
    pub fn from_sheet(
        sheet: &SpriteSheet,
        source: &Path,
        loader: &mut dyn TextureLoader,
    ) -> EngineResult<Self> {
        let texture = loader.load(&sheet.texture, sheet.enable_texel)?;
        let frame_size = Vec2::from(sheet.frame_size);

        let frame_texels: Vec<Vec2> = if sheet.frames.is_empty() {
            slice_frames(texture, frame_size)
        } else {
            sheet.frames.iter().copied().map(Vec2::from).collect()
        };

        for def in &sheet.animations {
            if let Some(bad) = def.frames.iter().find(|f| f.frame >= frame_texels.len()) {
                return Err(EngineError::InvalidFrame {
                    path: source.to_path_buf(),
                    frame: bad.frame,
                    frame_count: frame_texels.len(),
                });
            }
        }

        let mut hot_spots: Vec<Vec2> = sheet.hot_spots.iter().copied().map(Vec2::from).collect();
        if hot_spots.is_empty() {
            hot_spots.push(frame_size * 0.5);
        }

        let mut animations: Vec<Animation> =
            sheet.animations.iter().cloned().map(Animation::new).collect();
        if animations.is_empty() {
            animations.push(Animation::still(0));
        }

        Ok(Self {
            texture,
            frame_size,
            frame_texels,
            hot_spots,
            animations,
            current_anim: 0,
        })
    }

    /// Whole texture as one frame, pivoting on its centre.
    pub fn from_texture(texture: TextureInfo) -> Self {
        let frame_size = texture.size();
        Self {
            texture,
            frame_size,
            frame_texels: vec![Vec2::ZERO],
            hot_spots: vec![frame_size * 0.5],
            animations: vec![Animation::still(0)],
            current_anim: 0,
        }
    }

    pub fn texture(&self) -> TextureInfo {
        self.texture
    }

    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    pub fn frame_count(&self) -> usize {
        self.frame_texels.len()
    }

    pub fn hot_spot(&self, index: usize) -> Option<Vec2> {
        self.hot_spots.get(index).copied()
    }

    pub fn current_animation(&self) -> usize {
        self.current_anim
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    /// Switch to animation `anim` and restart it. Out-of-range indices fall
    /// back to animation 0.
    pub fn play_animation(&mut self, anim: usize) {
        let anim = if anim < self.animations.len() {
            anim
        } else {
            warn!(
                "Animation {} out of range ({} available), playing 0",
                anim,
                self.animations.len()
            );
            0
        };
        self.current_anim = anim;
        self.animations[anim].reset();
    }

    pub fn is_animation_done(&self) -> bool {
        self.animations[self.current_anim].is_done()
    }

    pub fn current_frame(&self) -> usize {
        self.animations[self.current_anim].current_frame()
    }

    fn frame_texel(&self, frame: usize) -> Vec2 {
        self.frame_texels.get(frame).copied().unwrap_or(Vec2::ZERO)
    }

    /// Draw the current frame under `display` (camera × world). The unit quad
    /// is scaled to the frame size and shifted so hot spot 0 sits on the
    /// object's origin.
    pub fn draw(&self, drawer: &mut dyn SpriteDrawer, display: &Affine2D) {
        let hot_spot = self.hot_spot(0).unwrap_or(Vec2::ZERO);
        let transform = *display
            * Affine2D::build_translation_v(-hot_spot)
            * Affine2D::build_scale_v(self.frame_size);
        let region = TexelRegion {
            offset: self.frame_texel(self.current_frame()),
            size: self.frame_size,
        };
        drawer.draw_sprite(self.texture.id, &transform, Some(region));
    }
}

impl Component for Sprite {
    fn update(&mut self, dt: f32) {
        self.animations[self.current_anim].update(dt);
    }
}

/// Row-major grid of frame offsets covering the texture. Always at least one.
fn slice_frames(texture: TextureInfo, frame_size: Vec2) -> Vec<Vec2> {
    let columns = if frame_size.x > 0.0 {
        ((texture.width as f32 / frame_size.x) as usize).max(1)
    } else {
        1
    };
    let rows = if frame_size.y > 0.0 {
        ((texture.height as f32 / frame_size.y) as usize).max(1)
    } else {
        1
    };
    (0..rows)
        .flat_map(|r| (0..columns).map(move |c| Vec2::new(c as f32 * frame_size.x, r as f32 * frame_size.y)))
        .collect()
}
