//! Windowed backend on top of raylib (feature `raylib`).
//!
//! Owns the raylib handle and every GPU texture. Recorded [`DrawList`]s are
//! replayed inside a single `begin_drawing` scope: outlines as line loops,
//! sprites as `draw_texture_pro` quads whose destination rectangle and angle
//! are recovered from the command's affine transform.

use std::path::Path;

use ::raylib::ffi::KeyboardKey;
use ::raylib::prelude::{
    Color as RlColor, RaylibDraw, RaylibHandle, RaylibTexture2D, RaylibThread, Rectangle,
    Texture2D, TextureFilter, Vector2,
};
use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};
use crate::math::{Affine2D, Vec2};
use crate::render::{Backend, Color, DrawCommand, DrawList, TextureId, TextureInfo, TextureLoader};
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputKey, InputState};

fn key_binding(key: InputKey) -> KeyboardKey {
    match key {
        InputKey::Up => KeyboardKey::KEY_UP,
        InputKey::Down => KeyboardKey::KEY_DOWN,
        InputKey::Left => KeyboardKey::KEY_LEFT,
        InputKey::Right => KeyboardKey::KEY_RIGHT,
        InputKey::Enter => KeyboardKey::KEY_ENTER,
        InputKey::Escape => KeyboardKey::KEY_ESCAPE,
        InputKey::Space => KeyboardKey::KEY_SPACE,
        InputKey::Debug => KeyboardKey::KEY_F11,
    }
}

fn to_raylib_color(color: Color) -> RlColor {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    RlColor::new(channel(color.r), channel(color.g), channel(color.b), 255)
}

fn to_vector2(v: Vec2) -> Vector2 {
    Vector2::new(v.x, v.y)
}

pub struct RaylibBackend {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: FxHashMap<TextureId, Texture2D>,
    next_texture: u32,
}

impl RaylibBackend {
    /// Open the window described by `config`.
    pub fn new(config: &GameConfig) -> Self {
        let (mut rl, thread) = ::raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .resizable()
            .title(&config.title)
            .build();
        rl.set_target_fps(config.target_fps);
        // Escape is a game key, not a close request.
        rl.set_exit_key(None);
        info!(
            "Window opened: {}x{} @ {} fps",
            config.window_width, config.window_height, config.target_fps
        );
        Self {
            rl,
            thread,
            textures: FxHashMap::default(),
            next_texture: 1,
        }
    }

    fn draw_outline(d: &mut impl RaylibDraw, points: &[Vec2], transform: &Affine2D, color: Color) {
        if points.len() < 2 {
            return;
        }
        let color = to_raylib_color(color);
        for (i, &point) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            d.draw_line_v(
                to_vector2(*transform * point),
                to_vector2(*transform * next),
                color,
            );
        }
    }
}

impl TextureLoader for RaylibBackend {
    fn load(&mut self, path: &Path, enable_texel: bool) -> EngineResult<TextureInfo> {
        let path_str = path.to_str().ok_or_else(|| EngineError::TextureLoad {
            path: path.to_path_buf(),
            reason: "path is not valid UTF-8".into(),
        })?;
        let mut texture =
            self.rl
                .load_texture(&self.thread, path_str)
                .map_err(|e| EngineError::TextureLoad {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?;
        let filter = if enable_texel {
            TextureFilter::TEXTURE_FILTER_POINT
        } else {
            TextureFilter::TEXTURE_FILTER_BILINEAR
        };
        texture.set_texture_filter(&self.thread, filter);

        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        let info = TextureInfo {
            id,
            width: texture.width.max(0) as u32,
            height: texture.height.max(0) as u32,
        };
        self.textures.insert(id, texture);
        debug!("raylib: loaded {:?} as {:?}", path, id);
        Ok(info)
    }

    fn unload(&mut self, id: TextureId) {
        // Dropping the handle frees the GPU texture.
        self.textures.remove(&id);
    }
}

impl Backend for RaylibBackend {
    fn begin_frame(&mut self, input: &mut InputState) {
        input.begin_frame();
        for key in InputKey::ALL {
            input.set_key(key, self.rl.is_key_down(key_binding(key)));
        }
    }

    fn frame_time(&mut self) -> f32 {
        self.rl.get_frame_time()
    }

    fn present(&mut self, frame: &DrawList) {
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(to_raylib_color(frame.clear_color));

        for command in &frame.commands {
            match command {
                DrawCommand::Outline {
                    points,
                    transform,
                    color,
                } => Self::draw_outline(&mut d, points, transform, *color),
                DrawCommand::Sprite {
                    texture,
                    transform,
                    region,
                } => {
                    let Some(tex) = self.textures.get(texture) else {
                        continue;
                    };
                    let source = match region {
                        Some(r) => Rectangle::new(r.offset.x, r.offset.y, r.size.x, r.size.y),
                        None => Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32),
                    };
                    // The unit quad's corner (0,0) lands on the translation;
                    // the x and y columns carry size and angle.
                    let origin = transform.translation();
                    let x_axis = Vec2::new(transform.column0.x, transform.column0.y);
                    let y_axis = Vec2::new(transform.column1.x, transform.column1.y);
                    let dest = Rectangle::new(origin.x, origin.y, x_axis.length(), y_axis.length());
                    let angle = x_axis.y.atan2(x_axis.x).to_degrees();
                    d.draw_texture_pro(tex, source, dest, Vector2::zero(), angle, RlColor::WHITE);
                }
            }
        }
    }

    fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    fn screen_size(&self) -> (u32, u32) {
        (
            self.rl.get_screen_width().max(0) as u32,
            self.rl.get_screen_height().max(0) as u32,
        )
    }
}
