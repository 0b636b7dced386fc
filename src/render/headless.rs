//! Window-less backend.
//!
//! Advances time in fixed steps, replays scripted key levels, hands out
//! placeholder textures and logs presented frames at `trace` level. Used by
//! the headless demo run and by integration tests that drive the full engine
//! loop.

use std::path::{Path, PathBuf};

use log::trace;
use rustc_hash::FxHashMap;

use crate::error::{EngineError, EngineResult};
use crate::render::{Backend, DrawList, TextureId, TextureInfo, TextureLoader};
use crate::resources::input::{InputKey, InputState};

#[derive(Debug)]
pub struct HeadlessBackend {
    step: f32,
    frame: u64,
    max_frames: Option<u64>,
    screen: (u32, u32),
    textures: FxHashMap<PathBuf, (u32, u32)>,
    placeholder: Option<(u32, u32)>,
    next_texture: u32,
    loaded: FxHashMap<TextureId, PathBuf>,
    script: FxHashMap<u64, Vec<(InputKey, bool)>>,
    presented: u64,
    last_command_count: usize,
}

impl HeadlessBackend {
    /// Backend stepping `step` seconds per frame on a `width × height` screen.
    pub fn new(step: f32, width: u32, height: u32) -> Self {
        Self {
            step,
            frame: 0,
            max_frames: None,
            screen: (width, height),
            textures: FxHashMap::default(),
            placeholder: None,
            next_texture: 1,
            loaded: FxHashMap::default(),
            script: FxHashMap::default(),
            presented: 0,
            last_command_count: 0,
        }
    }

    /// Close after `frames` frames have begun.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Make `path` loadable with the given pixel size.
    pub fn with_texture(mut self, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        self.textures.insert(path.into(), (width, height));
        self
    }

    /// Any unregistered path loads as a `width × height` placeholder.
    pub fn with_placeholder_textures(mut self, width: u32, height: u32) -> Self {
        self.placeholder = Some((width, height));
        self
    }

    /// Set `key` to `down` when frame number `frame` begins (frames count from 1).
    pub fn script_key(mut self, frame: u64, key: InputKey, down: bool) -> Self {
        self.script.entry(frame).or_default().push((key, down));
        self
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn presented_frames(&self) -> u64 {
        self.presented
    }

    pub fn last_command_count(&self) -> usize {
        self.last_command_count
    }

    pub fn loaded_texture_count(&self) -> usize {
        self.loaded.len()
    }
}

impl TextureLoader for HeadlessBackend {
    fn load(&mut self, path: &Path, _enable_texel: bool) -> EngineResult<TextureInfo> {
        let (width, height) = self
            .textures
            .get(path)
            .copied()
            .or(self.placeholder)
            .ok_or_else(|| EngineError::TextureLoad {
                path: path.to_path_buf(),
                reason: "unknown to headless backend".into(),
            })?;
        let id = TextureId(self.next_texture);
        self.next_texture += 1;
        self.loaded.insert(id, path.to_path_buf());
        trace!("headless: loaded {:?} as {:?} ({}x{})", path, id, width, height);
        Ok(TextureInfo { id, width, height })
    }

    fn unload(&mut self, id: TextureId) {
        if let Some(path) = self.loaded.remove(&id) {
            trace!("headless: unloaded {:?} ({:?})", id, path);
        }
    }
}

impl Backend for HeadlessBackend {
    fn begin_frame(&mut self, input: &mut InputState) {
        self.frame += 1;
        input.begin_frame();
        if let Some(events) = self.script.get(&self.frame) {
            for &(key, down) in events {
                input.set_key(key, down);
            }
        }
    }

    fn frame_time(&mut self) -> f32 {
        self.step
    }

    fn present(&mut self, frame: &DrawList) {
        self.presented += 1;
        self.last_command_count = frame.len();
        trace!(
            "headless: frame {} presented {} commands ({} outlines, {} sprites)",
            self.frame,
            frame.len(),
            frame.outline_count(),
            frame.sprite_count()
        );
    }

    fn should_close(&self) -> bool {
        self.max_frames.is_some_and(|max| self.frame >= max)
    }

    fn screen_size(&self) -> (u32, u32) {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_texture_fails_without_placeholder() {
        let mut backend = HeadlessBackend::new(0.1, 100, 100);
        let err = backend.load(Path::new("missing.png"), false).unwrap_err();
        assert!(matches!(err, EngineError::TextureLoad { .. }));
    }

    #[test]
    fn registered_and_placeholder_textures_load() {
        let mut backend = HeadlessBackend::new(0.1, 100, 100)
            .with_texture("ship.png", 32, 16)
            .with_placeholder_textures(8, 8);
        let ship = backend.load(Path::new("ship.png"), false).unwrap();
        assert_eq!((ship.width, ship.height), (32, 16));
        let other = backend.load(Path::new("rock.png"), true).unwrap();
        assert_eq!((other.width, other.height), (8, 8));
        assert_ne!(ship.id, other.id);
        assert_eq!(backend.loaded_texture_count(), 2);
        backend.unload(ship.id);
        assert_eq!(backend.loaded_texture_count(), 1);
    }

    #[test]
    fn scripted_keys_and_frame_limit() {
        let mut backend = HeadlessBackend::new(0.1, 100, 100)
            .with_frame_limit(2)
            .script_key(2, InputKey::Enter, true);
        let mut input = InputState::new();

        backend.begin_frame(&mut input);
        assert!(!input.is_key_down(InputKey::Enter));
        assert!(!backend.should_close());

        backend.begin_frame(&mut input);
        assert!(input.is_key_pressed(InputKey::Enter));
        assert!(backend.should_close());
    }
}
