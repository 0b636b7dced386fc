//! Texture cache.
//!
//! Textures are loaded once per `(path, enable_texel)` pair through the
//! backend's [`TextureLoader`] and handed out as [`TextureInfo`] handles after
//! that. The backend keeps the GPU resources; this store only remembers what
//! was loaded so repeated requests are free and teardown can release
//! everything.

use std::path::{Path, PathBuf};

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::error::EngineResult;
use crate::render::{TextureId, TextureInfo, TextureLoader};

type Key = (PathBuf, bool);

#[derive(Debug, Default)]
pub struct TextureManager {
    map: FxHashMap<Key, TextureInfo>,
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached texture or load it through `loader`.
    pub fn load(
        &mut self,
        loader: &mut dyn TextureLoader,
        path: &Path,
        enable_texel: bool,
    ) -> EngineResult<TextureInfo> {
        let key = (path.to_path_buf(), enable_texel);
        if let Some(info) = self.map.get(&key) {
            return Ok(*info);
        }
        let info = loader.load(path, enable_texel)?;
        debug!("Loaded texture {:?} ({}x{})", path, info.width, info.height);
        self.map.insert(key, info);
        Ok(info)
    }

    pub fn get(&self, path: &Path, enable_texel: bool) -> Option<TextureInfo> {
        self.map.get(&(path.to_path_buf(), enable_texel)).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Forget and release a single texture.
    pub fn release(&mut self, loader: &mut dyn TextureLoader, id: TextureId) {
        self.map.retain(|_, info| info.id != id);
        loader.unload(id);
    }

    /// Release every cached texture.
    pub fn unload(&mut self, loader: &mut dyn TextureLoader) {
        if self.map.is_empty() {
            return;
        }
        info!("Clear Textures ({})", self.map.len());
        for (_, info) in self.map.drain() {
            loader.unload(info.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::headless::HeadlessBackend;

    #[test]
    fn second_load_hits_cache() {
        let mut backend = HeadlessBackend::new(0.1, 10, 10).with_texture("a.png", 4, 4);
        let mut store = TextureManager::new();

        let first = store.load(&mut backend, Path::new("a.png"), false).unwrap();
        let second = store.load(&mut backend, Path::new("a.png"), false).unwrap();
        assert_eq!(first, second);
        assert_eq!(backend.loaded_texture_count(), 1);
        assert_eq!(store.get(Path::new("a.png"), false), Some(first));
    }

    #[test]
    fn texel_flag_is_part_of_the_key() {
        let mut backend = HeadlessBackend::new(0.1, 10, 10).with_texture("a.png", 4, 4);
        let mut store = TextureManager::new();
        let plain = store.load(&mut backend, Path::new("a.png"), false).unwrap();
        let texel = store.load(&mut backend, Path::new("a.png"), true).unwrap();
        assert_ne!(plain.id, texel.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let mut backend = HeadlessBackend::new(0.1, 10, 10);
        let mut store = TextureManager::new();
        assert!(store.load(&mut backend, Path::new("missing.png"), false).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn unload_releases_everything() {
        let mut backend = HeadlessBackend::new(0.1, 10, 10).with_placeholder_textures(2, 2);
        let mut store = TextureManager::new();
        store.load(&mut backend, Path::new("a.png"), false).unwrap();
        let b = store.load(&mut backend, Path::new("b.png"), false).unwrap();

        store.release(&mut backend, b.id);
        assert_eq!(store.len(), 1);
        assert_eq!(backend.loaded_texture_count(), 1);

        store.unload(&mut backend);
        assert!(store.is_empty());
        assert_eq!(backend.loaded_texture_count(), 0);
    }
}
