//! Frame loop.
//!
//! [`Engine`] owns the backend and every engine-wide resource and drives one
//! frame per [`Engine::tick`]:
//!
//! 1. pump input through the backend
//! 2. clamp and scale the frame delta ([`WorldTime`]), log FPS telemetry
//! 3. update the game state manager (applies pending screen transitions)
//! 4. record the active screen's draw calls and present them
//!
//! Screens never see the engine itself. They get an [`EngineContext`], a
//! bundle of borrows into the engine's resources rebuilt every frame.

use std::path::Path;

use log::info;

use crate::components::sprite::Sprite;
use crate::error::EngineResult;
use crate::render::{Backend, DrawList, TextureId, TextureInfo, TextureLoader};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameScreen, GameStateManager, NextGameState};
use crate::resources::input::{InputKey, InputState};
use crate::resources::texturestore::TextureManager;
use crate::resources::worldtime::{FpsCounter, WorldTime};

/// What a screen may read and touch during a frame.
pub struct EngineContext<'a> {
    pub loader: &'a mut dyn TextureLoader,
    pub textures: &'a mut TextureManager,
    pub input: &'a InputState,
    pub time: &'a WorldTime,
    pub config: &'a GameConfig,
    /// Write here to request a screen transition.
    pub next_state: &'a mut NextGameState,
    pub screen_size: (u32, u32),
    /// Collision outlines requested (config or the debug key).
    pub debug: bool,
}

impl EngineContext<'_> {
    /// Cached texture load.
    pub fn load_texture(&mut self, path: &Path, enable_texel: bool) -> EngineResult<TextureInfo> {
        self.textures.load(&mut *self.loader, path, enable_texel)
    }

    /// Load a sprite sheet, sharing its texture with earlier loads.
    pub fn load_sprite(&mut self, path: &Path) -> EngineResult<Sprite> {
        Sprite::load(path, self)
    }
}

impl TextureLoader for EngineContext<'_> {
    fn load(&mut self, path: &Path, enable_texel: bool) -> EngineResult<TextureInfo> {
        self.load_texture(path, enable_texel)
    }

    fn unload(&mut self, id: TextureId) {
        self.textures.release(&mut *self.loader, id);
    }
}

pub struct Engine<B: Backend> {
    backend: B,
    config: GameConfig,
    textures: TextureManager,
    input: InputState,
    time: WorldTime,
    fps: FpsCounter,
    states: GameStateManager,
    next_state: NextGameState,
    frame: DrawList,
    debug: bool,
    frames: u64,
}

impl<B: Backend> Engine<B> {
    pub fn new(backend: B, config: GameConfig, screens: Vec<Box<dyn GameScreen>>) -> Self {
        info!(
            "Engine init: {} screens, {}x{}",
            screens.len(),
            backend.screen_size().0,
            backend.screen_size().1
        );
        Self {
            time: WorldTime::default()
                .with_time_scale(config.time_scale)
                .with_max_delta(config.max_delta),
            fps: FpsCounter::new(config.fps_log_interval),
            debug: config.show_collision,
            backend,
            config,
            textures: TextureManager::new(),
            input: InputState::new(),
            states: GameStateManager::new(screens),
            next_state: NextGameState::new(),
            frame: DrawList::new(),
            frames: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn states(&self) -> &GameStateManager {
        &self.states
    }

    pub fn time(&self) -> &WorldTime {
        &self.time
    }

    pub fn textures(&self) -> &TextureManager {
        &self.textures
    }

    pub fn last_frame(&self) -> &DrawList {
        &self.frame
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Run one frame. Returns `false` once the game ended or the backend
    /// wants to close.
    pub fn tick(&mut self) -> EngineResult<bool> {
        self.backend.begin_frame(&mut self.input);
        let raw_dt = self.backend.frame_time();
        self.fps.tick(raw_dt);
        let dt = self.time.advance(raw_dt);

        if self.input.is_key_pressed(InputKey::Debug) {
            self.debug = !self.debug;
            info!("Debug drawing {}", if self.debug { "on" } else { "off" });
        }

        let screen_size = self.backend.screen_size();
        let mut ctx = EngineContext {
            loader: &mut self.backend,
            textures: &mut self.textures,
            input: &self.input,
            time: &self.time,
            config: &self.config,
            next_state: &mut self.next_state,
            screen_size,
            debug: self.debug,
        };
        self.states.update(&mut ctx, dt)?;

        self.frame.clear();
        self.states.draw(&ctx, &mut self.frame);
        self.backend.present(&self.frame);
        self.frames += 1;

        Ok(!self.states.has_game_ended() && !self.backend.should_close())
    }

    /// Tick until the game ends or the backend closes, then tear down.
    pub fn run(&mut self) -> EngineResult<()> {
        let result = loop {
            match self.tick() {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        self.shutdown();
        result
    }

    /// Unload the active screen and every cached texture.
    pub fn shutdown(&mut self) {
        let screen_size = self.backend.screen_size();
        let mut ctx = EngineContext {
            loader: &mut self.backend,
            textures: &mut self.textures,
            input: &self.input,
            time: &self.time,
            config: &self.config,
            next_state: &mut self.next_state,
            screen_size,
            debug: self.debug,
        };
        self.states.unload_current(&mut ctx);
        self.textures.unload(&mut self.backend);
        info!("Engine shutdown after {} frames", self.frames);
    }
}
