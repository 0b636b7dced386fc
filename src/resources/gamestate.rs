//! Scene-level game states ("screens").
//!
//! A game is an ordered list of [`GameScreen`]s (splash, menu, playfield, ...)
//! with at most one active. Screens ask for a different screen by writing to
//! [`NextGameState`] through their [`EngineContext`]; the
//! [`GameStateManager`] applies the request at the start of the next update,
//! never inside the requesting screen's own update:
//!
//! 1. unload the current screen
//! 2. load the requested one
//! 3. run its update for the frame

use log::{info, warn};

use crate::engine::EngineContext;
use crate::error::{EngineError, EngineResult};
use crate::render::DrawList;

/// One top-level application mode.
pub trait GameScreen {
    fn name(&self) -> &'static str;

    /// Acquire resources. Failures abort the transition and surface to the
    /// engine loop.
    fn load(&mut self, ctx: &mut EngineContext) -> EngineResult<()>;

    fn update(&mut self, ctx: &mut EngineContext, dt: f32);

    fn draw(&self, ctx: &EngineContext, frame: &mut DrawList);

    /// Release what `load` acquired.
    fn unload(&mut self, ctx: &mut EngineContext);
}

/// Representation of a requested next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(usize),
    Reload,
    Shutdown,
}

/// Intent to change to a new game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current transition request.
    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to screen `index`.
    pub fn set(&mut self, index: usize) {
        self.next = NextGameStates::Pending(index);
    }

    /// Request the current screen be unloaded and loaded again.
    pub fn reload(&mut self) {
        self.next = NextGameStates::Reload;
    }

    /// Request the game end after the current frame.
    pub fn shutdown(&mut self) {
        self.next = NextGameStates::Shutdown;
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }

    /// Return the request and reset.
    pub fn take(&mut self) -> NextGameStates {
        std::mem::take(&mut self.next)
    }
}

pub struct GameStateManager {
    screens: Vec<Box<dyn GameScreen>>,
    current: Option<usize>,
    next: NextGameState,
    game_ended: bool,
}

impl GameStateManager {
    /// The first screen, if any, is loaded on the first update.
    pub fn new(screens: Vec<Box<dyn GameScreen>>) -> Self {
        let mut next = NextGameState::new();
        if !screens.is_empty() {
            next.set(0);
        }
        Self {
            screens,
            current: None,
            next,
            game_ended: false,
        }
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn current_name(&self) -> Option<&'static str> {
        self.current.map(|i| self.screens[i].name())
    }

    /// Queue a switch to screen `index`, applied on the next update.
    pub fn set_next_state(&mut self, index: usize) -> EngineResult<()> {
        if index >= self.screens.len() {
            return Err(EngineError::UnknownState(index));
        }
        self.next.set(index);
        Ok(())
    }

    pub fn reload_state(&mut self) {
        self.next.reload();
    }

    pub fn shutdown(&mut self) {
        self.next.shutdown();
    }

    pub fn has_game_ended(&self) -> bool {
        self.game_ended
    }

    /// Apply any pending transition, then update the active screen. Requests
    /// the screen makes through `ctx.next_state` are picked up for the next
    /// call.
    pub fn update(&mut self, ctx: &mut EngineContext, dt: f32) -> EngineResult<()> {
        if self.game_ended {
            return Ok(());
        }
        self.apply_pending(ctx)?;
        if self.game_ended {
            return Ok(());
        }
        if let Some(i) = self.current {
            self.screens[i].update(ctx, dt);
        }
        let requested = ctx.next_state.take();
        if requested != NextGameStates::Unchanged {
            self.next = NextGameState { next: requested };
        }
        Ok(())
    }

    pub fn draw(&self, ctx: &EngineContext, frame: &mut DrawList) {
        if self.game_ended {
            return;
        }
        if let Some(i) = self.current {
            self.screens[i].draw(ctx, frame);
        }
    }

    /// Unload the active screen, if any. Used on engine teardown.
    pub fn unload_current(&mut self, ctx: &mut EngineContext) {
        if let Some(i) = self.current.take() {
            info!("Unloading {}", self.screens[i].name());
            self.screens[i].unload(ctx);
        }
    }

    fn apply_pending(&mut self, ctx: &mut EngineContext) -> EngineResult<()> {
        match self.next.take() {
            NextGameStates::Unchanged => Ok(()),
            NextGameStates::Pending(index) if index >= self.screens.len() => {
                warn!("Ignoring transition to unknown state {}", index);
                Ok(())
            }
            NextGameStates::Pending(index) => {
                info!(
                    "Transitioning from {} to {}",
                    self.current_name().unwrap_or("none"),
                    self.screens[index].name()
                );
                self.unload_current(ctx);
                self.screens[index].load(ctx)?;
                self.current = Some(index);
                Ok(())
            }
            NextGameStates::Reload => match self.current.take() {
                Some(index) => {
                    info!("Reloading {}", self.screens[index].name());
                    self.screens[index].unload(ctx);
                    self.screens[index].load(ctx)?;
                    self.current = Some(index);
                    Ok(())
                }
                None => Ok(()),
            },
            NextGameStates::Shutdown => {
                info!("Game ended");
                self.unload_current(ctx);
                self.game_ended = true;
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::headless::HeadlessBackend;
    use crate::resources::gameconfig::GameConfig;
    use crate::resources::input::InputState;
    use crate::resources::texturestore::TextureManager;
    use crate::resources::worldtime::WorldTime;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    struct Screen {
        name: &'static str,
        log: Log,
        request: Option<usize>,
        fail_reload: bool,
        loads: usize,
    }

    impl Screen {
        fn new(name: &'static str, log: &Log, request: Option<usize>) -> Self {
            Self {
                name,
                log: log.clone(),
                request,
                fail_reload: false,
                loads: 0,
            }
        }
    }

    impl GameScreen for Screen {
        fn name(&self) -> &'static str {
            self.name
        }
        fn load(&mut self, _ctx: &mut EngineContext) -> EngineResult<()> {
            self.log.borrow_mut().push(format!("{}:load", self.name));
            self.loads += 1;
            if self.fail_reload && self.loads > 1 {
                return Err(EngineError::Config(format!("{} cannot reload", self.name)));
            }
            Ok(())
        }
        fn update(&mut self, ctx: &mut EngineContext, _dt: f32) {
            self.log.borrow_mut().push(format!("{}:update", self.name));
            if let Some(next) = self.request.take() {
                ctx.next_state.set(next);
            }
        }
        fn draw(&self, _ctx: &EngineContext, _frame: &mut DrawList) {}
        fn unload(&mut self, _ctx: &mut EngineContext) {
            self.log.borrow_mut().push(format!("{}:unload", self.name));
        }
    }

    struct Harness {
        backend: HeadlessBackend,
        textures: TextureManager,
        input: InputState,
        time: WorldTime,
        config: GameConfig,
        next_state: NextGameState,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                backend: HeadlessBackend::new(0.1, 100, 100),
                textures: TextureManager::new(),
                input: InputState::new(),
                time: WorldTime::default(),
                config: GameConfig::new(),
                next_state: NextGameState::new(),
            }
        }

        fn ctx(&mut self) -> EngineContext<'_> {
            EngineContext {
                loader: &mut self.backend,
                textures: &mut self.textures,
                input: &self.input,
                time: &self.time,
                config: &self.config,
                next_state: &mut self.next_state,
                screen_size: (100, 100),
                debug: false,
            }
        }
    }

    fn manager(log: &Log) -> GameStateManager {
        GameStateManager::new(vec![
            Box::new(Screen::new("splash", log, Some(1))),
            Box::new(Screen::new("menu", log, None)),
        ])
    }

    #[test]
    fn screen_request_applies_on_next_update() {
        let log: Log = Rc::default();
        let mut states = manager(&log);
        let mut harness = Harness::new();

        states.update(&mut harness.ctx(), 0.1).unwrap();
        assert_eq!(states.current_name(), Some("splash"));
        assert_eq!(*log.borrow(), vec!["splash:load", "splash:update"]);

        states.update(&mut harness.ctx(), 0.1).unwrap();
        assert_eq!(states.current(), Some(1));
        assert_eq!(
            *log.borrow(),
            vec!["splash:load", "splash:update", "splash:unload", "menu:load", "menu:update"]
        );
    }

    #[test]
    fn unknown_index_is_rejected() {
        let log: Log = Rc::default();
        let mut states = manager(&log);
        assert!(matches!(states.set_next_state(7), Err(EngineError::UnknownState(7))));
        assert!(states.set_next_state(1).is_ok());
    }

    #[test]
    fn reload_and_shutdown() {
        let log: Log = Rc::default();
        let mut states = GameStateManager::new(vec![Box::new(Screen::new("play", &log, None))]);
        let mut harness = Harness::new();
        states.update(&mut harness.ctx(), 0.1).unwrap();

        states.reload_state();
        states.update(&mut harness.ctx(), 0.1).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["play:load", "play:update", "play:unload", "play:load", "play:update"]
        );

        states.shutdown();
        assert!(!states.has_game_ended());
        states.update(&mut harness.ctx(), 0.1).unwrap();
        assert!(states.has_game_ended());
        assert_eq!(states.current(), None);
        assert_eq!(log.borrow().last().map(String::as_str), Some("play:unload"));

        states.update(&mut harness.ctx(), 0.1).unwrap();
        assert_eq!(log.borrow().len(), 6);
    }

    #[test]
    fn failed_reload_leaves_no_active_screen() {
        let log: Log = Rc::default();
        let mut screen = Screen::new("play", &log, None);
        screen.fail_reload = true;
        let mut states = GameStateManager::new(vec![Box::new(screen)]);
        let mut harness = Harness::new();
        states.update(&mut harness.ctx(), 0.1).unwrap();

        states.reload_state();
        assert!(matches!(
            states.update(&mut harness.ctx(), 0.1),
            Err(EngineError::Config(_))
        ));
        assert_eq!(states.current(), None);

        states.update(&mut harness.ctx(), 0.1).unwrap();
        assert_eq!(
            *log.borrow(),
            vec!["play:load", "play:update", "play:unload", "play:load"]
        );
    }
}
