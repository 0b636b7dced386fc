//! Screen manager integration tests: transitions requested by screens are
//! applied on the following frame, in unload → load order.

use std::cell::RefCell;
use std::rc::Rc;

use msfrengine::engine::{Engine, EngineContext};
use msfrengine::error::{EngineError, EngineResult};
use msfrengine::render::DrawList;
use msfrengine::render::headless::HeadlessBackend;
use msfrengine::resources::gameconfig::GameConfig;
use msfrengine::resources::gamestate::GameScreen;

type Log = Rc<RefCell<Vec<String>>>;

/// What a screen asks for on a given update call (1-based).
#[derive(Clone, Copy)]
enum Request {
    Go(usize),
    Reload,
    Quit,
}

struct Scripted {
    name: &'static str,
    log: Log,
    updates: usize,
    script: Vec<(usize, Request)>,
    fail_load: bool,
}

impl Scripted {
    fn new(name: &'static str, log: &Log) -> Self {
        Self {
            name,
            log: log.clone(),
            updates: 0,
            script: Vec::new(),
            fail_load: false,
        }
    }

    fn on(mut self, update: usize, request: Request) -> Self {
        self.script.push((update, request));
        self
    }
}

impl GameScreen for Scripted {
    fn name(&self) -> &'static str {
        self.name
    }

    fn load(&mut self, _ctx: &mut EngineContext) -> EngineResult<()> {
        self.log.borrow_mut().push(format!("{}:load", self.name));
        self.updates = 0;
        if self.fail_load {
            return Err(EngineError::Config(format!("{} refused to load", self.name)));
        }
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, _dt: f32) {
        self.updates += 1;
        self.log.borrow_mut().push(format!("{}:update", self.name));
        for &(at, request) in &self.script {
            if at == self.updates {
                match request {
                    Request::Go(index) => ctx.next_state.set(index),
                    Request::Reload => ctx.next_state.reload(),
                    Request::Quit => ctx.next_state.shutdown(),
                }
            }
        }
    }

    fn draw(&self, _ctx: &EngineContext, _frame: &mut DrawList) {}

    fn unload(&mut self, _ctx: &mut EngineContext) {
        self.log.borrow_mut().push(format!("{}:unload", self.name));
    }
}

fn engine(screens: Vec<Box<dyn GameScreen>>) -> Engine<HeadlessBackend> {
    Engine::new(HeadlessBackend::new(0.1, 320, 240), GameConfig::new(), screens)
}

#[test]
fn transition_is_deferred_to_next_frame() {
    let log: Log = Rc::default();
    let mut engine = engine(vec![
        Box::new(Scripted::new("a", &log).on(1, Request::Go(1))),
        Box::new(Scripted::new("b", &log)),
    ]);

    assert!(engine.tick().unwrap());
    assert_eq!(engine.states().current_name(), Some("a"));
    assert_eq!(*log.borrow(), vec!["a:load", "a:update"]);

    assert!(engine.tick().unwrap());
    assert_eq!(engine.states().current_name(), Some("b"));
    assert_eq!(
        *log.borrow(),
        vec!["a:load", "a:update", "a:unload", "b:load", "b:update"]
    );
}

#[test]
fn unknown_screen_request_is_ignored() {
    let log: Log = Rc::default();
    let mut engine = engine(vec![Box::new(Scripted::new("a", &log).on(1, Request::Go(42)))]);
    engine.tick().unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.states().current_name(), Some("a"));
    assert_eq!(*log.borrow(), vec!["a:load", "a:update", "a:update"]);
}

#[test]
fn reload_unloads_then_loads_same_screen() {
    let log: Log = Rc::default();
    let mut engine = engine(vec![Box::new(Scripted::new("a", &log).on(2, Request::Reload))]);
    for _ in 0..3 {
        engine.tick().unwrap();
    }
    assert_eq!(
        *log.borrow(),
        vec!["a:load", "a:update", "a:update", "a:unload", "a:load", "a:update"]
    );
}

#[test]
fn shutdown_ends_game_and_unloads() {
    let log: Log = Rc::default();
    let mut engine = engine(vec![Box::new(Scripted::new("a", &log).on(1, Request::Quit))]);
    assert!(engine.tick().unwrap());
    assert!(!engine.tick().unwrap());
    assert!(engine.states().has_game_ended());
    assert_eq!(engine.states().current(), None);
    assert_eq!(*log.borrow(), vec!["a:load", "a:update", "a:unload"]);

    engine.run().unwrap();
    assert_eq!(log.borrow().len(), 3);
}

#[test]
fn load_failure_surfaces_from_tick() {
    let log: Log = Rc::default();
    let mut broken = Scripted::new("b", &log);
    broken.fail_load = true;
    let mut engine = engine(vec![
        Box::new(Scripted::new("a", &log).on(1, Request::Go(1))),
        Box::new(broken),
    ]);
    engine.tick().unwrap();
    assert!(matches!(engine.tick(), Err(EngineError::Config(_))));
}

#[test]
fn empty_game_just_idles() {
    let mut engine = engine(Vec::new());
    assert!(engine.tick().unwrap());
    assert_eq!(engine.states().current_name(), None);
    assert!(engine.states().is_empty());
}
