//! Behavioral state machine hosted by every [`GameObject`].
//!
//! An object is always in exactly one [`State`]. Hooks receive the owning
//! object mutably; the state itself is detached from the object while its
//! hooks run, so a hook can freely touch the object's transform and
//! components.
//!
//! # Transition Flow
//!
//! 1. A hook (or outside code) calls [`GameObject::change_state`], or
//!    `test_for_exit` returns `Some(next)`
//! 2. The request is queued; at the end of the state-machine step of
//!    [`GameObject::update`] the old state's `exit` runs, then the new
//!    state's `enter`, and `time_in_state` resets to 0
//! 3. The new state's `update` first runs on the following frame

use crate::gameobject::GameObject;

pub trait State {
    /// Short label used in logs and queries.
    fn name(&self) -> &'static str;

    /// Runs once when the state becomes current.
    fn enter(&mut self, _object: &mut GameObject) {}

    /// Runs once per frame while current.
    fn update(&mut self, _object: &mut GameObject, _dt: f32) {}

    /// Runs once per frame after `update`. Return the state to switch to.
    fn test_for_exit(&mut self, _object: &GameObject) -> Option<Box<dyn State>> {
        None
    }

    /// Runs once on the outgoing state, right before the next `enter`.
    fn exit(&mut self, _object: &mut GameObject) {}
}

/// Initial state of every object. Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl State for Idle {
    fn name(&self) -> &'static str {
        "idle"
    }
}
