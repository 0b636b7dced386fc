//! Components attachable to a [`GameObject`](crate::gameobject::GameObject).
//!
//! A component is a capability owned by exactly one object for its whole
//! lifetime. Objects keep them in a [`ComponentRegistry`] keyed by type, so an
//! object holds at most one instance of each kind.
//!
//! Submodules overview:
//! - [`animation`] – frame sequences with per-frame durations
//! - [`collision`] – rectangle/circle collision shapes and overlap rules
//! - [`group`] – tag naming the collision group an object belongs to
//! - [`registry`] – type-keyed owner of an object's components
//! - [`sprite`] – textured, animated visual representation

pub mod animation;
pub mod collision;
pub mod group;
pub mod registry;
pub mod sprite;

use std::any::Any;

pub use registry::ComponentRegistry;

/// Upcast helper implemented for every sized `'static` type.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A capability attached to a game object.
///
/// `update` receives the frame delta after the owner has run its state
/// machine and integrated velocity.
pub trait Component: AsAny {
    fn update(&mut self, _dt: f32) {}
}
