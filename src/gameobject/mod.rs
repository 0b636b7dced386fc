//! Positioned, updatable scene entity.
//!
//! A [`GameObject`] owns its local transform (position, rotation, scale and
//! velocity), a lazily rebuilt world matrix, a [`ComponentRegistry`] and a
//! behavioral [`State`]. Removal from the scene is the owner's job; objects
//! only raise a destroy flag.
//!
//! The world matrix is `T(position) * R(rotation) * S(scale)`. Every mutator of
//! position, rotation or scale marks it dirty and [`GameObject::matrix`]
//! rebuilds it on the next read. The cache lives in [`Cell`]s so reads only
//! need `&self`, which lets collision queries borrow both objects at once.

pub mod state;

use std::cell::Cell;

use log::debug;

use crate::components::collision::Collision;
use crate::components::sprite::Sprite;
use crate::components::{Component, ComponentRegistry};
use crate::math::{Affine2D, Vec2};
use crate::render::Canvas;

pub use state::{Idle, State};

pub struct GameObject {
    position: Vec2,
    velocity: Vec2,
    rotation: f32,
    scale: Vec2,
    matrix: Cell<Affine2D>,
    dirty: Cell<bool>,
    destroyed: bool,
    state: Option<Box<dyn State>>,
    pending_state: Option<Box<dyn State>>,
    previous_state: Option<&'static str>,
    time_in_state: f32,
    components: ComponentRegistry,
    #[cfg(test)]
    rebuilds: Cell<usize>,
}

impl GameObject {
    /// Create an object and enter its initial [`Idle`] state.
    pub fn new(position: Vec2, rotation: f32, scale: Vec2) -> Self {
        let mut object = Self {
            position,
            velocity: Vec2::ZERO,
            rotation,
            scale,
            matrix: Cell::new(Affine2D::IDENTITY),
            dirty: Cell::new(true),
            destroyed: false,
            state: None,
            pending_state: None,
            previous_state: None,
            time_in_state: 0.0,
            components: ComponentRegistry::new(),
            #[cfg(test)]
            rebuilds: Cell::new(0),
        };
        object.enter_state(Box::new(Idle));
        object
    }

    /// Unrotated, unscaled object at `position`.
    pub fn at(position: Vec2) -> Self {
        Self::new(position, 0.0, Vec2::ONE)
    }

    // Transform ---------------------------------------------------------

    /// World matrix, rebuilt first if any transform input changed.
    pub fn matrix(&self) -> Affine2D {
        if self.dirty.get() {
            let matrix = Affine2D::build_translation_v(self.position)
                * Affine2D::build_rotation(self.rotation)
                * Affine2D::build_scale_v(self.scale);
            self.matrix.set(matrix);
            self.dirty.set(false);
            #[cfg(test)]
            self.rebuilds.set(self.rebuilds.get() + 1);
        }
        self.matrix.get()
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Rotation in radians, counter-clockwise.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.dirty.set(true);
    }

    /// Move by `delta`.
    pub fn update_position(&mut self, delta: Vec2) {
        self.position += delta;
        self.dirty.set(true);
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn update_velocity(&mut self, delta: Vec2) {
        self.velocity += delta;
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.dirty.set(true);
    }

    pub fn update_rotation(&mut self, delta: f32) {
        self.rotation += delta;
        self.dirty.set(true);
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.dirty.set(true);
    }

    // Lifecycle ---------------------------------------------------------

    pub fn destroy(&mut self) {
        self.destroyed = true;
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Queue a transition. It is applied during the next [`GameObject::update`],
    /// after the current state's `test_for_exit`. A later request in the same
    /// frame replaces an earlier one.
    pub fn change_state(&mut self, next: Box<dyn State>) {
        self.pending_state = Some(next);
    }

    pub fn current_state_name(&self) -> &'static str {
        self.state.as_ref().map_or("none", |s| s.name())
    }

    pub fn previous_state_name(&self) -> Option<&'static str> {
        self.previous_state
    }

    pub fn has_pending_state(&self) -> bool {
        self.pending_state.is_some()
    }

    /// Seconds since the current state was entered.
    pub fn time_in_state(&self) -> f32 {
        self.time_in_state
    }

    /// Advance one frame: state machine, then velocity, then components.
    pub fn update(&mut self, dt: f32) {
        self.time_in_state += dt;
        if let Some(mut state) = self.state.take() {
            state.update(self, dt);
            if let Some(next) = state.test_for_exit(self) {
                self.pending_state = Some(next);
            }
            self.state = Some(state);
        }
        if let Some(next) = self.pending_state.take() {
            self.enter_state(next);
        }

        if !self.velocity.is_zero() {
            self.update_position(self.velocity * dt);
        }

        self.components.update(dt);
    }

    fn enter_state(&mut self, mut next: Box<dyn State>) {
        if let Some(mut old) = self.state.take() {
            old.exit(self);
            debug!("State {} -> {}", old.name(), next.name());
            self.previous_state = Some(old.name());
        }
        self.time_in_state = 0.0;
        next.enter(self);
        self.state = Some(next);
    }

    // Components --------------------------------------------------------

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut ComponentRegistry {
        &mut self.components
    }

    /// Install `component`, replacing any previous one of the same kind.
    pub fn add_component<T: Component>(&mut self, component: T) -> bool {
        self.components.add(component)
    }

    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components.get::<T>()
    }

    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components.get_mut::<T>()
    }

    pub fn remove_component<T: Component>(&mut self) -> bool {
        self.components.remove::<T>()
    }

    // Queries -----------------------------------------------------------

    /// Draw the sprite and, if `show_collision`, the collision outline under
    /// `camera * matrix()`.
    pub fn draw<C: Canvas>(&self, camera: &Affine2D, canvas: &mut C, show_collision: bool) {
        let display = *camera * self.matrix();
        if let Some(sprite) = self.components.get::<Sprite>() {
            sprite.draw(canvas, &display);
        }
        if show_collision {
            if let Some(collision) = self.components.get::<Collision>() {
                collision.draw(canvas, &display);
            }
        }
    }

    pub fn does_collide_with(&self, other: &GameObject) -> bool {
        self.components
            .get::<Collision>()
            .is_some_and(|c| c.does_collide_with(self, other))
    }

    pub fn does_collide_with_point(&self, point: Vec2) -> bool {
        self.components
            .get::<Collision>()
            .is_some_and(|c| c.does_collide_with_point(self, point))
    }
}

impl Default for GameObject {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

impl std::fmt::Debug for GameObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameObject")
            .field("position", &self.position)
            .field("velocity", &self.velocity)
            .field("rotation", &self.rotation)
            .field("scale", &self.scale)
            .field("destroyed", &self.destroyed)
            .field("state", &self.current_state_name())
            .field("time_in_state", &self.time_in_state)
            .field("components", &self.components)
            .finish()
    }
}
