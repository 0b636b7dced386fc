//! Player ship and bullet behavior.
//!
//! The playfield writes the player's intent into [`ShipControls`]; the ship's
//! states read it back, so input handling and flight model stay apart.

use crate::components::Component;
use crate::components::sprite::Sprite;
use crate::gameobject::{GameObject, State};
use crate::math::Vec2;

/// Radians per second.
pub const TURN_SPEED: f32 = 3.5;
/// Units per second squared.
pub const THRUST: f32 = 240.0;
pub const MAX_SPEED: f32 = 360.0;
/// Fraction of speed lost per second while drifting.
pub const DRAG: f32 = 0.4;
pub const BULLET_LIFETIME: f32 = 1.5;

const ANIM_IDLE: usize = 0;
const ANIM_THRUST: usize = 1;

/// Player intent for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ShipControls {
    pub thrust: bool,
    /// -1 (clockwise) to 1 (counter-clockwise).
    pub turn: f32,
}

impl Component for ShipControls {}

fn controls(object: &GameObject) -> ShipControls {
    object.get_component::<ShipControls>().copied().unwrap_or_default()
}

/// Unit vector the object's nose points at.
pub fn heading(object: &GameObject) -> Vec2 {
    Vec2::new(object.rotation().cos(), object.rotation().sin())
}

fn steer(object: &mut GameObject, dt: f32) {
    let turn = controls(object).turn;
    if turn != 0.0 {
        object.update_rotation(turn * TURN_SPEED * dt);
    }
}

fn play(object: &mut GameObject, anim: usize) {
    if let Some(sprite) = object.get_component_mut::<Sprite>() {
        sprite.play_animation(anim);
    }
}

/// Coasting with drag.
#[derive(Debug, Default, Clone, Copy)]
pub struct Drifting;

impl State for Drifting {
    fn name(&self) -> &'static str {
        "drifting"
    }

    fn enter(&mut self, object: &mut GameObject) {
        play(object, ANIM_IDLE);
    }

    fn update(&mut self, object: &mut GameObject, dt: f32) {
        steer(object, dt);
        let damping = (1.0 - DRAG * dt).max(0.0);
        object.set_velocity(object.velocity() * damping);
    }

    fn test_for_exit(&mut self, object: &GameObject) -> Option<Box<dyn State>> {
        controls(object).thrust.then(|| Box::new(Thrusting) as Box<dyn State>)
    }
}

/// Accelerating along the heading.
#[derive(Debug, Default, Clone, Copy)]
pub struct Thrusting;

impl State for Thrusting {
    fn name(&self) -> &'static str {
        "thrusting"
    }

    fn enter(&mut self, object: &mut GameObject) {
        play(object, ANIM_THRUST);
    }

    fn update(&mut self, object: &mut GameObject, dt: f32) {
        steer(object, dt);
        object.update_velocity(heading(object) * (THRUST * dt));
        let speed = object.velocity().length();
        if speed > MAX_SPEED {
            object.set_velocity(object.velocity() * (MAX_SPEED / speed));
        }
    }

    fn test_for_exit(&mut self, object: &GameObject) -> Option<Box<dyn State>> {
        (!controls(object).thrust).then(|| Box::new(Drifting) as Box<dyn State>)
    }
}

/// Bullet in flight. Self-destructs after [`BULLET_LIFETIME`] seconds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Flying;

impl State for Flying {
    fn name(&self) -> &'static str {
        "flying"
    }

    fn update(&mut self, object: &mut GameObject, _dt: f32) {
        if object.time_in_state() >= BULLET_LIFETIME {
            object.destroy();
        }
    }
}
