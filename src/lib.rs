//! MSFR Engine library.
//!
//! The simulation core of a small 2D engine: affine transforms, game objects
//! with type-keyed components, rectangle/circle collision and per-object and
//! scene-level state machines. Rendering, texture decoding and windowing sit
//! behind the narrow traits in [`render`].
//!
//! Module overview:
//! - [`components`] – components attachable to game objects (collision, sprite, ...)
//! - [`engine`] – frame loop and the per-frame context handed to screens
//! - [`error`] – engine error type
//! - [`events`] – event types produced by engine passes
//! - [`game`] – the bundled demo game
//! - [`gameobject`] – game objects and their behavioral state machine
//! - [`math`] – vectors, rectangles, affine transforms and randomness
//! - [`render`] – renderer/loader traits and backends
//! - [`resources`] – engine-wide state: config, time, input, camera, screens, objects
//! - [`systems`] – passes over many objects (collision)

pub mod components;
pub mod engine;
pub mod error;
pub mod events;
pub mod game;
pub mod gameobject;
pub mod math;
pub mod render;
pub mod resources;
pub mod systems;
