//! Engine-wide resources.
//!
//! Long-lived data owned by the [`Engine`](crate::engine::Engine) or by a
//! screen and shared with the code that runs each frame.
//!
//! Overview
//! - `camera` – world → screen transform
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – screens, the screen manager and pending transitions
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `objectmanager` – scene-level owner of game objects and collision rules
//! - `texturestore` – loaded textures keyed by path
//! - `worldtime` – simulation time, delta clamping and FPS telemetry
pub mod camera;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod objectmanager;
pub mod texturestore;
pub mod worldtime;
