//! Event types produced by engine passes.
//!
//! Submodules:
//! - [`collision`] – overlapping pairs reported by the collision pass
pub mod collision;
