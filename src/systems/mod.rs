//! Engine passes that work across many objects at once.
//!
//! Submodules overview
//! - [`collision`] – brute-force pairwise overlap checks and collision rules
pub mod collision;
