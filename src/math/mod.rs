//! Math primitives for the 2D simulation core.
//!
//! Submodules overview:
//! - [`vec2`] – 2D vector used for positions, velocities and scales
//! - [`affine2d`] – 3×3 homogeneous transform and its named builders
//! - [`rect`] – axis-aligned rectangle built from two corner points
//! - [`random`] – thin helpers over `fastrand` for gameplay randomness

pub mod affine2d;
pub mod random;
pub mod rect;
pub mod vec2;

pub use affine2d::Affine2D;
pub use rect::Rect;
pub use vec2::Vec2;
