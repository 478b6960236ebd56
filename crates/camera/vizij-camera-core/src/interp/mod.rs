//! Interpolation helpers and easing curves.
//!
//! Frame positions are always blended linearly (`functions`); style curves in
//! `easing` only annotate frames with a smoothness value.

pub mod easing;
pub mod functions;

pub use easing::{apply_easing, AnimationStyle, InterpolationLabel};
pub use functions::{lerp_vec3, Vec3};
