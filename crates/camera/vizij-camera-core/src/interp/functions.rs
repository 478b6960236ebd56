//! Vector helpers:
//! - lerp_f32 / lerp_vec3 (unclamped linear blend)
//! - add / sub / scale / midpoint component-wise arithmetic
//! - expand_bounds (grow an AABB by a position +/- extent)

use crate::bounds::SceneBounds;

/// Three-component float vector, serialized as `[x, y, z]`.
pub type Vec3 = [f32; 3];

pub const ZERO: Vec3 = [0.0, 0.0, 0.0];
pub const ONE: Vec3 = [1.0, 1.0, 1.0];
pub const UP: Vec3 = [0.0, 1.0, 0.0];

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-axis `a + (b - a) * t`.
/// `t` is not clamped; values outside [0,1] extrapolate along the segment.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(a: Vec3, s: f32) -> Vec3 {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    [
        (a[0] + b[0]) / 2.0,
        (a[1] + b[1]) / 2.0,
        (a[2] + b[2]) / 2.0,
    ]
}

#[inline]
pub fn max_component(a: Vec3) -> f32 {
    a[0].max(a[1]).max(a[2])
}

#[inline]
pub fn is_finite(a: Vec3) -> bool {
    a.iter().all(|c| c.is_finite())
}

/// Grow `bounds` so it contains `position - extent` and `position + extent` on every axis.
/// The full extent is applied to both sides (not halved).
#[inline]
pub fn expand_bounds(bounds: &mut SceneBounds, position: Vec3, extent: Vec3) {
    for axis in 0..3 {
        bounds.min[axis] = bounds.min[axis].min(position[axis] - extent[axis]);
        bounds.max[axis] = bounds.max[axis].max(position[axis] + extent[axis]);
    }
}
