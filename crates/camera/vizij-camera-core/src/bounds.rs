//! Scene bounds derived from object positions and scales.

use serde::{Deserialize, Serialize};

use crate::data::SceneObject;
use crate::interp::functions::{expand_bounds, max_component, midpoint, sub, Vec3};

/// Box used when the scene has no positioned objects.
pub const DEFAULT_MIN: Vec3 = [-10.0, -10.0, -10.0];
pub const DEFAULT_MAX: Vec3 = [10.0, 10.0, 10.0];

/// Axis-aligned box enclosing all scene geometry.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SceneBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl SceneBounds {
    /// Inverted box that any expansion replaces.
    pub(crate) fn empty() -> Self {
        Self {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
        }
    }

    /// Compute bounds over every positioned object, each inflated by its scale.
    /// Falls back to the default box when no object carries a position.
    pub fn from_objects(objects: &[SceneObject]) -> Self {
        let mut bounds = Self::empty();
        let mut counted = 0usize;
        for obj in objects {
            let Some(position) = obj.position else {
                continue;
            };
            expand_bounds(&mut bounds, position, obj.extent());
            counted += 1;
        }

        if counted == 0 {
            if !objects.is_empty() {
                log::warn!(
                    "none of {} scene objects has a position; using default bounds",
                    objects.len()
                );
            }
            return Self::default();
        }
        if counted < objects.len() {
            log::warn!(
                "skipped {} scene objects without a position",
                objects.len() - counted
            );
        }
        log::debug!("scene bounds min={:?} max={:?}", bounds.min, bounds.max);
        bounds
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        midpoint(self.min, self.max)
    }

    /// Per-axis extent (`max - min`).
    #[inline]
    pub fn size(&self) -> Vec3 {
        sub(self.max, self.min)
    }

    /// Largest axis extent, used as the framing diameter by presets.
    #[inline]
    pub fn diameter(&self) -> f32 {
        max_component(self.size())
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        (0..3).all(|axis| point[axis] >= self.min[axis] && point[axis] <= self.max[axis])
    }
}
