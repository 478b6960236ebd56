//! Camera data model: keypoints, sampled frames, preview points and scene objects.
//! The `Animation` aggregate lives in animation.rs.

use serde::{Deserialize, Serialize};

use crate::error::CameraError;
use crate::interp::functions::{is_finite, Vec3, ONE, UP};

/// A desired camera pose anchored at a time (seconds).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Keypoint {
    pub time: f32,
    pub position: Vec3,
    pub target: Vec3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keypoint {
    pub fn new(time: f32, position: Vec3, target: Vec3) -> Self {
        Self {
            time,
            position,
            target,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the time is a finite, non-negative number and both vectors are finite.
    pub fn validate(&self) -> Result<(), CameraError> {
        if !self.time.is_finite() || self.time < 0.0 {
            return Err(CameraError::invalid(format!(
                "Keypoint time must be finite and >= 0 (got {})",
                self.time
            )));
        }
        if !is_finite(self.position) || !is_finite(self.target) {
            return Err(CameraError::invalid(format!(
                "Keypoint at t={} has non-finite position or target",
                self.time
            )));
        }
        Ok(())
    }
}

/// One sampled camera pose.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CameraFrame {
    pub frame_index: u32,
    pub time: f32,
    pub position: Vec3,
    pub target: Vec3,
    pub fov: f32,
    pub up: Vec3,
    /// Eased progress attached after sequencing; absent on the first and last frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoothness: Option<f32>,
}

impl CameraFrame {
    pub fn new(frame_index: u32, time: f32, position: Vec3, target: Vec3, fov: f32) -> Self {
        Self {
            frame_index,
            time,
            position,
            target,
            fov,
            up: UP,
            smoothness: None,
        }
    }
}

/// Lightweight interpolation result used for path previews.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PreviewPoint {
    pub time: f32,
    pub position: Vec3,
    pub target: Vec3,
}

/// Relative importance tag carried by scene objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// Scene object as supplied by the scene description.
/// Vectors are fixed-size, so wrong component counts fail at deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SceneObject {
    #[serde(default)]
    pub name: String,
    /// Objects without a position are ignored by bounds and focus selection.
    #[serde(default)]
    pub position: Option<Vec3>,
    #[serde(default)]
    pub scale: Option<Vec3>,
    #[serde(default)]
    pub importance: Option<Importance>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position: Some(position),
            scale: None,
            importance: None,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Scale, defaulting to `[1,1,1]`.
    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.scale.unwrap_or(ONE)
    }

    #[inline]
    pub fn is_high_importance(&self) -> bool {
        self.importance == Some(Importance::High)
    }
}

/// Scene payload wrapper (`{ "objects": [...] }`).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SceneData {
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}
