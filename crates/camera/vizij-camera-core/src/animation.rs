//! The `Animation` aggregate returned to callers, plus export and resampling.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::baking::{generate_frames, DEFAULT_FOV};
use crate::data::{CameraFrame, Keypoint};
use crate::error::CameraError;
use crate::interp::easing::{apply_easing, AnimationStyle, InterpolationLabel};
use crate::interp::functions::Vec3;
use crate::sampling::{prepare_keypoints, sample_pose, validate_keypoints};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnimationSettings {
    pub fps: u32,
    /// Descriptive label derived from the style; positions are always blended linearly.
    #[serde(rename = "interpolation")]
    pub interpolation_label: InterpolationLabel,
    pub smoothing: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnimationMetadata {
    pub duration: f32,
    pub style: AnimationStyle,
    pub key_point_count: usize,
    pub frame_count: usize,
}

/// Camera animation: sorted keypoints and the frames sequenced from them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub id: Uuid,
    pub scene_id: String,
    pub metadata: AnimationMetadata,
    pub keypoints: Vec<Keypoint>,
    pub frames: Vec<CameraFrame>,
    pub settings: AnimationSettings,
}

/// Inputs for [`build_animation`]; defaults come from `EngineConfig`.
#[derive(Clone, Debug)]
pub struct AnimationParams<'a> {
    pub scene_id: &'a str,
    pub duration: f32,
    pub style: AnimationStyle,
    pub fps: u32,
    pub fov: f32,
    pub smoothing: bool,
}

/// Sort + validate keypoints, sequence frames, annotate smoothness, and wrap the result.
pub fn build_animation(
    keypoints: &[Keypoint],
    params: &AnimationParams<'_>,
) -> Result<Animation, CameraError> {
    let sorted = prepare_keypoints(keypoints)?;
    let mut frames = generate_frames(&sorted, params.duration, params.fps, params.fov)?;
    if params.smoothing {
        apply_easing(&mut frames, params.style);
    }

    log::info!(
        "created {} animation for scene '{}': {}s, {} keypoints, {} frames",
        params.style.name(),
        params.scene_id,
        params.duration,
        sorted.len(),
        frames.len()
    );

    Ok(Animation {
        id: Uuid::new_v4(),
        scene_id: params.scene_id.to_string(),
        metadata: AnimationMetadata {
            duration: params.duration,
            style: params.style,
            key_point_count: sorted.len(),
            frame_count: frames.len(),
        },
        keypoints: sorted,
        frames,
        settings: AnimationSettings {
            fps: params.fps,
            interpolation_label: params.style.interpolation_label(),
            smoothing: params.smoothing,
        },
    })
}

impl Animation {
    #[inline]
    pub fn duration(&self) -> f32 {
        self.metadata.duration
    }

    /// First keypoint strictly after `time`.
    pub fn next_keypoint(&self, time: f32) -> Option<&Keypoint> {
        self.keypoints.iter().find(|kp| kp.time > time)
    }

    /// Last keypoint strictly before `time`.
    pub fn previous_keypoint(&self, time: f32) -> Option<&Keypoint> {
        self.keypoints.iter().rev().find(|kp| kp.time < time)
    }

    /// Frame nearest to `time`, clamped to the animation range.
    pub fn frame_at(&self, time: f32) -> Option<&CameraFrame> {
        let n = self.frames.len();
        if n == 0 {
            return None;
        }
        if n == 1 || self.duration() <= 0.0 {
            return self.frames.first();
        }
        let progress = (time / self.duration()).clamp(0.0, 1.0);
        let index = (progress * (n - 1) as f32).round() as usize;
        self.frames.get(index.min(n - 1))
    }

    /// Interpolated (position, target) at an arbitrary playback time.
    /// Fails when the stored keypoints no longer form a segment (e.g. after editing
    /// or deserializing an animation).
    pub fn pose_at(&self, time: f32) -> Result<(Vec3, Vec3), CameraError> {
        validate_keypoints(&self.keypoints)?;
        if self.keypoints.windows(2).any(|w| w[1].time < w[0].time) {
            return Err(CameraError::invalid("Keypoints must be sorted by time"));
        }
        Ok(sample_pose(&self.keypoints, time))
    }

    /// Regenerate frames at a different rate from the stored keypoints.
    /// Id, scene and style are kept; frame count and settings.fps change.
    pub fn rebake(&self, fps: u32) -> Result<Animation, CameraError> {
        let fov = self.frames.first().map(|f| f.fov).unwrap_or(DEFAULT_FOV);
        let mut frames = generate_frames(&self.keypoints, self.duration(), fps, fov)?;
        if self.settings.smoothing {
            apply_easing(&mut frames, self.metadata.style);
        }
        let mut out = self.clone();
        out.metadata.frame_count = frames.len();
        out.frames = frames;
        out.settings.fps = fps;
        Ok(out)
    }
}

/// Export as serde_json::Value (stable schema for hosts and renderers).
pub fn export_animation_json(animation: &Animation) -> serde_json::Value {
    serde_json::to_value(animation).unwrap_or(serde_json::Value::Null)
}
