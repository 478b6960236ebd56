//! Lightweight path preview: densify keypoint pairs without committing to an fps.

use serde::{Deserialize, Serialize};

use crate::data::{Keypoint, PreviewPoint};
use crate::error::CameraError;
use crate::interp::functions::{lerp_f32, lerp_vec3};
use crate::sampling::prepare_keypoints;

pub const DEFAULT_PREVIEW_RESOLUTION: u32 = 30;
/// Hard ceiling on steps per segment.
pub const MAX_PREVIEW_RESOLUTION: u32 = 10_000;

/// Counts reported alongside a preview.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSummary {
    pub original_keypoints: usize,
    pub interpolated_points: usize,
    pub resolution: u32,
}

/// Emit `resolution + 1` points per consecutive keypoint pair.
/// Segment boundaries are emitted by both neighbouring segments.
pub fn preview(keypoints: &[Keypoint], resolution: u32) -> Result<Vec<PreviewPoint>, CameraError> {
    if resolution == 0 || resolution > MAX_PREVIEW_RESOLUTION {
        return Err(CameraError::invalid(format!(
            "Preview resolution must be within 1..={MAX_PREVIEW_RESOLUTION} (got {resolution})"
        )));
    }
    let sorted = prepare_keypoints(keypoints)?;

    let steps = resolution as usize;
    let mut points = Vec::with_capacity((sorted.len() - 1) * (steps + 1));
    for pair in sorted.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        for j in 0..=steps {
            let t = j as f32 / resolution as f32;
            points.push(PreviewPoint {
                time: lerp_f32(a.time, b.time, t),
                position: lerp_vec3(a.position, b.position, t),
                target: lerp_vec3(a.target, b.target, t),
            });
        }
    }

    log::debug!(
        "preview: {} keypoints -> {} points at resolution {}",
        sorted.len(),
        points.len(),
        resolution
    );
    Ok(points)
}

pub fn preview_summary(keypoints: &[Keypoint], points: &[PreviewPoint], resolution: u32) -> PreviewSummary {
    PreviewSummary {
        original_keypoints: keypoints.len(),
        interpolated_points: points.len(),
        resolution,
    }
}
