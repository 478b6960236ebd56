//! Keypoint ordering, validation and segment sampling.
//!
//! Model:
//! - Keypoints are sorted ascending by time (stable, ties keep input order).
//! - A sample time selects the segment [Ki -> K(i+1)] that contains it; times
//!   before the first keypoint use the first segment and times after the last
//!   keypoint use the last segment.
//! - The local parameter is clamped to [0,1], so out-of-range times hold the
//!   boundary pose. Zero-length segments sample at u = 0.

use std::cmp::Ordering;

use crate::data::Keypoint;
use crate::error::CameraError;
use crate::interp::functions::{lerp_vec3, Vec3};

/// Minimum number of keypoints needed to form a segment.
pub const MIN_KEYPOINTS: usize = 2;

/// Stable sort by time. `-0.0` and `0.0` compare equal and keep input order.
pub fn sort_keypoints(keypoints: &mut [Keypoint]) {
    keypoints.sort_by(|a, b| a.time.partial_cmp(&b.time).unwrap_or(Ordering::Equal));
}

/// Check count and per-keypoint sanity; does not check ordering.
pub fn validate_keypoints(keypoints: &[Keypoint]) -> Result<(), CameraError> {
    if keypoints.len() < MIN_KEYPOINTS {
        return Err(CameraError::invalid(format!(
            "At least {MIN_KEYPOINTS} keypoints are required (got {})",
            keypoints.len()
        )));
    }
    keypoints.iter().try_for_each(Keypoint::validate)
}

/// Validate and return a time-sorted copy.
pub fn prepare_keypoints(keypoints: &[Keypoint]) -> Result<Vec<Keypoint>, CameraError> {
    validate_keypoints(keypoints)?;
    let mut sorted = keypoints.to_vec();
    sort_keypoints(&mut sorted);
    Ok(sorted)
}

/// Find the segment (i, i+1) for `time` and the local parameter u in [0,1].
/// `keypoints` must be sorted and hold at least two entries.
pub fn find_segment(keypoints: &[Keypoint], time: f32) -> (usize, usize, f32) {
    let n = keypoints.len();
    debug_assert!(n >= MIN_KEYPOINTS);

    // Linear scan; keypoint counts stay in the tens.
    let mut i0 = n - 2;
    if time < keypoints[0].time {
        i0 = 0;
    } else {
        for i in 0..(n - 1) {
            if time >= keypoints[i].time && time <= keypoints[i + 1].time {
                i0 = i;
                break;
            }
        }
    }

    let t0 = keypoints[i0].time;
    let t1 = keypoints[i0 + 1].time;
    let span = t1 - t0;
    let u = if span > 0.0 {
        ((time - t0) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (i0, i0 + 1, u)
}

/// Interpolated (position, target) at `time`.
/// `keypoints` must be sorted and hold at least two entries.
pub fn sample_pose(keypoints: &[Keypoint], time: f32) -> (Vec3, Vec3) {
    let (i0, i1, u) = find_segment(keypoints, time);
    let left = &keypoints[i0];
    let right = &keypoints[i1];
    (
        lerp_vec3(left.position, right.position, u),
        lerp_vec3(left.target, right.target, u),
    )
}

/// Checked variant of [`sample_pose`] that sorts and validates its input first.
pub fn sample_at(keypoints: &[Keypoint], time: f32) -> Result<(Vec3, Vec3), CameraError> {
    if !time.is_finite() {
        return Err(CameraError::invalid(format!(
            "Sample time must be finite (got {time})"
        )));
    }
    let sorted = prepare_keypoints(keypoints)?;
    Ok(sample_pose(&sorted, time))
}
