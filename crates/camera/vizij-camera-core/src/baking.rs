//! Frame sequencing: bake sorted keypoints into per-frame camera states.

use crate::data::{CameraFrame, Keypoint};
use crate::error::CameraError;
use crate::sampling::{sample_pose, validate_keypoints};

/// Default playback rate (Hz).
pub const DEFAULT_FPS: u32 = 30;
/// Default vertical field of view (degrees); not interpolated between keypoints.
pub const DEFAULT_FOV: f32 = 75.0;

/// Upper bound on frames in one sequence.
pub const MAX_FRAMES: u32 = 1 << 20;

/// Number of frames for `duration` seconds at `fps`: `ceil(duration * fps)`.
/// `None` when the product is not finite or exceeds [`MAX_FRAMES`].
pub fn frame_count(duration: f32, fps: u32) -> Option<usize> {
    let raw = (duration * fps as f32).ceil();
    if !raw.is_finite() || raw < 0.0 || raw > MAX_FRAMES as f32 {
        return None;
    }
    Some(raw as usize)
}

/// Check duration/fps and return the frame count (at least 2).
pub fn validate_timing(duration: f32, fps: u32) -> Result<usize, CameraError> {
    if !duration.is_finite() || duration <= 0.0 {
        return Err(CameraError::invalid(format!(
            "Duration must be a positive number of seconds (got {duration})"
        )));
    }
    if fps == 0 {
        return Err(CameraError::invalid("fps must be at least 1"));
    }
    let n = frame_count(duration, fps).ok_or_else(|| {
        CameraError::invalid(format!(
            "Animation of {duration}s at {fps} fps exceeds the limit of {MAX_FRAMES} frames"
        ))
    })?;
    if n < 2 {
        return Err(CameraError::invalid(format!(
            "Animation of {duration}s at {fps} fps yields {n} frame(s); at least 2 are required"
        )));
    }
    Ok(n)
}

/// Sample `keypoints` (already sorted by time) into `ceil(duration * fps)` frames.
///
/// Frame `f` lands at `f / (N - 1) * duration`, so the first frame is at 0 and the
/// last exactly at `duration`. Position and target are blended linearly inside the
/// bracketing segment; `fov` is constant and `up` is +Y. No smoothness is attached.
pub fn generate_frames(
    keypoints: &[Keypoint],
    duration: f32,
    fps: u32,
    fov: f32,
) -> Result<Vec<CameraFrame>, CameraError> {
    validate_keypoints(keypoints)?;
    let n = validate_timing(duration, fps)?;
    if keypoints.windows(2).any(|w| w[1].time < w[0].time) {
        return Err(CameraError::invalid("Keypoints must be sorted by time"));
    }

    let last = (n - 1) as f64;
    let mut frames = Vec::with_capacity(n);
    for f in 0..n {
        let time = if f == n - 1 {
            duration
        } else {
            (f as f64 / last * f64::from(duration)) as f32
        };
        let index = u32::try_from(f)
            .map_err(|_| CameraError::invalid(format!("frame index {f} does not fit in u32")))?;
        let (position, target) = sample_pose(keypoints, time);
        frames.push(CameraFrame::new(index, time, position, target, fov));
    }
    log::debug!(
        "sequenced {} frames over {}s from {} keypoints",
        frames.len(),
        duration,
        keypoints.len()
    );
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dolly() -> Vec<Keypoint> {
        vec![
            Keypoint::new(0.0, [0.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            Keypoint::new(10.0, [10.0, 0.0, 0.0], [10.0, 0.0, -1.0]),
        ]
    }

    #[test]
    fn frame_count_is_ceiling() {
        assert_eq!(frame_count(10.0, 1), Some(10));
        assert_eq!(frame_count(1.0, 30), Some(30));
        assert_eq!(frame_count(0.5, 5), Some(3));
        assert_eq!(frame_count(2.01, 10), Some(21));
    }

    #[test]
    fn oversized_frame_counts_are_rejected() {
        assert_eq!(frame_count(600.0, u32::MAX), None);
        assert_eq!(frame_count(f32::INFINITY, 30), None);
        assert_eq!(frame_count(1.0, MAX_FRAMES), Some(MAX_FRAMES as usize));
        let err = generate_frames(&dolly(), 600.0, u32::MAX, DEFAULT_FOV).unwrap_err();
        assert!(err.reason().contains("exceeds the limit"));
    }

    #[test]
    fn endpoints_land_on_zero_and_duration() {
        let frames = generate_frames(&dolly(), 10.0, 1, DEFAULT_FOV).unwrap();
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[0].time, 0.0);
        assert_eq!(frames[9].time, 10.0);
        assert_eq!(frames[0].position, [0.0, 0.0, 0.0]);
        assert_eq!(frames[9].position, [10.0, 0.0, 0.0]);
        for (i, f) in frames.iter().enumerate() {
            assert_eq!(f.frame_index as usize, i);
            assert!((f.position[0] - f.time).abs() < 1e-4);
            assert_eq!(f.fov, DEFAULT_FOV);
            assert_eq!(f.up, [0.0, 1.0, 0.0]);
            assert!(f.smoothness.is_none());
        }
    }

    #[test]
    fn times_are_monotonic() {
        let frames = generate_frames(&dolly(), 3.3, 24, 60.0).unwrap();
        assert_eq!(Some(frames.len()), frame_count(3.3, 24));
        for w in frames.windows(2) {
            assert!(w[1].time > w[0].time);
        }
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(generate_frames(&dolly()[..1], 10.0, 30, DEFAULT_FOV).is_err());
        assert!(generate_frames(&dolly(), 0.0, 30, DEFAULT_FOV).is_err());
        assert!(generate_frames(&dolly(), -2.0, 30, DEFAULT_FOV).is_err());
        assert!(generate_frames(&dolly(), f32::NAN, 30, DEFAULT_FOV).is_err());
        assert!(generate_frames(&dolly(), 10.0, 0, DEFAULT_FOV).is_err());
        // ceil(0.03 * 30) == 1 frame
        assert!(generate_frames(&dolly(), 0.03, 30, DEFAULT_FOV).is_err());
    }

    #[test]
    fn rejects_unsorted_keypoints() {
        let mut kps = dolly();
        kps.reverse();
        assert!(generate_frames(&kps, 10.0, 30, DEFAULT_FOV).is_err());
    }

    #[test]
    fn frames_past_last_keypoint_hold_pose() {
        let kps = vec![
            Keypoint::new(0.0, [0.0, 0.0, 0.0], [0.0; 3]),
            Keypoint::new(5.0, [5.0, 0.0, 0.0], [0.0; 3]),
        ];
        let frames = generate_frames(&kps, 10.0, 2, DEFAULT_FOV).unwrap();
        let last = frames.last().unwrap();
        assert_eq!(last.time, 10.0);
        assert_eq!(last.position, [5.0, 0.0, 0.0]);
    }
}
