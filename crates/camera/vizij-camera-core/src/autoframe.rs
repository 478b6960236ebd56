//! Automatic keypoints: an opening wide shot, focus shots on important
//! objects, and a closing shot.

use std::collections::HashSet;

use crate::bounds::SceneBounds;
use crate::data::{Keypoint, SceneObject};
use crate::error::CameraError;
use crate::interp::functions::{add, max_component, scale, Vec3};
use crate::sampling::prepare_keypoints;

/// Default number of focus shots.
pub const MAX_FOCUS_OBJECTS: usize = 4;

const OPENING_OFFSET: Vec3 = [0.8, 0.5, 0.8];
const CLOSING_OFFSET: Vec3 = [-0.6, 0.7, 0.6];
const OPENING_DISTANCE_FACTOR: f32 = 2.0;
const FOCUS_DISTANCE_FACTOR: f32 = 3.0;

/// Generate keypoints with the default focus cap.
pub fn auto_keyframes(
    objects: &[SceneObject],
    duration: f32,
    focus_points: &HashSet<String>,
) -> Result<Vec<Keypoint>, CameraError> {
    auto_keyframes_with_limit(objects, duration, focus_points, MAX_FOCUS_OBJECTS)
}

/// Objects that earn a focus shot: high importance or named in `focus_points`,
/// with a position, in scene order, at most `limit`.
pub fn select_focus_objects<'a>(
    objects: &'a [SceneObject],
    focus_points: &HashSet<String>,
    limit: usize,
) -> Vec<&'a SceneObject> {
    objects
        .iter()
        .filter(|obj| obj.position.is_some())
        .filter(|obj| obj.is_high_importance() || focus_points.contains(&obj.name))
        .take(limit)
        .collect()
}

pub fn auto_keyframes_with_limit(
    objects: &[SceneObject],
    duration: f32,
    focus_points: &HashSet<String>,
    limit: usize,
) -> Result<Vec<Keypoint>, CameraError> {
    if objects.is_empty() {
        return Err(CameraError::invalid(
            "Scene data with at least one object is required",
        ));
    }
    if !duration.is_finite() || duration <= 0.0 {
        return Err(CameraError::invalid(format!(
            "Duration must be a positive number of seconds (got {duration})"
        )));
    }

    let bounds = SceneBounds::from_objects(objects);
    let center = bounds.center();
    let opening_distance = bounds.diameter() * OPENING_DISTANCE_FACTOR;

    let focus = select_focus_objects(objects, focus_points, limit);
    let mut keypoints = Vec::with_capacity(focus.len() + 2);

    keypoints.push(
        Keypoint::new(
            0.0,
            add(center, scale(OPENING_OFFSET, opening_distance)),
            center,
        )
        .with_description("Opening wide shot of the scene"),
    );

    let time_per_object = duration / (focus.len() + 1) as f32;
    for (index, obj) in focus.iter().enumerate() {
        let Some(position) = obj.position else {
            continue;
        };
        let focus_distance = max_component(obj.extent()) * FOCUS_DISTANCE_FACTOR;
        keypoints.push(
            Keypoint::new(
                time_per_object * (index + 1) as f32,
                add(position, [focus_distance; 3]),
                position,
            )
            .with_description(format!("Focus on {}", obj.name)),
        );
    }

    keypoints.push(
        Keypoint::new(
            duration,
            add(center, scale(CLOSING_OFFSET, opening_distance)),
            center,
        )
        .with_description("Closing panoramic view"),
    );

    let keypoints = prepare_keypoints(&keypoints)?;
    log::info!(
        "generated {} automatic keypoints ({} focus shots) over {}s",
        keypoints.len(),
        focus.len(),
        duration
    );
    Ok(keypoints)
}
