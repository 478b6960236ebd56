//! Named camera presets that derive a full keypoint set from scene geometry.
//!
//! Every generator is deterministic and takes only the scene objects and a duration.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::autoframe::MAX_FOCUS_OBJECTS;
use crate::bounds::SceneBounds;
use crate::data::{Keypoint, SceneObject};
use crate::interp::easing::AnimationStyle;
use crate::interp::functions::{add, max_component, Vec3, ZERO};

/// Angular steps for the orbit preset; emits `ORBIT_STEPS + 1` keypoints.
pub const ORBIT_STEPS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    Orbit,
    FlyThrough,
    ZoomIn,
    Panoramic,
    FocusSequence,
}

/// Catalog entry describing a preset to hosts and UIs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetInfo {
    pub id: Preset,
    pub name: String,
    pub description: String,
    pub style: AnimationStyle,
    pub default_duration: f32,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Self::Orbit,
        Self::FlyThrough,
        Self::ZoomIn,
        Self::Panoramic,
        Self::FocusSequence,
    ];

    /// Strict lookup by id (`"orbit"`, `"fly-through"`, ...).
    pub fn parse(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "orbit" => Some(Self::Orbit),
            "fly-through" => Some(Self::FlyThrough),
            "zoom-in" => Some(Self::ZoomIn),
            "panoramic" => Some(Self::Panoramic),
            "focus-sequence" => Some(Self::FocusSequence),
            _ => None,
        }
    }

    /// Lenient lookup: unknown ids resolve to `Orbit`.
    pub fn from_name(id: &str) -> Self {
        Self::parse(id).unwrap_or_else(|| {
            log::warn!("unknown camera preset '{id}', falling back to orbit");
            Self::Orbit
        })
    }

    #[inline]
    pub fn id(&self) -> &'static str {
        match self {
            Self::Orbit => "orbit",
            Self::FlyThrough => "fly-through",
            Self::ZoomIn => "zoom-in",
            Self::Panoramic => "panoramic",
            Self::FocusSequence => "focus-sequence",
        }
    }

    pub fn info(&self) -> PresetInfo {
        let (name, description, style, default_duration) = match self {
            Self::Orbit => (
                "Orbital View",
                "Smooth orbital camera movement around the main object",
                AnimationStyle::Cinematic,
                30.0,
            ),
            Self::FlyThrough => (
                "Fly Through",
                "Camera flies through the scene showing different perspectives",
                AnimationStyle::Dramatic,
                45.0,
            ),
            Self::ZoomIn => (
                "Zoom In",
                "Gradual zoom into important details",
                AnimationStyle::Educational,
                20.0,
            ),
            Self::Panoramic => (
                "Panoramic Sweep",
                "Wide panoramic view of the entire scene",
                AnimationStyle::Smooth,
                35.0,
            ),
            Self::FocusSequence => (
                "Focus Sequence",
                "Sequential focus on different objects in the scene",
                AnimationStyle::Educational,
                60.0,
            ),
        };
        PresetInfo {
            id: *self,
            name: name.to_string(),
            description: description.to_string(),
            style,
            default_duration,
        }
    }

    /// Generate keypoints for this preset.
    pub fn keypoints(&self, objects: &[SceneObject], duration: f32) -> Vec<Keypoint> {
        let keypoints = match self {
            Self::Orbit => orbit(objects, duration),
            Self::FlyThrough => fly_through(objects, duration),
            Self::ZoomIn => zoom_in(objects, duration),
            Self::Panoramic => panoramic(objects, duration),
            Self::FocusSequence => focus_sequence(objects, duration),
        };
        log::debug!(
            "preset '{}' produced {} keypoints over {}s",
            self.id(),
            keypoints.len(),
            duration
        );
        keypoints
    }
}

/// Catalog of every preset, in display order.
pub fn catalog() -> Vec<PresetInfo> {
    Preset::ALL.iter().map(Preset::info).collect()
}

/// Circle the scene center at 1.5x the scene diameter, slightly raised.
pub fn orbit(objects: &[SceneObject], duration: f32) -> Vec<Keypoint> {
    let bounds = SceneBounds::from_objects(objects);
    let center = bounds.center();
    let radius = bounds.diameter() * 1.5;

    (0..=ORBIT_STEPS)
        .map(|i| {
            let progress = i as f32 / ORBIT_STEPS as f32;
            let angle = progress * TAU;
            Keypoint::new(
                progress * duration,
                add(
                    center,
                    [angle.cos() * radius, radius * 0.3, angle.sin() * radius],
                ),
                center,
            )
            .with_description(format!("Orbital position {}", i + 1))
        })
        .collect()
}

/// Sweep diagonally across the scene through a point above the origin.
pub fn fly_through(objects: &[SceneObject], duration: f32) -> Vec<Keypoint> {
    let SceneBounds { min, max } = SceneBounds::from_objects(objects);
    vec![
        Keypoint::new(
            0.0,
            [min[0] - 10.0, max[1] + 5.0, max[2] + 10.0],
            [max[0], min[1], min[2]],
        )
        .with_description("Fly-through start"),
        Keypoint::new(duration * 0.5, [0.0, max[1], 0.0], ZERO)
            .with_description("Fly-through middle"),
        Keypoint::new(
            duration,
            [max[0] + 10.0, min[1] - 5.0, min[2] - 10.0],
            [min[0], max[1], max[2]],
        )
        .with_description("Fly-through end"),
    ]
}

/// Push in from a wide view to a close view of the main object.
pub fn zoom_in(objects: &[SceneObject], duration: f32) -> Vec<Keypoint> {
    let positioned = || objects.iter().filter(|obj| obj.position.is_some());
    let main = positioned()
        .find(|obj| obj.is_high_importance())
        .or_else(|| positioned().next());

    let Some((target, obj)) = main.and_then(|obj| obj.position.map(|p| (p, obj))) else {
        return vec![
            Keypoint::new(0.0, [10.0, 10.0, 10.0], ZERO).with_description("Zoom start"),
            Keypoint::new(duration, [2.0, 2.0, 2.0], ZERO).with_description("Zoom end"),
        ];
    };

    let s = max_component(obj.extent());
    vec![
        Keypoint::new(0.0, add(target, [s * 10.0, s * 8.0, s * 10.0]), target)
            .with_description("Zoom start - wide view"),
        Keypoint::new(duration, add(target, [s * 2.0, s * 1.5, s * 2.0]), target)
            .with_description("Zoom end - close view"),
    ]
}

/// Sweep left -> front -> right around the center at a fixed height.
pub fn panoramic(objects: &[SceneObject], duration: f32) -> Vec<Keypoint> {
    let bounds = SceneBounds::from_objects(objects);
    let center = bounds.center();
    let diameter = bounds.diameter();
    let distance = diameter * 2.0;
    let height = center[1] + diameter * 0.8;

    let at = |x: f32, z: f32| -> Vec3 { [x, height, z] };
    vec![
        Keypoint::new(0.0, at(center[0] - distance, center[2]), center)
            .with_description("Panoramic start - left"),
        Keypoint::new(
            duration * 0.5,
            at(center[0], center[2] + distance),
            center,
        )
        .with_description("Panoramic middle - front"),
        Keypoint::new(duration, at(center[0] + distance, center[2]), center)
            .with_description("Panoramic end - right"),
    ]
}

/// One close shot per high-importance object; orbit when there are none.
pub fn focus_sequence(objects: &[SceneObject], duration: f32) -> Vec<Keypoint> {
    let important: Vec<(&SceneObject, Vec3)> = objects
        .iter()
        .filter(|obj| obj.is_high_importance())
        .filter_map(|obj| obj.position.map(|p| (obj, p)))
        .take(MAX_FOCUS_OBJECTS)
        .collect();

    if important.is_empty() {
        return orbit(objects, duration);
    }

    let time_per_object = duration / important.len() as f32;
    important
        .iter()
        .enumerate()
        .map(|(index, (obj, position))| {
            let s = max_component(obj.extent());
            Keypoint::new(
                index as f32 * time_per_object,
                add(*position, [s * 3.0, s * 2.0, s * 3.0]),
                *position,
            )
            .with_description(format!("Focus on {}", obj.name))
        })
        .collect()
}
