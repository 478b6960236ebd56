//! Wire request shapes accepted by [`crate::CameraEngine`].
//!
//! Field names follow the host JSON (camelCase). Styles and presets arrive as
//! free strings and are resolved leniently by the engine.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::{Keypoint, SceneData};
use crate::preview::DEFAULT_PREVIEW_RESOLUTION;

fn default_style() -> String {
    "educational".to_string()
}

fn default_auto_duration() -> f32 {
    60.0
}

fn default_preset_duration() -> f32 {
    30.0
}

fn default_resolution() -> u32 {
    DEFAULT_PREVIEW_RESOLUTION
}

fn default_preset() -> String {
    "orbit".to_string()
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnimationRequest {
    pub scene_id: String,
    pub duration: f32,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(alias = "keypoints")]
    pub key_points: Vec<Keypoint>,
    /// Falls back to `EngineConfig::default_fps`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutoKeyframesRequest {
    pub scene_data: SceneData,
    #[serde(default = "default_auto_duration")]
    pub duration: f32,
    #[serde(default)]
    pub focus_points: Vec<String>,
}

impl AutoKeyframesRequest {
    pub fn focus_set(&self) -> HashSet<String> {
        self.focus_points.iter().cloned().collect()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    #[serde(alias = "keypoints")]
    pub key_points: Vec<Keypoint>,
    #[serde(default = "default_resolution")]
    pub resolution: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetRequest {
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default)]
    pub scene_data: SceneData,
    #[serde(default = "default_preset_duration")]
    pub duration: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_defaults() {
        let req: CreateAnimationRequest = serde_json::from_str(
            r#"{
                "sceneId": "s1",
                "duration": 10,
                "keyPoints": [
                    {"time": 0, "position": [0,0,0], "target": [0,0,0]},
                    {"time": 10, "position": [10,0,0], "target": [0,0,0], "description": "end"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(req.style, "educational");
        assert_eq!(req.fps, None);
        assert_eq!(req.key_points.len(), 2);
        assert_eq!(req.key_points[1].description.as_deref(), Some("end"));
    }

    #[test]
    fn auto_request_defaults_and_focus() {
        let req: AutoKeyframesRequest = serde_json::from_str(
            r#"{"sceneData": {"objects": [{"name": "a", "position": [1,2,3]}]},
                "focusPoints": ["a", "a"]}"#,
        )
        .unwrap();
        assert_eq!(req.duration, 60.0);
        assert_eq!(req.focus_set().len(), 1);
        assert_eq!(req.scene_data.objects[0].position, Some([1.0, 2.0, 3.0]));
    }

    #[test]
    fn preview_and_preset_defaults() {
        let req: PreviewRequest = serde_json::from_str(r#"{"keypoints": []}"#).unwrap();
        assert_eq!(req.resolution, 30);

        let req: PresetRequest = serde_json::from_str(r#"{"preset": "zoom-in"}"#).unwrap();
        assert_eq!(req.duration, 30.0);
        assert!(req.scene_data.objects.is_empty());
    }

    #[test]
    fn wrong_vector_length_is_rejected() {
        let res: Result<AutoKeyframesRequest, _> = serde_json::from_str(
            r#"{"sceneData": {"objects": [{"name": "a", "position": [1,2]}]}}"#,
        );
        assert!(res.is_err());
    }
}
