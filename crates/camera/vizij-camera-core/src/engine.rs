//! Engine: stateless request facade over the keypoint generators, sequencer and preview.
//!
//! Methods:
//! - create_animation, auto_keyframes, preview, preset, presets
//! - `*_json` variants taking and returning serde_json values for hosts

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::animation::{build_animation, Animation, AnimationParams};
use crate::autoframe::auto_keyframes_with_limit;
use crate::config::EngineConfig;
use crate::data::{Keypoint, PreviewPoint};
use crate::error::CameraError;
use crate::interp::easing::AnimationStyle;
use crate::presets::{catalog, Preset, PresetInfo};
use crate::preview::{preview, preview_summary, PreviewSummary};
use crate::requests::{
    AutoKeyframesRequest, CreateAnimationRequest, PresetRequest, PreviewRequest,
};
use crate::Result;

/// Holds configuration only; every call works on its own inputs.
#[derive(Clone, Debug, Default)]
pub struct CameraEngine {
    cfg: EngineConfig,
}

impl CameraEngine {
    pub fn new(cfg: EngineConfig) -> Self {
        Self { cfg }
    }

    /// Like [`CameraEngine::new`] but rejects an invalid configuration.
    pub fn try_new(cfg: EngineConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.cfg
    }

    /// Validate, sort, sequence and annotate a caller-authored keypoint set.
    pub fn create_animation(&self, req: &CreateAnimationRequest) -> Result<Animation> {
        self.cfg
            .check_duration(req.duration)
            .map_err(|err| self.reject("create", err))?;
        let fps = req.fps.unwrap_or(self.cfg.default_fps);
        self.cfg
            .check_fps(fps)
            .map_err(|err| self.reject("create", err))?;
        let style = AnimationStyle::from_label(&req.style);
        let params = AnimationParams {
            scene_id: &req.scene_id,
            duration: req.duration,
            style,
            fps,
            fov: self.cfg.default_fov,
            smoothing: self.cfg.smoothing,
        };
        build_animation(&req.key_points, &params).map_err(|err| self.reject("create", err))
    }

    pub fn auto_keyframes(&self, req: &AutoKeyframesRequest) -> Result<Vec<Keypoint>> {
        self.cfg
            .check_duration(req.duration)
            .map_err(|err| self.reject("auto-keyframes", err))?;
        auto_keyframes_with_limit(
            &req.scene_data.objects,
            req.duration,
            &req.focus_set(),
            self.cfg.max_focus_objects,
        )
        .map_err(|err| self.reject("auto-keyframes", err))
    }

    pub fn preview(&self, req: &PreviewRequest) -> Result<Vec<PreviewPoint>> {
        self.cfg
            .check_preview_resolution(req.resolution)
            .map_err(|err| self.reject("preview", err))?;
        preview(&req.key_points, req.resolution).map_err(|err| self.reject("preview", err))
    }

    /// Preview points plus the counts hosts display next to them.
    pub fn preview_with_summary(
        &self,
        req: &PreviewRequest,
    ) -> Result<(Vec<PreviewPoint>, PreviewSummary)> {
        let points = self.preview(req)?;
        let summary = preview_summary(&req.key_points, &points, req.resolution);
        Ok((points, summary))
    }

    /// Generate a preset; unknown names fall back to orbit.
    pub fn preset(&self, req: &PresetRequest) -> Result<Vec<Keypoint>> {
        self.cfg
            .check_duration(req.duration)
            .map_err(|err| self.reject("preset", err))?;
        let preset = Preset::from_name(&req.preset);
        let keypoints = preset.keypoints(&req.scene_data.objects, req.duration);
        log::info!(
            "generated '{}' preset: {} keypoints over {}s",
            preset.id(),
            keypoints.len(),
            req.duration
        );
        Ok(keypoints)
    }

    pub fn presets(&self) -> Vec<PresetInfo> {
        catalog()
    }

    pub fn create_animation_json(&self, req: serde_json::Value) -> Result<serde_json::Value> {
        handle_json(req, |r: CreateAnimationRequest| self.create_animation(&r))
    }

    pub fn auto_keyframes_json(&self, req: serde_json::Value) -> Result<serde_json::Value> {
        handle_json(req, |r: AutoKeyframesRequest| self.auto_keyframes(&r))
    }

    pub fn preview_json(&self, req: serde_json::Value) -> Result<serde_json::Value> {
        handle_json(req, |r: PreviewRequest| self.preview(&r))
    }

    pub fn preset_json(&self, req: serde_json::Value) -> Result<serde_json::Value> {
        handle_json(req, |r: PresetRequest| self.preset(&r))
    }

    fn reject(&self, op: &str, err: CameraError) -> CameraError {
        log::warn!("{op} rejected ({}): {}", err.category(), err.reason());
        err
    }
}

fn handle_json<Req, Resp>(
    req: serde_json::Value,
    op: impl FnOnce(Req) -> Result<Resp>,
) -> Result<serde_json::Value>
where
    Req: DeserializeOwned,
    Resp: Serialize,
{
    let parsed: Req = serde_json::from_value(req)?;
    let resp = op(parsed)?;
    Ok(serde_json::to_value(resp)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SceneData, SceneObject};

    fn line() -> Vec<Keypoint> {
        vec![
            Keypoint::new(0.0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            Keypoint::new(10.0, [10.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        ]
    }

    fn create(duration: f32, style: &str, fps: Option<u32>) -> CreateAnimationRequest {
        CreateAnimationRequest {
            scene_id: "scene".into(),
            duration,
            style: style.into(),
            key_points: line(),
            fps,
        }
    }

    #[test]
    fn create_uses_config_defaults() {
        let engine = CameraEngine::new(EngineConfig::default().with_fps(12).with_fov(60.0));
        let anim = engine.create_animation(&create(10.0, "smooth", None)).unwrap();
        assert_eq!(anim.settings.fps, 12);
        assert_eq!(anim.frames.len(), 120);
        assert!(anim.frames.iter().all(|f| f.fov == 60.0));
        assert_eq!(anim.metadata.style, AnimationStyle::Smooth);
    }

    #[test]
    fn unknown_style_falls_back() {
        let engine = CameraEngine::default();
        let anim = engine
            .create_animation(&create(10.0, "wobbly", Some(1)))
            .unwrap();
        assert_eq!(anim.metadata.style, AnimationStyle::Educational);
    }

    #[test]
    fn create_rejects_bad_duration() {
        let engine = CameraEngine::default();
        assert!(engine.create_animation(&create(0.0, "smooth", None)).is_err());
        assert!(engine.create_animation(&create(601.0, "smooth", None)).is_err());
    }

    #[test]
    fn create_rejects_unbounded_frame_rate() {
        let engine = CameraEngine::default();
        let err = engine
            .create_animation(&create(600.0, "smooth", Some(u32::MAX)))
            .unwrap_err();
        assert!(err.reason().contains("fps"));
        assert!(engine.create_animation(&create(10.0, "smooth", Some(0))).is_err());
        assert!(engine.create_animation(&create(10.0, "smooth", Some(240))).is_ok());
    }

    #[test]
    fn preview_rejects_unbounded_resolution() {
        let engine = CameraEngine::default();
        let req = PreviewRequest {
            key_points: line(),
            resolution: u32::MAX,
        };
        assert!(engine.preview(&req).is_err());
        let req = PreviewRequest {
            resolution: 1_000,
            ..req
        };
        assert_eq!(engine.preview(&req).unwrap().len(), 1_001);
    }

    #[test]
    fn auto_keyframes_respects_focus_cap() {
        let engine = CameraEngine::new(EngineConfig::default().with_max_focus_objects(1));
        let req = AutoKeyframesRequest {
            scene_data: SceneData {
                objects: vec![
                    SceneObject::new("a", [0.0; 3]),
                    SceneObject::new("b", [4.0, 0.0, 0.0]),
                ],
            },
            duration: 60.0,
            focus_points: vec!["a".into(), "b".into()],
        };
        let kps = engine.auto_keyframes(&req).unwrap();
        assert_eq!(kps.len(), 3);

        let empty = AutoKeyframesRequest {
            scene_data: SceneData::default(),
            ..req
        };
        let err = engine.auto_keyframes(&empty).unwrap_err();
        assert_eq!(err.reason(), "Scene data with at least one object is required");
    }

    #[test]
    fn preset_unknown_name_is_orbit() {
        let engine = CameraEngine::default();
        let req = PresetRequest {
            preset: "spiral".into(),
            scene_data: SceneData::default(),
            duration: 30.0,
        };
        assert_eq!(engine.preset(&req).unwrap().len(), 9);
        assert_eq!(engine.presets().len(), 5);
    }

    #[test]
    fn try_new_validates() {
        assert!(CameraEngine::try_new(EngineConfig::default().with_fps(0)).is_err());
        assert!(CameraEngine::try_new(EngineConfig::default()).is_ok());
    }

    #[test]
    fn json_entry_points() {
        let engine = CameraEngine::default();
        let out = engine
            .preview_json(serde_json::json!({
                "keyPoints": [
                    {"time": 0, "position": [0,0,0], "target": [0,0,0]},
                    {"time": 10, "position": [10,0,0], "target": [0,0,0]}
                ],
                "resolution": 10
            }))
            .unwrap();
        assert_eq!(out.as_array().unwrap().len(), 11);

        let err = engine
            .preview_json(serde_json::json!({"resolution": 10}))
            .unwrap_err();
        assert!(err.reason().starts_with("malformed request"));

        let err = engine
            .create_animation_json(serde_json::json!({
                "sceneId": "s",
                "duration": 5,
                "keyPoints": [{"time": 0, "position": [0,0,0], "target": [0,0,0]}]
            }))
            .unwrap_err();
        assert_eq!(err.category(), "validation");
    }
}
