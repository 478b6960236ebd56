//! Vizij Camera Core (engine-agnostic)
//!
//! Generates camera keypoints from scene geometry (automatic framing and named
//! presets), sequences them into fixed-rate camera frames, annotates pacing by
//! style, and densifies keypoints for path previews. Everything is pure and
//! synchronous; `CameraEngine` is a thin facade holding only configuration.

pub mod animation;
pub mod autoframe;
pub mod baking;
pub mod bounds;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod interp;
pub mod presets;
pub mod preview;
pub mod requests;
pub mod sampling;

// Re-exports for consumers (hosts, adapters)
pub use animation::{
    build_animation, export_animation_json, Animation, AnimationMetadata, AnimationParams,
    AnimationSettings,
};
pub use autoframe::{auto_keyframes, auto_keyframes_with_limit, MAX_FOCUS_OBJECTS};
pub use baking::{frame_count, generate_frames, DEFAULT_FOV, DEFAULT_FPS};
pub use bounds::SceneBounds;
pub use config::EngineConfig;
pub use data::{CameraFrame, Importance, Keypoint, PreviewPoint, SceneData, SceneObject};
pub use engine::CameraEngine;
pub use error::CameraError;
pub use interp::{apply_easing, lerp_vec3, AnimationStyle, InterpolationLabel, Vec3};
pub use presets::{catalog, Preset, PresetInfo};
pub use preview::{preview, preview_summary, PreviewSummary};
pub use requests::{
    AutoKeyframesRequest, CreateAnimationRequest, PresetRequest, PreviewRequest,
};
pub use sampling::{sample_at, sort_keypoints};

pub type Result<T> = std::result::Result<T, CameraError>;
