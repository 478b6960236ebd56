//! Core configuration for vizij-camera-core.

use serde::{Deserialize, Serialize};

use crate::baking::{DEFAULT_FOV, DEFAULT_FPS};
use crate::error::CameraError;
use crate::preview::MAX_PREVIEW_RESOLUTION;

/// Engine defaults applied when a request leaves a setting unspecified.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Frame rate used by the sequencer (Hz).
    pub default_fps: u32,
    /// Constant field of view written to every frame (degrees).
    pub default_fov: f32,
    /// Highest frame rate a request may ask for (Hz).
    pub max_fps: u32,
    /// Segments are split into this many steps by the preview interpolator.
    pub preview_resolution: u32,
    /// Highest preview resolution a request may ask for.
    pub max_preview_resolution: u32,
    /// Cap on focus shots emitted by keypoint generators.
    pub max_focus_objects: usize,
    /// Longest accepted animation, in seconds.
    pub max_duration: f32,
    /// Whether frames get a smoothness annotation.
    pub smoothing: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_fps: DEFAULT_FPS,
            default_fov: DEFAULT_FOV,
            max_fps: 240,
            preview_resolution: 30,
            max_preview_resolution: 1_000,
            max_focus_objects: 4,
            max_duration: 600.0,
            smoothing: true,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CameraError> {
        if self.default_fps == 0 {
            return Err(CameraError::invalid("default_fps must be at least 1"));
        }
        if !self.default_fov.is_finite() || self.default_fov <= 0.0 || self.default_fov >= 180.0 {
            return Err(CameraError::invalid(
                "default_fov must be within (0, 180) degrees",
            ));
        }
        if self.default_fps > self.max_fps {
            return Err(CameraError::invalid("default_fps must not exceed max_fps"));
        }
        if self.preview_resolution == 0 {
            return Err(CameraError::invalid("preview_resolution must be at least 1"));
        }
        if self.max_preview_resolution > MAX_PREVIEW_RESOLUTION
            || self.preview_resolution > self.max_preview_resolution
        {
            return Err(CameraError::invalid(format!(
                "preview_resolution must be <= max_preview_resolution <= {MAX_PREVIEW_RESOLUTION}"
            )));
        }
        if !self.max_duration.is_finite() || self.max_duration <= 0.0 {
            return Err(CameraError::invalid(
                "max_duration must be positive and finite",
            ));
        }
        Ok(())
    }

    /// Reject durations that are non-positive or above `max_duration`.
    pub fn check_duration(&self, duration: f32) -> Result<(), CameraError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(CameraError::invalid(format!(
                "Duration must be a positive number of seconds (got {duration})"
            )));
        }
        if duration > self.max_duration {
            return Err(CameraError::invalid(format!(
                "Duration {duration}s exceeds the maximum of {}s",
                self.max_duration
            )));
        }
        Ok(())
    }

    pub fn check_fps(&self, fps: u32) -> Result<(), CameraError> {
        if fps == 0 || fps > self.max_fps {
            return Err(CameraError::invalid(format!(
                "fps must be within 1..={} (got {fps})",
                self.max_fps
            )));
        }
        Ok(())
    }

    pub fn check_preview_resolution(&self, resolution: u32) -> Result<(), CameraError> {
        if resolution == 0 || resolution > self.max_preview_resolution {
            return Err(CameraError::invalid(format!(
                "Preview resolution must be within 1..={} (got {resolution})",
                self.max_preview_resolution
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.default_fps = fps;
        self
    }

    #[inline]
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.default_fov = fov;
        self
    }

    #[inline]
    pub fn with_preview_resolution(mut self, resolution: u32) -> Self {
        self.preview_resolution = resolution;
        self
    }

    #[inline]
    pub fn with_max_fps(mut self, fps: u32) -> Self {
        self.max_fps = fps;
        self
    }

    #[inline]
    pub fn with_max_preview_resolution(mut self, resolution: u32) -> Self {
        self.max_preview_resolution = resolution;
        self
    }

    #[inline]
    pub fn with_max_focus_objects(mut self, count: usize) -> Self {
        self.max_focus_objects = count;
        self
    }

    #[inline]
    pub fn with_max_duration(mut self, seconds: f32) -> Self {
        self.max_duration = seconds;
        self
    }

    #[inline]
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }
}
