//! Style-driven easing curves.
//!
//! A style is resolved once from its label into [`AnimationStyle`]; the curve is
//! then evaluated against frame-index progress and written to
//! `CameraFrame::smoothness`. Positions and targets are never eased here.

use serde::{Deserialize, Serialize};

use crate::data::CameraFrame;

/// Named animation style chosen by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationStyle {
    /// Smoothstep, zero first derivative at both ends.
    Smooth,
    /// Smootherstep, zero first and second derivative at both ends.
    Cinematic,
    /// Identity curve.
    #[default]
    Educational,
    /// Quadratic ease-in-out.
    Dramatic,
}

/// Descriptive interpolation label stored in animation settings.
/// Metadata only: frame positions are always blended linearly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterpolationLabel {
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "cubic")]
    Cubic,
    #[serde(rename = "bezier")]
    Bezier,
    #[serde(rename = "ease-in-out")]
    EaseInOut,
}

impl InterpolationLabel {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
            Self::Bezier => "bezier",
            Self::EaseInOut => "ease-in-out",
        }
    }
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 4] = [
        Self::Smooth,
        Self::Cinematic,
        Self::Educational,
        Self::Dramatic,
    ];

    /// Strict lookup; `None` for unrecognised labels.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "smooth" => Some(Self::Smooth),
            "cinematic" => Some(Self::Cinematic),
            "educational" => Some(Self::Educational),
            "dramatic" => Some(Self::Dramatic),
            _ => None,
        }
    }

    /// Lenient lookup: unknown labels fall back to `Educational`.
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| {
            log::warn!("unknown animation style '{label}', falling back to educational");
            Self::Educational
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Cinematic => "cinematic",
            Self::Educational => "educational",
            Self::Dramatic => "dramatic",
        }
    }

    #[inline]
    pub fn interpolation_label(&self) -> InterpolationLabel {
        match self {
            Self::Smooth => InterpolationLabel::Cubic,
            Self::Cinematic => InterpolationLabel::Bezier,
            Self::Educational => InterpolationLabel::Linear,
            Self::Dramatic => InterpolationLabel::EaseInOut,
        }
    }

    /// Evaluate the easing curve at progress `t` in [0,1].
    #[inline]
    pub fn ease(&self, t: f32) -> f32 {
        match self {
            Self::Smooth => t * t * (3.0 - 2.0 * t),
            Self::Cinematic => t * t * t * (t * (6.0 * t - 15.0) + 10.0),
            Self::Educational => t,
            Self::Dramatic => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Annotate interior frames with the eased frame-index progress.
/// The first and last frame are left untouched.
pub fn apply_easing(frames: &mut [CameraFrame], style: AnimationStyle) {
    let n = frames.len();
    if n < 3 {
        return;
    }
    let last = n - 1;
    for (index, frame) in frames.iter_mut().enumerate().take(last).skip(1) {
        let progress = index as f32 / last as f32;
        frame.smoothness = Some(style.ease(progress));
    }
}
