//! Error types for the camera engine

use serde::{Deserialize, Serialize};

/// Errors raised while validating camera engine inputs.
///
/// Every failure is detected before any interpolation work starts, so a call
/// either returns a complete result or one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CameraError {
    /// Caller supplied keypoints, scene data or timing the engine cannot use
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl CameraError {
    /// Create a new invalid-input error
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Human readable reason without the error prefix
    #[inline]
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidInput { reason } => reason,
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "validation",
        }
    }
}

impl From<serde_json::Error> for CameraError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput {
            reason: format!("malformed request: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = CameraError::invalid("At least 2 keypoints are required");
        assert!(matches!(error, CameraError::InvalidInput { .. }));
        assert_eq!(error.reason(), "At least 2 keypoints are required");
        assert_eq!(
            error.to_string(),
            "Invalid input: At least 2 keypoints are required"
        );
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(CameraError::invalid("x").category(), "validation");
    }

    #[test]
    fn test_json_error_maps_to_invalid_input() {
        let err = serde_json::from_str::<Vec<f32>>("[1, 2,").unwrap_err();
        let error: CameraError = err.into();
        assert!(error.reason().starts_with("malformed request"));
    }

    #[test]
    fn test_serialization() {
        let error = CameraError::invalid("test");
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: CameraError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
