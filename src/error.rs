use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HazardError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to load detection model from {path}: {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Confidence threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f32),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type HazardResult<T> = Result<T, HazardError>;

/// Reject thresholds outside the closed unit interval (NaN included)
pub fn check_threshold(threshold: f32) -> HazardResult<f32> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(HazardError::InvalidThreshold(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert!(check_threshold(0.0).is_ok());
        assert!(check_threshold(1.0).is_ok());
        assert!(check_threshold(0.45).is_ok());
        assert!(check_threshold(-0.01).is_err());
        assert!(check_threshold(1.5).is_err());
        assert!(check_threshold(f32::NAN).is_err());
    }

    #[test]
    fn test_error_display_formatting() {
        let err = HazardError::InvalidThreshold(1.5);
        assert_eq!(
            err.to_string(),
            "Confidence threshold must be within [0, 1], got 1.5"
        );

        let err = HazardError::ModelLoad {
            path: "/models/best.rten".to_string(),
            reason: "file not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load detection model from /models/best.rten: file not found"
        );
    }
}
