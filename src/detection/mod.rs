pub mod preprocessing;
pub mod postprocessing;
pub mod yolo;

use image::RgbImage;

use crate::error::HazardResult;
use crate::models::Detection;

pub use yolo::{YoloDetector, YoloParams};

/// Object detector seam.
///
/// Implementations are loaded once at startup and shared read-only for every
/// analysis run, so `detect` takes `&self`. Detections scoring below
/// `confidence_threshold` are dropped here, never by callers.
pub trait Detector: Send + Sync {
    /// Detect objects in an RGB image. `confidence_threshold` must lie in `[0, 1]`.
    fn detect(&self, image: &RgbImage, confidence_threshold: f32) -> HazardResult<Vec<Detection>>;

    /// Class labels indexed by class id
    fn class_names(&self) -> &[String];
}

/// Largest square model input accepted
pub const MAX_INPUT_SIZE: u32 = 4096;

/// Default label set for the hazard model
pub const DEFAULT_CLASS_LABELS: [&str; 3] = ["Stagnant water", "Trash", "Blocked drain"];

/// Label for a class id, falling back to `class_<id>` when the label list is short
pub fn class_label(class_names: &[String], class_id: usize) -> String {
    class_names
        .get(class_id)
        .cloned()
        .unwrap_or_else(|| format!("class_{}", class_id))
}
