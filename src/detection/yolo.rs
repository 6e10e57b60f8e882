use image::RgbImage;
use rten::Model;
use rten_tensor::NdTensor;
use rten_tensor::prelude::*;
use std::path::Path;

use crate::detection::{Detector, MAX_INPUT_SIZE};
use crate::detection::postprocessing::{self, DecodeParams};
use crate::detection::preprocessing;
use crate::error::{HazardError, HazardResult, check_threshold};
use crate::models::Detection;

#[derive(Debug, Clone)]
pub struct YoloParams {
    pub input_size: u32,        // 640 typical
    pub iou_threshold: f32,     // 0..1
    pub max_detections: usize,  // e.g. 300
}

impl Default for YoloParams {
    fn default() -> Self {
        Self {
            input_size: 640,
            iou_threshold: 0.45,
            max_detections: 300,
        }
    }
}

/// YOLOv8-style detector exported to the `.rten` format
pub struct YoloDetector {
    model: Model,
    class_names: Vec<String>,
    params: YoloParams,
}

impl YoloDetector {
    /// Load the model weights. A missing or unreadable file is a `ModelLoad` error.
    pub fn load(path: &Path, class_names: Vec<String>, params: YoloParams) -> HazardResult<Self> {
        let model_load = |reason: String| HazardError::ModelLoad {
            path: path.display().to_string(),
            reason,
        };

        if !path.exists() {
            return Err(model_load("file not found".to_string()));
        }
        if params.input_size == 0 || params.input_size > MAX_INPUT_SIZE {
            return Err(model_load(format!(
                "input size must be within 1..={}, got {}",
                MAX_INPUT_SIZE, params.input_size
            )));
        }

        let model = Model::load_file(path).map_err(|e| model_load(e.to_string()))?;

        tracing::info!(
            model = %path.display(),
            classes = class_names.len(),
            input_size = params.input_size,
            "Detection model loaded"
        );

        Ok(Self {
            model,
            class_names,
            params,
        })
    }
}

impl Detector for YoloDetector {
    fn detect(&self, image: &RgbImage, confidence_threshold: f32) -> HazardResult<Vec<Detection>> {
        let confidence_threshold = check_threshold(confidence_threshold)?;

        let size = self.params.input_size as usize;
        let input = preprocessing::to_model_input(image, self.params.input_size);
        let tensor = NdTensor::from_data([1, 3, size, size], input.data);

        let output = self
            .model
            .run_one(tensor.view().into(), None)
            .map_err(|e| HazardError::Inference(e.to_string()))?;
        let output: NdTensor<f32, 3> = output
            .try_into()
            .map_err(|e| HazardError::Inference(format!("unexpected output tensor: {:?}", e)))?;

        let [_batch, num_attrs, num_candidates] = output.shape();
        let data = output.to_vec();

        let params = DecodeParams {
            confidence_threshold,
            iou_threshold: self.params.iou_threshold,
            max_detections: self.params.max_detections,
            gain_x: input.gain_x,
            gain_y: input.gain_y,
            pad_x: input.pad_x,
            pad_y: input.pad_y,
            image_width: image.width(),
            image_height: image.height(),
        };

        let detections = postprocessing::decode_candidates(
            &data,
            num_attrs,
            num_candidates,
            &self.class_names,
            &params,
        );

        tracing::debug!(
            candidates = num_candidates,
            kept = detections.len(),
            threshold = confidence_threshold,
            "Inference complete"
        );

        Ok(detections)
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }
}
