use crate::detection::class_label;
use crate::models::{BoundingBox, Detection};

/// Settings for turning raw YOLO output into detections
#[derive(Debug, Clone)]
pub struct DecodeParams {
    pub confidence_threshold: f32,
    pub iou_threshold: f32,
    pub max_detections: usize,
    /// Letterbox geometry from preprocessing
    pub gain_x: f32,
    pub gain_y: f32,
    pub pad_x: f32,
    pub pad_y: f32,
    pub image_width: u32,
    pub image_height: u32,
}

/// Decode a YOLOv8 head laid out as `[4 + classes, candidates]` (row-major).
///
/// Rows 0..4 hold centre-x, centre-y, width, height in model pixels; the
/// remaining rows hold per-class scores. Each candidate keeps its best class
/// when that score reaches the threshold.
pub fn decode_candidates(
    data: &[f32],
    num_attrs: usize,
    num_candidates: usize,
    class_names: &[String],
    params: &DecodeParams,
) -> Vec<Detection> {
    if num_attrs <= 4 || data.len() < num_attrs * num_candidates {
        return Vec::new();
    }

    let at = |attr: usize, i: usize| data[attr * num_candidates + i];
    let mut candidates = Vec::new();

    for i in 0..num_candidates {
        let mut best_class = 0;
        let mut best_score = f32::NEG_INFINITY;
        for class_id in 0..num_attrs - 4 {
            let score = at(4 + class_id, i);
            if score > best_score {
                best_score = score;
                best_class = class_id;
            }
        }

        if best_score < params.confidence_threshold {
            continue;
        }

        let bbox = BoundingBox::from_center(at(0, i), at(1, i), at(2, i), at(3, i))
            .unletterboxed(params.gain_x, params.gain_y, params.pad_x, params.pad_y)
            .clamped(params.image_width, params.image_height);

        candidates.push(Detection::new(
            best_class,
            class_label(class_names, best_class),
            best_score,
            bbox,
        ));
    }

    non_max_suppression(candidates, params.iou_threshold, params.max_detections)
}

/// Greedy per-class NMS. Output is ordered by confidence, highest first.
pub fn non_max_suppression(
    mut detections: Vec<Detection>,
    iou_threshold: f32,
    max_detections: usize,
) -> Vec<Detection> {
    detections.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    let mut kept: Vec<Detection> = Vec::new();
    for det in detections {
        if kept.len() >= max_detections {
            break;
        }
        let suppressed = kept.iter().any(|k| {
            k.class_id == det.class_id && k.bounding_box.iou(&det.bounding_box) > iou_threshold
        });
        if !suppressed {
            kept.push(det);
        }
    }
    kept
}
