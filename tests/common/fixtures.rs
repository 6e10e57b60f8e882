use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use safehealth::{BoundingBox, Detection, Detector, HazardError, HazardResult};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Detector returning canned detections, filtered by threshold like a real model
pub struct StubDetector {
    detections: Vec<Detection>,
    class_names: Vec<String>,
    calls: AtomicUsize,
}

impl StubDetector {
    pub fn new(detections: Vec<Detection>) -> Self {
        Self {
            detections,
            class_names: vec![
                "Stagnant water".to_string(),
                "Trash".to_string(),
                "Blocked drain".to_string(),
            ],
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Detector for StubDetector {
    fn detect(&self, _image: &RgbImage, confidence_threshold: f32) -> HazardResult<Vec<Detection>> {
        if !(0.0..=1.0).contains(&confidence_threshold) {
            return Err(HazardError::InvalidThreshold(confidence_threshold));
        }
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .detections
            .iter()
            .filter(|d| d.confidence >= confidence_threshold)
            .cloned()
            .collect())
    }

    fn class_names(&self) -> &[String] {
        &self.class_names
    }
}

pub fn bbox(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> BoundingBox {
    BoundingBox::new(x_min, y_min, x_max, y_max)
}

/// The two-detection street scene used across tests
pub fn street_scene() -> Vec<Detection> {
    vec![
        Detection::new(0, "Stagnant water", 0.91, bbox(12.0, 40.0, 80.0, 90.0)),
        Detection::new(1, "Trash", 0.60, bbox(100.0, 20.0, 150.0, 70.0)),
    ]
}

/// Creates a 200x120 gradient PNG in memory
pub fn create_test_png() -> Vec<u8> {
    let img = ImageBuffer::from_fn(200, 120, |x, y| {
        Rgb([(x * 255 / 200) as u8, (y * 255 / 120) as u8, 128u8])
    });
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("Failed to encode test image");
    bytes
}
