use image::RgbImage;
use std::path::Path;

use crate::error::HazardResult;

/// Decode an uploaded JPEG/PNG byte stream into an 8-bit RGB image.
/// Alpha and grayscale inputs are converted; malformed data is an error.
pub fn load_image_from_bytes(bytes: &[u8]) -> HazardResult<RgbImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}

/// Read a file from disk and decode it through `load_image_from_bytes`
pub fn load_image_from_path(path: &Path) -> HazardResult<RgbImage> {
    let bytes = std::fs::read(path)?;
    load_image_from_bytes(&bytes)
}
