use image::imageops::FilterType;
use image::{Rgb, RgbImage};

/// Gray used for letterbox padding
pub const LETTERBOX_FILL: u8 = 114;

/// Model input prepared from a source image
pub struct ModelInput {
    /// NCHW planes, normalized to `[0, 1]`
    pub data: Vec<f32>,
    pub input_size: u32,
    /// Resized-over-source size ratio per axis
    pub gain_x: f32,
    pub gain_y: f32,
    /// Letterbox offset of the resized image inside the square frame
    pub pad_x: f32,
    pub pad_y: f32,
}

/// Letterbox into a square `input_size` frame: resize keeping aspect ratio,
/// centre on a gray canvas, then split into normalized RGB planes.
pub fn to_model_input(rgb: &RgbImage, input_size: u32) -> ModelInput {
    let (width, height) = rgb.dimensions();
    let scale = (input_size as f32 / width as f32).min(input_size as f32 / height as f32);
    let new_w = ((width as f32 * scale).round() as u32).clamp(1, input_size);
    let new_h = ((height as f32 * scale).round() as u32).clamp(1, input_size);

    let resized = image::imageops::resize(rgb, new_w, new_h, FilterType::Triangle);
    let pad_x = (input_size - new_w) / 2;
    let pad_y = (input_size - new_h) / 2;

    let mut canvas = RgbImage::from_pixel(input_size, input_size, Rgb([LETTERBOX_FILL; 3]));
    image::imageops::overlay(&mut canvas, &resized, pad_x.into(), pad_y.into());

    let side = input_size as usize;
    let plane = side * side;
    let mut data = vec![0.0f32; 3 * plane];
    for (x, y, pixel) in canvas.enumerate_pixels() {
        let offset = y as usize * side + x as usize;
        data[offset] = pixel[0] as f32 / 255.0;
        data[plane + offset] = pixel[1] as f32 / 255.0;
        data[2 * plane + offset] = pixel[2] as f32 / 255.0;
    }

    ModelInput {
        data,
        input_size,
        gain_x: new_w as f32 / width as f32,
        gain_y: new_h as f32 / height as f32,
        pad_x: pad_x as f32,
        pad_y: pad_y as f32,
    }
}
