use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

use crate::alerts::HazardKind;
use crate::models::Detection;

pub const DEFAULT_BORDER_WIDTH: u32 = 3;

/// Box color per hazard kind
pub fn hazard_color(kind: HazardKind) -> Rgb<u8> {
    match kind {
        HazardKind::StagnantWater => Rgb([30, 144, 255]),
        HazardKind::Trash => Rgb([255, 140, 0]),
        HazardKind::BlockedDrain => Rgb([220, 20, 60]),
        HazardKind::Unknown => Rgb([255, 255, 0]),
    }
}

/// Copy of `image` with every detection outlined, the border grown outwards
/// `border_width` pixels. Boxes are drawn in detection order.
pub fn draw_detections(image: &RgbImage, detections: &[Detection], border_width: u32) -> RgbImage {
    let mut canvas = image.clone();

    for det in detections {
        let color = hazard_color(HazardKind::from_class_name(&det.class_name));
        let bbox = &det.bounding_box;

        let left = bbox.x_min.round() as i32;
        let top = bbox.y_min.round() as i32;
        let width = (bbox.width().round() as u32).max(1);
        let height = (bbox.height().round() as u32).max(1);

        for i in 0..border_width.max(1) {
            let rect = Rect::at(left - i as i32, top - i as i32)
                .of_size(width + 2 * i, height + 2 * i);
            draw_hollow_rect_mut(&mut canvas, rect, color);
        }
    }

    canvas
}
