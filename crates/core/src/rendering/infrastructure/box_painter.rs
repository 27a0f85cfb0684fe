use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::shared::face_box::FaceBox;

/// Draws the outline of `face_box` into `image`, `stroke` pixels thick.
///
/// The stroke grows inward from the recorded corners. Boxes too small to
/// hold two strokes are filled solid. Parts falling outside the image are
/// clipped; inverted corners are reordered first.
pub fn draw_face_box(image: &mut RgbImage, face_box: &FaceBox, color: Rgb<u8>, stroke: u32) {
    if stroke == 0 || image.width() == 0 || image.height() == 0 {
        return;
    }
    let n = face_box.normalized();
    let s = i64::from(stroke);

    // Coordinates beyond one stroke past the canvas draw nothing visible;
    // clamping keeps the band math in i32 range for extreme input.
    let (x1, x2) = clamp_span(n.x1, n.x2, image.width(), s);
    let (y1, y2) = clamp_span(n.y1, n.y2, image.height(), s);
    let w = x2 - x1 + 1;
    let h = y2 - y1 + 1;

    if w <= 2 * s || h <= 2 * s {
        fill(image, x1, y1, w, h, color);
        return;
    }

    fill(image, x1, y1, w, s, color);
    fill(image, x1, y2 - s + 1, w, s, color);
    fill(image, x1, y1 + s, s, h - 2 * s, color);
    fill(image, x2 - s + 1, y1 + s, s, h - 2 * s, color);
}

fn clamp_span(lo: i32, hi: i32, extent: u32, stroke: i64) -> (i64, i64) {
    let min = -(stroke + 1);
    let max = i64::from(extent) + stroke;
    (
        i64::from(lo).clamp(min, max),
        i64::from(hi).clamp(min, max),
    )
}

fn fill(image: &mut RgbImage, x: i64, y: i64, w: i64, h: i64, color: Rgb<u8>) {
    if w <= 0 || h <= 0 {
        return;
    }
    let rect = Rect::at(x as i32, y as i32).of_size(w as u32, h as u32);
    draw_filled_rect_mut(image, rect, color);
}
