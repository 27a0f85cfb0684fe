use std::path::PathBuf;

use image::RgbImage;

use crate::shared::face_box::FaceBox;
use crate::shared::palette::BoxColor;

/// One drawn face box and the id it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickableRegion {
    pub face_id: String,
    pub cords: FaceBox,
    pub color: BoxColor,
}

impl ClickableRegion {
    /// Whether the pixel `(x, y)` falls inside this region's box.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let b = self.cords.normalized();
        (b.x1..=b.x2).contains(&x) && (b.y1..=b.y2).contains(&y)
    }
}

/// A source image with its face boxes burned in.
#[derive(Clone, Debug)]
pub struct AnnotatedImage {
    pub file_name: String,
    pub path: PathBuf,
    pub image: RgbImage,
    pub regions: Vec<ClickableRegion>,
}

impl AnnotatedImage {
    /// Ids of the regions under `(x, y)`, in drawing order.
    pub fn face_ids_at(&self, x: i32, y: i32) -> Vec<&str> {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .map(|r| r.face_id.as_str())
            .collect()
    }
}
