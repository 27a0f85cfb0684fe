use std::path::Path;

use crate::grouping::domain::image_group::ImageIndex;
use crate::rendering::domain::annotated_image::{AnnotatedImage, ClickableRegion};
use crate::rendering::domain::image_source::{ImageSource, ImageSourceError, RenderError};
use crate::rendering::infrastructure::box_painter::draw_face_box;
use crate::rendering::infrastructure::directory_image_source::DirectoryImageSource;
use crate::shared::constants::BOX_STROKE_WIDTH;
use crate::shared::palette::BoxColor;
use crate::shared::warning::Warning;

/// Result of a render pass: the images that made it, plus what was skipped.
#[derive(Clone, Debug, Default)]
pub struct RenderOutput {
    pub images: Vec<AnnotatedImage>,
    pub warnings: Vec<Warning>,
}

/// Burns face boxes into every image referenced by an [`ImageIndex`].
///
/// Files that cannot be found or decoded are skipped with a warning; the
/// rest of the batch is still rendered. Output follows index order.
pub struct RenderAnnotatedImagesUseCase {
    source: Box<dyn ImageSource>,
    stroke_width: u32,
}

impl RenderAnnotatedImagesUseCase {
    pub fn new(source: Box<dyn ImageSource>) -> Self {
        Self {
            source,
            stroke_width: BOX_STROKE_WIDTH,
        }
    }

    pub fn execute(&self, groups: &ImageIndex, color_coded: bool) -> RenderOutput {
        let mut output = RenderOutput::default();

        for (file_name, group) in groups.iter() {
            let source_image = match self.source.open(file_name) {
                Ok(image) => image,
                Err(ImageSourceError::NotFound { .. }) => {
                    Warning::FileNotFound {
                        file_name: file_name.to_string(),
                        directory: self.source.location().to_path_buf(),
                    }
                    .record(&mut output.warnings);
                    continue;
                }
                Err(ImageSourceError::Decode { path, source }) => {
                    Warning::ImageDecode {
                        file_name: file_name.to_string(),
                        path,
                        reason: source.to_string(),
                    }
                    .record(&mut output.warnings);
                    continue;
                }
            };

            let mut image = source_image.image;
            let regions: Vec<ClickableRegion> = group
                .entries()
                .enumerate()
                .map(|(index, (face_id, cords))| {
                    let color = BoxColor::for_face(index, color_coded);
                    if cords.is_inverted() {
                        log::debug!("{file_name}: face {face_id} has unordered cords {cords}");
                    }
                    draw_face_box(&mut image, cords, color.rgb(), self.stroke_width);
                    ClickableRegion {
                        face_id: face_id.to_string(),
                        cords: *cords,
                        color,
                    }
                })
                .collect();

            output.images.push(AnnotatedImage {
                file_name: file_name.to_string(),
                path: source_image.path,
                image,
                regions,
            });
        }

        log::info!(
            "Rendered {}/{} images ({} skipped)",
            output.images.len(),
            groups.len(),
            output.warnings.len()
        );
        output
    }
}

/// Renders `groups` against the images in `image_directory`.
///
/// Fails only when the directory itself is missing or unreadable.
pub fn render(
    image_directory: &Path,
    groups: &ImageIndex,
    color_coded: bool,
) -> Result<RenderOutput, RenderError> {
    let source = DirectoryImageSource::scan(image_directory)?;
    Ok(RenderAnnotatedImagesUseCase::new(Box::new(source)).execute(groups, color_coded))
}
