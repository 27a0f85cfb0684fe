use std::path::PathBuf;

use crate::artifact::domain::cluster::Cluster;
use crate::grouping::domain::face_grouper::group_by_image;
use crate::grouping::domain::image_group::ImageIndex;
use crate::pipeline::render_annotated_images_use_case::RenderAnnotatedImagesUseCase;
use crate::pipeline::view_state::ViewState;
use crate::rendering::domain::annotated_image::AnnotatedImage;
use crate::rendering::domain::image_source::{ImageSource, RenderError};
use crate::rendering::infrastructure::directory_image_source::DirectoryImageSource;
use crate::shared::warning::Warning;

/// Opens a fresh [`ImageSource`] for one render pass.
pub type OpenImageSource =
    Box<dyn Fn() -> Result<Box<dyn ImageSource>, RenderError> + Send>;

/// Everything the main panel needs for the active cluster.
#[derive(Clone, Debug)]
pub struct ClusterView {
    pub cluster_label: i64,
    pub cluster_size: usize,
    /// Unfiltered index, for face-id lookups by file name.
    pub images: ImageIndex,
    /// Subset that passed the multi-face toggle.
    pub visible: ImageIndex,
    pub rendered: Vec<AnnotatedImage>,
    pub warnings: Vec<Warning>,
}

/// Group → filter → render for whichever cluster the view state points at.
///
/// Re-run from scratch on every selection or toggle change. Each call
/// opens its own image source, so the directory check and listing are
/// never older than the call.
pub struct ViewClusterUseCase {
    open_source: OpenImageSource,
}

impl ViewClusterUseCase {
    pub fn new(open_source: OpenImageSource) -> Self {
        Self { open_source }
    }

    /// Renders from `directory`, rescanning it on every call.
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        let directory = directory.into();
        Self::new(Box::new(move || {
            let source = DirectoryImageSource::scan(&directory)?;
            Ok(Box::new(source) as Box<dyn ImageSource>)
        }))
    }

    /// Returns `Ok(None)` only when there are no clusters to show. Fails
    /// when the image directory is missing or unreadable.
    pub fn execute(
        &self,
        clusters: &[Cluster],
        state: &ViewState,
    ) -> Result<Option<ClusterView>, RenderError> {
        let Some(cluster) = state.active_cluster(clusters) else {
            return Ok(None);
        };
        if state.selected_cluster().is_some_and(|l| l != cluster.cluster_label) {
            log::warn!(
                "Cluster {:?} not found; showing cluster {}",
                state.selected_cluster(),
                cluster.cluster_label
            );
        }

        let grouped = group_by_image(&cluster.faces);
        let visible = state.visible_images(&grouped.images);
        let renderer = RenderAnnotatedImagesUseCase::new((self.open_source)()?);
        let rendered = renderer.execute(&visible, state.color_coded());

        let mut warnings = grouped.warnings;
        warnings.extend(rendered.warnings);

        Ok(Some(ClusterView {
            cluster_label: cluster.cluster_label,
            cluster_size: cluster.cluster_size,
            images: grouped.images,
            visible,
            rendered: rendered.images,
            warnings,
        }))
    }
}
