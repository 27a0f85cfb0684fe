use crate::artifact::domain::cluster::Cluster;
use crate::grouping::domain::image_group::ImageIndex;

/// Operator selections that drive what the viewer shows.
///
/// Owned and mutated by the presentation layer; core functions only read it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    selected_cluster: Option<i64>,
    multi_face_only: bool,
    color_coded: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_cluster: None,
            multi_face_only: false,
            color_coded: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_cluster(&mut self, label: i64) {
        self.selected_cluster = Some(label);
    }

    pub fn selected_cluster(&self) -> Option<i64> {
        self.selected_cluster
    }

    pub fn toggle_multi_face_only(&mut self) {
        self.multi_face_only = !self.multi_face_only;
    }

    pub fn set_multi_face_only(&mut self, enabled: bool) {
        self.multi_face_only = enabled;
    }

    pub fn multi_face_only(&self) -> bool {
        self.multi_face_only
    }

    pub fn set_color_coded(&mut self, enabled: bool) {
        self.color_coded = enabled;
    }

    pub fn color_coded(&self) -> bool {
        self.color_coded
    }

    /// The selected cluster, or the first one when nothing (or a label that
    /// no longer exists) is selected.
    pub fn active_cluster<'a>(&self, clusters: &'a [Cluster]) -> Option<&'a Cluster> {
        self.selected_cluster
            .and_then(|label| clusters.iter().find(|c| c.cluster_label == label))
            .or_else(|| clusters.first())
    }

    /// Images to display for the current filter toggle.
    pub fn visible_images(&self, index: &ImageIndex) -> ImageIndex {
        if self.multi_face_only {
            index.only_multi_face()
        } else {
            index.clone()
        }
    }
}
