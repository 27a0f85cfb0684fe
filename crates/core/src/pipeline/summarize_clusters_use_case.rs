use image::DynamicImage;

use crate::artifact::domain::cluster::Cluster;
use crate::grouping::domain::face_grouper::group_by_image;
use crate::shared::warning::Warning;
use crate::thumbnail::infrastructure::base64_thumbnail_decoder::decode_thumbnail;

/// A decoded preview image and the artifact key it came from.
#[derive(Clone, Debug)]
pub struct Thumbnail {
    pub key: String,
    pub image: DynamicImage,
}

/// Sidebar entry for one cluster.
#[derive(Clone, Debug)]
pub struct ClusterSummary {
    pub cluster_label: i64,
    pub cluster_size: usize,
    pub image_count: usize,
    pub multi_face_images: usize,
    pub thumbnails: Vec<Thumbnail>,
}

#[derive(Clone, Debug, Default)]
pub struct SummaryOutput {
    pub summaries: Vec<ClusterSummary>,
    pub warnings: Vec<Warning>,
}

/// Builds one sidebar entry per cluster, in artifact order.
///
/// Undecodable thumbnails are left out with a warning; faces without a
/// file name are reported the same way the grouper reports them.
pub fn summarize_clusters(clusters: &[Cluster]) -> SummaryOutput {
    let mut output = SummaryOutput::default();

    for cluster in clusters {
        let grouped = group_by_image(&cluster.faces);
        output.warnings.extend(grouped.warnings);

        let mut thumbnails = Vec::new();
        for (key, payload) in cluster.thumbnails() {
            match decode_thumbnail(payload) {
                Ok(Some(image)) => thumbnails.push(Thumbnail {
                    key: key.to_string(),
                    image,
                }),
                Ok(None) => {}
                Err(e) => Warning::ThumbnailDecode {
                    cluster_label: cluster.cluster_label,
                    key: key.to_string(),
                    reason: e.to_string(),
                }
                .record(&mut output.warnings),
            }
        }

        output.summaries.push(ClusterSummary {
            cluster_label: cluster.cluster_label,
            cluster_size: cluster.cluster_size,
            image_count: grouped.images.len(),
            multi_face_images: grouped.images.multi_face_count(),
            thumbnails,
        });
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::domain::face::Face;
    use crate::shared::face_box::FaceBox;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use image::{ImageFormat, RgbImage};
    use serde_json::Value;
    use std::io::Cursor;

    fn png_base64() -> String {
        let mut bytes = Vec::new();
        RgbImage::new(3, 3)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        STANDARD.encode(bytes)
    }

    fn face(file: &str, id: &str) -> Face {
        Face::new(file, id, FaceBox::new(0, 0, 10, 10))
    }

    #[test]
    fn test_counts_images_and_multi_face_images() {
        let clusters = vec![Cluster::new(
            2,
            4,
            vec![
                face("a.jpg", "f1"),
                face("a.jpg", "f2"),
                face("b.jpg", "f3"),
                face("c.jpg", "f4"),
            ],
        )];
        let out = summarize_clusters(&clusters);

        assert_eq!(out.summaries.len(), 1);
        let s = &out.summaries[0];
        assert_eq!(s.cluster_label, 2);
        assert_eq!(s.cluster_size, 4);
        assert_eq!(s.image_count, 3);
        assert_eq!(s.multi_face_images, 1);
        assert!(s.thumbnails.is_empty());
    }

    #[test]
    fn test_decodes_thumbnails_in_order() {
        let clusters = vec![Cluster::new(1, 0, vec![])
            .with_thumbnail(2, png_base64())
            .with_thumbnail(1, png_base64())
            .with_thumbnail(3, Value::Null)];
        let out = summarize_clusters(&clusters);

        let keys: Vec<&str> = out.summaries[0]
            .thumbnails
            .iter()
            .map(|t| t.key.as_str())
            .collect();
        assert_eq!(keys, vec!["thumbnail_1", "thumbnail_2"]);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_bad_thumbnail_becomes_warning() {
        let clusters = vec![
            Cluster::new(1, 0, vec![])
                .with_thumbnail(1, "%%%not-base64%%%")
                .with_thumbnail(2, png_base64()),
            Cluster::new(2, 0, vec![]).with_thumbnail(1, png_base64()),
        ];
        let out = summarize_clusters(&clusters);

        assert_eq!(out.summaries[0].thumbnails.len(), 1);
        assert_eq!(out.summaries[1].thumbnails.len(), 1);
        assert_eq!(out.warnings.len(), 1);
        assert!(matches!(
            &out.warnings[0],
            Warning::ThumbnailDecode { cluster_label: 1, key, .. } if key == "thumbnail_1"
        ));
    }

    #[test]
    fn test_reports_nameless_faces() {
        let nameless = Face {
            file_name: None,
            ..face("", "f9")
        };
        let clusters = vec![Cluster::new(1, 2, vec![face("a.jpg", "f1"), nameless])];
        let out = summarize_clusters(&clusters);

        assert_eq!(out.summaries[0].image_count, 1);
        assert!(matches!(out.warnings[0], Warning::MissingFileName { .. }));
    }
}
