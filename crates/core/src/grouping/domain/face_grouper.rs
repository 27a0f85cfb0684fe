use crate::artifact::domain::face::Face;
use crate::grouping::domain::image_group::ImageIndex;
use crate::shared::warning::Warning;

/// Result of [`group_by_image`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedFaces {
    pub images: ImageIndex,
    pub warnings: Vec<Warning>,
}

/// Groups a cluster's faces by the image they were detected on.
///
/// Faces without a file name are dropped with a
/// [`Warning::MissingFileName`]. Faces that name a file but lack `face_id`
/// or `cords` are dropped with a [`Warning::IncompleteFace`]. Every other
/// face lands in its image's group in input order. The same input always
/// yields the same index.
pub fn group_by_image(faces: &[Face]) -> GroupedFaces {
    let mut grouped = GroupedFaces::default();

    for (position, face) in faces.iter().enumerate() {
        let Some(file_name) = face.source_file() else {
            Warning::MissingFileName {
                position,
                face_id: face.face_id.clone(),
            }
            .record(&mut grouped.warnings);
            continue;
        };
        let (Some(cords), None) = (face.cords, face.missing_field()) else {
            Warning::IncompleteFace {
                position,
                file_name: file_name.to_string(),
                field: face.missing_field().unwrap_or("cords"),
            }
            .record(&mut grouped.warnings);
            continue;
        };
        grouped
            .images
            .insert_face(file_name, cords, face.face_id.as_str());
    }

    grouped
}
