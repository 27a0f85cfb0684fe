use serde::{Deserialize, Serialize};

use crate::shared::face_box::FaceBox;

/// One detected face as recorded in the clustering artifact.
///
/// `file_name`, `face_id` and `cords` may all be absent so a single bad
/// record does not reject the whole artifact; the grouper drops such faces
/// with a warning. A present `cords` must still be four integers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Face {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub face_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cords: Option<FaceBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_score: Option<f64>,
}

impl Face {
    pub fn new(file_name: impl Into<String>, face_id: impl Into<String>, cords: FaceBox) -> Self {
        Self {
            file_name: Some(file_name.into()),
            face_id: face_id.into(),
            cords: Some(cords),
            alignment_method: None,
            score: None,
            blur_score: None,
        }
    }

    /// The source image name, treating an empty string as absent.
    pub fn source_file(&self) -> Option<&str> {
        self.file_name.as_deref().filter(|name| !name.is_empty())
    }

    /// Name of the first required field this record lacks, if any.
    /// Only meaningful once the record has a source file.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.face_id.is_empty() {
            Some("face_id")
        } else if self.cords.is_none() {
            Some("cords")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_record_deserializes() {
        let json = r#"{
            "file_name": "IMG_1.jpg",
            "face_id": "f-1",
            "cords": [10, 20, 30, 40],
            "alignment_method": "mtcnn",
            "score": 0.98,
            "blur_score": 120.5
        }"#;
        let face: Face = serde_json::from_str(json).unwrap();
        assert_eq!(face.source_file(), Some("IMG_1.jpg"));
        assert_eq!(face.face_id, "f-1");
        assert_eq!(face.cords, Some(FaceBox::new(10, 20, 30, 40)));
        assert_eq!(face.missing_field(), None);
        assert_eq!(face.alignment_method.as_deref(), Some("mtcnn"));
        assert_eq!(face.score, Some(0.98));
        assert_eq!(face.blur_score, Some(120.5));
    }

    #[test]
    fn test_optional_metadata_may_be_absent() {
        let json = r#"{"file_name": "a.jpg", "face_id": "f", "cords": [0, 0, 1, 1]}"#;
        let face: Face = serde_json::from_str(json).unwrap();
        assert!(face.alignment_method.is_none());
        assert!(face.score.is_none());
        assert!(face.blur_score.is_none());
    }

    #[rstest]
    #[case::absent(r#"{"face_id": "f", "cords": [0, 0, 1, 1]}"#)]
    #[case::null(r#"{"file_name": null, "face_id": "f", "cords": [0, 0, 1, 1]}"#)]
    #[case::empty(r#"{"file_name": "", "face_id": "f", "cords": [0, 0, 1, 1]}"#)]
    fn test_missing_file_name_is_tolerated(#[case] json: &str) {
        let face: Face = serde_json::from_str(json).unwrap();
        assert_eq!(face.source_file(), None);
    }

    #[rstest]
    #[case::no_face_id(r#"{"file_name": "a.jpg", "cords": [0, 0, 1, 1]}"#, "face_id")]
    #[case::empty_face_id(r#"{"file_name": "a.jpg", "face_id": "", "cords": [0, 0, 1, 1]}"#, "face_id")]
    #[case::no_cords(r#"{"file_name": "a.jpg", "face_id": "f"}"#, "cords")]
    #[case::null_cords(r#"{"file_name": "a.jpg", "face_id": "f", "cords": null}"#, "cords")]
    #[case::nothing(r#"{}"#, "face_id")]
    fn test_incomplete_record_deserializes(#[case] json: &str, #[case] missing: &str) {
        let face: Face = serde_json::from_str(json).unwrap();
        assert_eq!(face.missing_field(), Some(missing));
    }

    #[rstest]
    #[case::short(r#"{"face_id": "f", "cords": [0, 0, 1]}"#)]
    #[case::fractional(r#"{"face_id": "f", "cords": [0.5, 0, 1, 1]}"#)]
    fn test_present_cords_must_be_four_integers(#[case] json: &str) {
        assert!(serde_json::from_str::<Face>(json).is_err());
    }

    #[test]
    fn test_serialization_omits_absent_metadata() {
        let face = Face::new("a.jpg", "f", FaceBox::new(0, 0, 1, 1));
        let json = serde_json::to_string(&face).unwrap();
        assert_eq!(
            json,
            r#"{"file_name":"a.jpg","face_id":"f","cords":[0,0,1,1]}"#
        );
    }
}
