use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::artifact::domain::face::Face;
use crate::shared::constants::{NOISE_CLUSTER_LABEL, THUMBNAIL_KEY_PREFIX};

/// One cluster of faces believed to show the same person.
///
/// Preview images arrive as sibling keys `thumbnail_1..N`; they and any other
/// unrecognized keys are kept verbatim in `extra` and exposed through
/// [`Cluster::thumbnails`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub cluster_label: i64,
    pub cluster_size: usize,
    pub faces: Vec<Face>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Cluster {
    pub fn new(cluster_label: i64, cluster_size: usize, faces: Vec<Face>) -> Self {
        Self {
            cluster_label,
            cluster_size,
            faces,
            extra: Map::new(),
        }
    }

    /// Attaches a raw thumbnail payload under `thumbnail_<number>`.
    pub fn with_thumbnail(mut self, number: u32, payload: impl Into<Value>) -> Self {
        self.extra
            .insert(format!("{THUMBNAIL_KEY_PREFIX}{number}"), payload.into());
        self
    }

    pub fn is_noise(&self) -> bool {
        self.cluster_label == NOISE_CLUSTER_LABEL
    }

    /// Raw thumbnail payloads ordered by their number.
    ///
    /// Keys that start with the prefix but do not end in a number are ignored.
    pub fn thumbnails(&self) -> Vec<(&str, &Value)> {
        let mut numbered: Vec<(u32, &str, &Value)> = self
            .extra
            .iter()
            .filter_map(|(key, value)| {
                let number = key.strip_prefix(THUMBNAIL_KEY_PREFIX)?.parse().ok()?;
                Some((number, key.as_str(), value))
            })
            .collect();
        numbered.sort_by_key(|(number, _, _)| *number);
        numbered
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .collect()
    }

    /// First face carrying `face_id`. Ids are not validated for uniqueness,
    /// so duplicates resolve to the earliest record.
    pub fn find_face(&self, face_id: &str) -> Option<&Face> {
        self.faces.iter().find(|f| f.face_id == face_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::face_box::FaceBox;

    fn face(file: &str, id: &str) -> Face {
        Face::new(file, id, FaceBox::new(0, 0, 10, 10))
    }

    #[test]
    fn test_deserializes_with_thumbnails() {
        let json = r#"{
            "cluster_label": 3,
            "cluster_size": 1,
            "thumbnail_2": "BBBB",
            "thumbnail_1": "AAAA",
            "faces": [{"file_name": "a.jpg", "face_id": "f1", "cords": [0, 0, 5, 5]}]
        }"#;
        let cluster: Cluster = serde_json::from_str(json).unwrap();
        assert_eq!(cluster.cluster_label, 3);
        assert_eq!(cluster.cluster_size, 1);
        assert_eq!(cluster.faces.len(), 1);

        let thumbs = cluster.thumbnails();
        assert_eq!(thumbs.len(), 2);
        assert_eq!(thumbs[0], ("thumbnail_1", &Value::from("AAAA")));
        assert_eq!(thumbs[1], ("thumbnail_2", &Value::from("BBBB")));
    }

    #[test]
    fn test_thumbnails_sorted_numerically() {
        let cluster = Cluster::new(1, 0, vec![])
            .with_thumbnail(10, "ten")
            .with_thumbnail(2, "two");
        let keys: Vec<&str> = cluster.thumbnails().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["thumbnail_2", "thumbnail_10"]);
    }

    #[test]
    fn test_unrelated_keys_are_not_thumbnails() {
        let json = r#"{
            "cluster_label": 1,
            "cluster_size": 0,
            "faces": [],
            "thumbnail_best": "x",
            "centroid": [0.1, 0.2]
        }"#;
        let cluster: Cluster = serde_json::from_str(json).unwrap();
        assert!(cluster.thumbnails().is_empty());
    }

    #[test]
    fn test_missing_faces_is_rejected() {
        let json = r#"{"cluster_label": 1, "cluster_size": 0}"#;
        assert!(serde_json::from_str::<Cluster>(json).is_err());
    }

    #[test]
    fn test_is_noise() {
        assert!(Cluster::new(-4, 0, vec![]).is_noise());
        assert!(!Cluster::new(-1, 0, vec![]).is_noise());
        assert!(!Cluster::new(0, 0, vec![]).is_noise());
    }

    #[test]
    fn test_find_face_returns_first_match() {
        let mut dup = face("b.jpg", "f1");
        dup.score = Some(0.5);
        let cluster = Cluster::new(1, 3, vec![face("a.jpg", "f1"), dup, face("c.jpg", "f2")]);

        let found = cluster.find_face("f1").unwrap();
        assert_eq!(found.source_file(), Some("a.jpg"));
        assert_eq!(cluster.find_face("f2").unwrap().source_file(), Some("c.jpg"));
        assert!(cluster.find_face("missing").is_none());
    }

    #[test]
    fn test_serialization_keeps_thumbnails() {
        let cluster = Cluster::new(7, 0, vec![]).with_thumbnail(1, "AAAA");
        let value = serde_json::to_value(&cluster).unwrap();
        assert_eq!(value["thumbnail_1"], "AAAA");
        assert_eq!(value["cluster_label"], 7);
    }
}
