use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::artifact::domain::cluster::Cluster;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("malformed cluster artifact: {0}")]
    MalformedInput(#[source] serde_json::Error),
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read artifact stream: {0}")]
    Stream(#[source] io::Error),
}

/// Parses a JSON cluster artifact and drops the noise cluster.
///
/// The input must be a JSON array of cluster objects. Anything else fails
/// as [`ArtifactError::MalformedInput`]; there is no partial recovery.
pub fn load_from_slice(bytes: &[u8]) -> Result<Vec<Cluster>, ArtifactError> {
    let parsed: Vec<Cluster> =
        serde_json::from_slice(bytes).map_err(ArtifactError::MalformedInput)?;
    Ok(exclude_noise(parsed))
}

pub fn load_from_reader<R: Read>(mut reader: R) -> Result<Vec<Cluster>, ArtifactError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(ArtifactError::Stream)?;
    load_from_slice(&bytes)
}

pub fn load_from_path(path: &Path) -> Result<Vec<Cluster>, ArtifactError> {
    let bytes = fs::read(path).map_err(|e| ArtifactError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    load_from_slice(&bytes)
}

fn exclude_noise(parsed: Vec<Cluster>) -> Vec<Cluster> {
    let total = parsed.len();
    let clusters: Vec<Cluster> = parsed.into_iter().filter(|c| !c.is_noise()).collect();
    log::info!(
        "Loaded {} clusters ({} noise cluster(s) excluded)",
        clusters.len(),
        total - clusters.len()
    );
    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ARTIFACT: &str = r#"[
        {
            "cluster_label": -4,
            "cluster_size": 1,
            "faces": [{"file_name": "noise.jpg", "face_id": "n1", "cords": [0, 0, 5, 5]}]
        },
        {
            "cluster_label": 0,
            "cluster_size": 2,
            "faces": [
                {"file_name": "a.jpg", "face_id": "f1", "cords": [0, 0, 5, 5]},
                {"file_name": "b.jpg", "face_id": "f2", "cords": [1, 1, 6, 6]}
            ]
        },
        {
            "cluster_label": 1,
            "cluster_size": 1,
            "faces": [{"file_name": "c.jpg", "face_id": "f3", "cords": [2, 2, 7, 7]}]
        }
    ]"#;

    #[test]
    fn test_excludes_noise_cluster() {
        let clusters = load_from_slice(ARTIFACT.as_bytes()).unwrap();
        let labels: Vec<i64> = clusters.iter().map(|c| c.cluster_label).collect();
        assert_eq!(labels, vec![0, 1]);
    }

    #[test]
    fn test_noise_only_artifact_is_empty() {
        let json = r#"[
            {"cluster_label": -4, "cluster_size": 0, "faces": []},
            {"cluster_label": -4, "cluster_size": 0, "faces": []}
        ]"#;
        assert!(load_from_slice(json.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_incomplete_face_does_not_fail_the_load() {
        let json = r#"[{
            "cluster_label": 3,
            "cluster_size": 2,
            "faces": [
                {"file_name": "a.jpg", "face_id": "f1", "cords": [0, 0, 5, 5]},
                {"face_id": "f2"}
            ]
        }]"#;
        let clusters = load_from_slice(json.as_bytes()).unwrap();
        assert_eq!(clusters.len(), 1);
        let faces = &clusters[0].faces;
        assert_eq!(faces.len(), 2);
        assert_eq!(faces[1].face_id, "f2");
        assert_eq!(faces[1].source_file(), None);
        assert_eq!(faces[1].cords, None);
    }

    #[test]
    fn test_empty_array() {
        assert!(load_from_slice(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_preserves_order() {
        let json = r#"[
            {"cluster_label": 9, "cluster_size": 0, "faces": []},
            {"cluster_label": 2, "cluster_size": 0, "faces": []},
            {"cluster_label": 5, "cluster_size": 0, "faces": []}
        ]"#;
        let labels: Vec<i64> = load_from_slice(json.as_bytes())
            .unwrap()
            .iter()
            .map(|c| c.cluster_label)
            .collect();
        assert_eq!(labels, vec![9, 2, 5]);
    }

    #[rstest]
    #[case::not_json("this is not json")]
    #[case::object_not_array(r#"{"cluster_label": 0}"#)]
    #[case::array_of_numbers("[1, 2, 3]")]
    #[case::bad_cords(
        r#"[{"cluster_label": 0, "cluster_size": 1, "faces": [{"file_name": "a.jpg", "face_id": "f", "cords": [1, 2, 3]}]}]"#
    )]
    #[case::truncated(r#"[{"cluster_label": 0,"#)]
    fn test_malformed_input(#[case] input: &str) {
        let err = load_from_slice(input.as_bytes()).unwrap_err();
        assert!(matches!(err, ArtifactError::MalformedInput(_)));
    }

    #[test]
    fn test_load_from_reader() {
        let clusters = load_from_reader(ARTIFACT.as_bytes()).unwrap();
        assert_eq!(clusters.len(), 2);
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clusters.json");
        fs::write(&path, ARTIFACT).unwrap();
        let clusters = load_from_path(&path).unwrap();
        assert_eq!(clusters.len(), 2);
        assert!(clusters.iter().all(|c| !c.is_noise()));
    }

    #[test]
    fn test_load_from_missing_path() {
        let err = load_from_path(Path::new("/nonexistent/clusters.json")).unwrap_err();
        assert!(matches!(err, ArtifactError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/clusters.json"));
    }
}
