use std::path::PathBuf;

use thiserror::Error;

/// A recoverable problem met while processing one record, file, or thumbnail.
///
/// Warnings never abort an operation. They are returned next to the primary
/// result so the presentation layer decides whether and how to show them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Warning {
    #[error("face entry #{position} ('{face_id}') is missing 'file_name'; skipped")]
    MissingFileName { position: usize, face_id: String },

    #[error("face entry #{position} in {file_name} is missing '{field}'; skipped")]
    IncompleteFace {
        position: usize,
        file_name: String,
        field: &'static str,
    },

    #[error("file {file_name} not found in {directory}; skipped")]
    FileNotFound {
        file_name: String,
        directory: PathBuf,
    },

    #[error("error processing file {file_name}: {reason}")]
    ImageDecode {
        file_name: String,
        path: PathBuf,
        reason: String,
    },

    #[error("failed to decode {key} of cluster {cluster_label}: {reason}")]
    ThumbnailDecode {
        cluster_label: i64,
        key: String,
        reason: String,
    },
}

impl Warning {
    /// Logs the warning at debug level and appends it to `sink`.
    pub(crate) fn record(self, sink: &mut Vec<Warning>) {
        log::debug!("{self}");
        sink.push(self);
    }
}
