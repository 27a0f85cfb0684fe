pub mod json_artifact_loader;
