use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageReader};

use crate::rendering::domain::image_source::{
    ImageSource, ImageSourceError, RenderError, SourceImage,
};
use crate::shared::constants::DIRECTORY_TRIM_CHARS;

/// Resolves recorded file names against a directory, ignoring case.
///
/// The listing is taken once at construction. Names that collide after
/// lowercasing resolve to the lexicographically smallest on-disk name.
pub struct DirectoryImageSource {
    directory: PathBuf,
    files: HashMap<String, String>,
}

impl DirectoryImageSource {
    pub fn scan(directory: &Path) -> Result<Self, RenderError> {
        if !directory.is_dir() {
            return Err(RenderError::DirectoryNotFound(directory.to_path_buf()));
        }
        let entries = fs::read_dir(directory).map_err(|e| RenderError::DirectoryUnreadable {
            path: directory.to_path_buf(),
            source: e,
        })?;

        let mut names: Vec<String> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| RenderError::DirectoryUnreadable {
                path: directory.to_path_buf(),
                source: e,
            })?;
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => log::debug!("Ignoring non-UTF-8 file name {raw:?}"),
            }
        }
        names.sort();

        let mut files = HashMap::with_capacity(names.len());
        for name in names {
            files.entry(name.to_lowercase()).or_insert(name);
        }
        log::debug!("Indexed {} files in {}", files.len(), directory.display());

        Ok(Self {
            directory: directory.to_path_buf(),
            files,
        })
    }

    /// On-disk name matching `file_name` case-insensitively.
    pub fn resolve(&self, file_name: &str) -> Option<&str> {
        self.files.get(&file_name.to_lowercase()).map(String::as_str)
    }
}

impl ImageSource for DirectoryImageSource {
    fn location(&self) -> &Path {
        &self.directory
    }

    fn open(&self, file_name: &str) -> Result<SourceImage, ImageSourceError> {
        let actual = self
            .resolve(file_name)
            .ok_or_else(|| ImageSourceError::NotFound {
                file_name: file_name.to_string(),
            })?;
        let path = self.directory.join(actual);
        let image = decode_rgb(&path).map_err(|e| ImageSourceError::Decode {
            path: path.clone(),
            source: e,
        })?;
        Ok(SourceImage { path, image })
    }
}

/// Decodes by content rather than extension, then drops alpha/palette.
fn decode_rgb(path: &Path) -> Result<image::RgbImage, ImageError> {
    let reader = ImageReader::open(path)
        .map_err(ImageError::IoError)?
        .with_guessed_format()
        .map_err(ImageError::IoError)?;
    Ok(reader.decode()?.to_rgb8())
}

/// Cleans an operator-typed directory: trims whitespace and surrounding
/// quotes left over from copy-pasting a path.
pub fn normalize_directory_argument(raw: &str) -> PathBuf {
    PathBuf::from(raw.trim().trim_matches(DIRECTORY_TRIM_CHARS))
}
