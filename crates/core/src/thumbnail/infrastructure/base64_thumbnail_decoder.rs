use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbnailDecodeError {
    #[error("invalid base64 format: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("payload is not a readable image: {0}")]
    InvalidImage(#[from] image::ImageError),
}

/// Decodes one embedded thumbnail payload into an in-memory image.
///
/// Empty strings, `null` and non-string values mean "no thumbnail" and yield
/// `Ok(None)`. Only a string that fails to decode is an error; callers turn
/// it into a warning and carry on with the other thumbnails.
pub fn decode_thumbnail(payload: &Value) -> Result<Option<DynamicImage>, ThumbnailDecodeError> {
    let Some(text) = payload.as_str() else {
        return Ok(None);
    };
    let encoded: String = strip_data_uri(text.trim())
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if encoded.is_empty() {
        return Ok(None);
    }

    let bytes = STANDARD.decode(encoded.as_bytes())?;
    let image = image::load_from_memory(&bytes)?;
    Ok(Some(image))
}

/// Drops a leading `data:<mime>;base64,` header if present.
fn strip_data_uri(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.split_once(";base64,") {
        Some((_, body)) => body,
        None => text,
    }
}
