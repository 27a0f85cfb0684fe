pub mod annotated_image;
pub mod image_source;
