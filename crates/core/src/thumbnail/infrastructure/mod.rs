pub mod base64_thumbnail_decoder;
