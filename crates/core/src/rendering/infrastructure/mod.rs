pub mod box_painter;
pub mod directory_image_source;
