pub mod constants;
pub mod face_box;
pub mod palette;
pub mod warning;
