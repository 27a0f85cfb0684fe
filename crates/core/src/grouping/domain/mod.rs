pub mod face_grouper;
pub mod image_group;
