pub mod cluster;
pub mod face;
