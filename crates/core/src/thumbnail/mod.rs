pub mod infrastructure;
