pub mod args;
pub mod records;
pub mod render;
