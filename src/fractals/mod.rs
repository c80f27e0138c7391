pub mod common;
pub mod factory;
pub mod shape;
pub mod subdivision;
