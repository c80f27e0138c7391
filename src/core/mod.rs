pub mod error;
pub mod file_io;
pub mod grid;
pub mod stopwatch;
