use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FractalError>;

/// Recoverable failures of a drawing batch. Any of these aborts the whole
/// batch before a single fractal is written.
#[derive(Debug, Error)]
pub enum FractalError {
    #[error("Invalid input: unable to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid input: malformed record {line:?} on line {line_number}")]
    MalformedRecord { line_number: usize, line: String },

    #[error("Invalid input: fractal type {type_code} with height {height}")]
    InvalidInput { type_code: u32, height: u32 },

    #[error("unable to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("unable to serialize diagnostics: {0}")]
    Json(#[from] serde_json::Error),
}
