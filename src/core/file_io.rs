use std::path::Path;

use super::error::{FractalError, Result};

pub fn extract_base_name(path: &str) -> &str {
    Path::new(path)
        .file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/**
 * Reads the entire input file into memory. Nothing is rendered until the
 * whole file has been read and parsed, so there is no benefit to streaming it.
 */
pub fn read_input_file(path: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| FractalError::Io {
        path: path.into(),
        source,
    })
}
