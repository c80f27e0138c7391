use crate::core::error::{FractalError, Result};

use super::{
    common::{is_valid_height, FractalKind},
    shape::FractalShape,
};

/**
 * Turns a `(type_code, height)` pair from an input record into a shape.
 * Type codes 1, 2, 3 map to carpet, sieve and dust. This is the only place
 * where the height range is enforced; nothing is constructed on rejection.
 */
pub fn create_fractal(type_code: u32, height: u32) -> Result<FractalShape> {
    let invalid = || FractalError::InvalidInput { type_code, height };
    if !is_valid_height(height) {
        return Err(invalid());
    }
    let kind = FractalKind::from_type_code(type_code).ok_or_else(invalid)?;
    Ok(FractalShape::new(kind, height))
}
