use crate::core::error::{FractalError, Result};
use crate::fractals::{factory::create_fractal, shape::FractalShape};

/// Every record is exactly `<type digit><separator><height digit>`.
pub const RECORD_LENGTH: usize = 3;
pub const RECORD_SEPARATOR: u8 = b',';

/**
 * Splits a single record into its `(type_code, height)` digits. Returns `None`
 * if the length, separator or either digit is wrong. Range checking of the
 * digits is left to the factory.
 */
pub fn parse_record(line: &str) -> Option<(u32, u32)> {
    let bytes = line.as_bytes();
    if bytes.len() != RECORD_LENGTH || bytes[1] != RECORD_SEPARATOR {
        return None;
    }
    let digit = |byte: u8| char::from(byte).to_digit(10);
    Some((digit(bytes[0])?, digit(bytes[2])?))
}

/**
 * Parses the full input text into shapes, in order of appearance. A single
 * empty piece after the final newline is not a record; any other empty line is
 * malformed. The first bad record aborts the whole batch.
 */
pub fn parse_records(content: &str) -> Result<Vec<FractalShape>> {
    let mut lines: Vec<&str> = content.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let (type_code, height) =
                parse_record(line).ok_or_else(|| FractalError::MalformedRecord {
                    line_number: index + 1,
                    line: line.to_owned(),
                })?;
            create_fractal(type_code, height)
        })
        .collect()
}
