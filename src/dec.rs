//! The decimal pixel dump the simulation testbench writes: one `R G B` line
//! per pixel, row-major, no header.

use crate::error::LineError;
use crate::util::TakeArray;

/// Parses exactly three whitespace-separated integers.
///
/// Values outside 0..=255 are clamped rather than rejected.
pub fn parse_line(line: &str) -> Result<[u8; 3], LineError> {
    let mut fields = line.split_whitespace();
    let Some(values): Option<[&str; 3]> = fields.take_array() else {
        return Err(LineError::FieldCount(line.split_whitespace().count()));
    };
    if fields.next().is_some() {
        return Err(LineError::FieldCount(line.split_whitespace().count()));
    }

    let mut rgb = [0u8; 3];
    for (channel, field) in rgb.iter_mut().zip(values) {
        let value: i64 = field.parse().map_err(|source| LineError::NotAnInteger {
            field: field.to_string(),
            source,
        })?;
        *channel = value.clamp(0, 255) as u8;
    }
    Ok(rgb)
}
