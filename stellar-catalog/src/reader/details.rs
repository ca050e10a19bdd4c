//! Sequential detail lookup.
//!
//! Extended attributes live in columns the bulk loaders never touch. A
//! lookup opens the owning file fresh, walks line by line to the target
//! ordinal, decodes that one line, and drops the handle. Walking past the
//! end of the file means the record does not exist (`Ok(None)`); a line
//! that *is* there but too short for its columns is a format error — the
//! two cases are never conflated.

use super::RecordLines;
use crate::errors::Result;
use crate::fields::byte_at;
use crate::star::StarDetail;
use std::path::Path;

/// Detail record from the primary file at the given 1-based line ordinal.
pub(crate) fn primary(path: &Path, ordinal: usize) -> Result<Option<StarDetail>> {
    use super::primary::layout::*;
    let mut lines = RecordLines::open(path)?;
    let line = match seek(&mut lines, ordinal)? {
        Some(line) => line,
        None => return Ok(None),
    };
    let ctx = |e| lines.malformed(e);
    Ok(Some(StarDetail {
        is_infrared_source: byte_at(&line, INFRARED).map_err(ctx)? == b'I',
        spectral_class: SPECTRAL_CLASS.trimmed(&line).map_err(ctx)?,
        peculiarity: PECULIARITY.trimmed(&line).map_err(ctx)?,
        radial_velocity: RADIAL_VELOCITY.parse_optional::<i32>(&line).map_err(ctx)?,
    }))
}

/// Detail record from the supplement file.
///
/// Only the spectral class exists in this format; the remaining fields are
/// reported absent.
pub(crate) fn supplement(path: &Path, ordinal: usize) -> Result<Option<StarDetail>> {
    let mut lines = RecordLines::open(path)?;
    let line = match seek(&mut lines, ordinal)? {
        Some(line) => line,
        None => return Ok(None),
    };
    let spectral_class = super::supplement::layout::SPECTRAL_CLASS
        .trimmed(&line)
        .map_err(|e| lines.malformed(e))?;
    Ok(Some(StarDetail {
        radial_velocity: None,
        is_infrared_source: false,
        spectral_class,
        peculiarity: String::new(),
    }))
}

/// Advances to the 1-based `ordinal` line, `None` if the file is shorter.
fn seek(lines: &mut RecordLines, ordinal: usize) -> Result<Option<Vec<u8>>> {
    loop {
        match lines.next_line()? {
            Some(line) if lines.line_number() == ordinal => return Ok(Some(line)),
            Some(_) => continue,
            None => return Ok(None),
        }
    }
}
