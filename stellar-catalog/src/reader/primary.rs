//! Primary catalog format.
//!
//! One star per fixed-width line. The discriminator byte (index 94) decides
//! whether a line holds a populated record: when blank, the line still
//! occupies its ordinal position — detail lookup addresses records by
//! physical line — but nothing is published for it.
//!
//! The `layout` table below is the format definition; the decoder is just
//! that table fed through [`Field`](crate::fields::Field). Detail-only
//! columns (infrared flag, spectral class, peculiarity, radial velocity)
//! live in the same table and are read by the detail lookup, not here.

use super::RecordLines;
use crate::errors::Result;
use crate::fields::byte_at;
use crate::names::{resolve, StarNames};
use crate::star::Star;
use std::path::Path;
use stellar_core::{Dms, Hms, Sign};

pub(crate) mod layout {
    use crate::fields::Field;

    pub const NUMBER: Field = Field::new(0, 4);
    pub const NAME: Field = Field::new(4, 10);
    /// Bayer letter inside the name column (name chars 3..6).
    pub const NAME_BAYER: Field = Field::new(7, 3);
    pub const HD: Field = Field::new(25, 6);
    pub const SAO: Field = Field::new(31, 6);
    pub const FK5: Field = Field::new(37, 4);
    /// `'I'` marks an infrared source (detail record only).
    pub const INFRARED: usize = 41;
    pub const VARIABLE: Field = Field::new(51, 9);
    /// Leading part of the variable name, compared against `NAME_BAYER`.
    pub const VARIABLE_PREFIX: Field = Field::new(51, 3);
    pub const RA_HOURS: Field = Field::new(75, 2);
    pub const RA_MINUTES: Field = Field::new(77, 2);
    pub const RA_SECONDS: Field = Field::new(79, 4);
    pub const DEC_SIGN: usize = 83;
    pub const DEC_DEGREES: Field = Field::new(84, 2);
    pub const DEC_MINUTES: Field = Field::new(86, 2);
    pub const DEC_SECONDS: Field = Field::new(88, 2);
    /// Blank here means the whole line is an unpopulated placeholder.
    pub const DISCRIMINATOR: usize = 94;
    pub const MAGNITUDE: Field = Field::new(102, 5);
    pub const SPECTRAL_CLASS: Field = Field::new(127, 20);
    pub const COLOR: usize = 129;
    pub const PECULIARITY: Field = Field::new(147, 1);
    pub const PM_RA: Field = Field::new(148, 6);
    pub const PM_DEC: Field = Field::new(154, 6);
    pub const RADIAL_VELOCITY: Field = Field::new(166, 4);
}

/// Reads the whole primary file.
///
/// Returns the populated stars plus the physical line count — the count
/// includes placeholder lines and anchors the supplement numbering.
pub(crate) fn read(path: &Path, names: &StarNames) -> Result<(Vec<Star>, usize)> {
    let mut lines = RecordLines::open(path)?;
    let mut stars = Vec::new();
    while let Some(line) = lines.next_line()? {
        let discriminator =
            byte_at(&line, layout::DISCRIMINATOR).map_err(|e| lines.malformed(e))?;
        if discriminator == b' ' {
            continue;
        }
        let mut star = decode(&lines, &line)?;
        star.proper_name = resolve(&star, names);
        stars.push(star);
    }
    Ok((stars, lines.line_number()))
}

fn decode(lines: &RecordLines, line: &[u8]) -> Result<Star> {
    use layout::*;
    let ctx = |e| lines.malformed(e);

    let number = NUMBER.parse::<u16>(line).map_err(ctx)?;
    let name = NAME.text(line).map_err(ctx)?;

    let hd_number = HD.optional(line).map_err(ctx)?;
    let sao_number = SAO.parse_optional::<u32>(line).map_err(ctx)?;
    let fk5_number = FK5.parse_optional::<u16>(line).map_err(ctx)?;
    let variable_name = variable_name(lines, line)?;

    let ra = Hms::new(
        RA_HOURS.parse(line).map_err(ctx)?,
        RA_MINUTES.parse(line).map_err(ctx)?,
        RA_SECONDS.parse(line).map_err(ctx)?,
    )
    .to_degrees();

    let sign = Sign::from_byte(byte_at(line, DEC_SIGN).map_err(ctx)?);
    let dec = sign.apply(
        Dms::new(
            DEC_DEGREES.parse(line).map_err(ctx)?,
            DEC_MINUTES.parse(line).map_err(ctx)?,
            DEC_SECONDS.parse::<u32>(line).map_err(ctx)? as f64,
        )
        .to_degrees(),
    );

    let pm_ra = PM_RA.parse_optional::<f64>(line).map_err(ctx)?;
    let pm_dec = PM_DEC.parse_optional::<f64>(line).map_err(ctx)?;
    let mag = MAGNITUDE.parse::<f32>(line).map_err(ctx)?;
    let color = byte_at(line, COLOR).map_err(ctx)? as char;

    Ok(Star {
        number,
        name,
        hd_number,
        sao_number,
        fk5_number,
        variable_name,
        ra,
        dec,
        pm_ra,
        pm_dec,
        mag,
        color,
        proper_name: None,
    })
}

/// Variable-star designation, minus the placeholder and redundancy cases:
/// `"Var"`/`"Var?"` mean "variable, unnamed", and a designation whose
/// leading token equals the Bayer letter of the name column adds nothing.
fn variable_name(lines: &RecordLines, line: &[u8]) -> Result<Option<String>> {
    let ctx = |e| lines.malformed(e);
    match layout::VARIABLE.optional(line).map_err(ctx)? {
        Some(v) if v == "Var" || v == "Var?" => Ok(None),
        Some(v) => {
            let prefix = layout::VARIABLE_PREFIX.trimmed(line).map_err(ctx)?;
            let bayer = layout::NAME_BAYER.trimmed(line).map_err(ctx)?;
            Ok(if prefix == bayer { None } else { Some(v) })
        }
        None => Ok(None),
    }
}
