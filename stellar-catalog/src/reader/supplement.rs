//! Supplement catalog format.
//!
//! Same record shape as the primary catalog, different byte offsets, and no
//! discriminator — every line is a populated record. The format carries no
//! catalog number of its own: numbering continues where the primary file
//! ends, `primary_count + 1-based line ordinal`. Name, FK5 and
//! variable-name columns do not exist in this format.

use super::RecordLines;
use crate::errors::Result;
use crate::fields::byte_at;
use crate::names::{resolve, StarNames};
use crate::star::Star;
use std::path::Path;
use stellar_core::{Dms, Hms, Sign};

pub(crate) mod layout {
    use crate::fields::Field;

    pub const HD: Field = Field::new(0, 8);
    pub const SAO: Field = Field::new(19, 6);
    pub const RA_HOURS: Field = Field::new(69, 2);
    pub const RA_MINUTES: Field = Field::new(72, 2);
    pub const RA_SECONDS: Field = Field::new(75, 4);
    pub const DEC_SIGN: usize = 80;
    pub const DEC_DEGREES: Field = Field::new(81, 2);
    pub const DEC_MINUTES: Field = Field::new(84, 2);
    pub const DEC_SECONDS: Field = Field::new(87, 2);
    pub const MAGNITUDE: Field = Field::new(104, 4);
    pub const SPECTRAL_CLASS: Field = Field::new(127, 20);
    pub const COLOR: usize = 129;
    pub const PM_RA: Field = Field::new(148, 6);
    pub const PM_DEC: Field = Field::new(155, 6);
}

/// Blank designation column; the supplement format has none.
const BLANK_NAME: &str = "          ";

/// Reads the whole supplement file, numbering records after the primary
/// file's `primary_count` lines.
pub(crate) fn read(
    path: &Path,
    primary_count: usize,
    names: &StarNames,
) -> Result<Vec<Star>> {
    let mut lines = RecordLines::open(path)?;
    let mut stars = Vec::new();
    while let Some(line) = lines.next_line()? {
        let number = primary_count + lines.line_number();
        let mut star = decode(&lines, &line, number)?;
        star.proper_name = resolve(&star, names);
        stars.push(star);
    }
    Ok(stars)
}

fn decode(lines: &RecordLines, line: &[u8], number: usize) -> Result<Star> {
    use layout::*;
    let ctx = |e| lines.malformed(e);

    let number = u16::try_from(number)
        .map_err(|_| lines.malformed(format!("catalog number {number} overflows u16")))?;

    let hd_number = HD.optional(line).map_err(ctx)?;
    let sao_number = SAO.parse_optional::<u32>(line).map_err(ctx)?;

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
        name: BLANK_NAME.to_string(),
        hd_number,
        sao_number,
        fk5_number: None,
        variable_name: None,
        ra,
        dec,
        pm_ra,
        pm_dec,
        mag,
        color,
        proper_name: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Builds a 212-byte supplement line.
    fn supplement_line(hd: &str, sao: &str) -> Vec<u8> {
        let mut line = vec![b' '; 212];
        let put = |line: &mut Vec<u8>, start: usize, text: &str| {
            line[start..start + text.len()].copy_from_slice(text.as_bytes());
        };
        put(&mut line, 0, hd);
        put(&mut line, 19, sao);
        put(&mut line, 69, "23");
        put(&mut line, 72, "59");
        put(&mut line, 75, "54.5");
        put(&mut line, 80, "-");
        put(&mut line, 81, "03");
        put(&mut line, 84, "55");
        put(&mut line, 87, "20");
        put(&mut line, 104, "7.31");
        put(&mut line, 127, "K0");
        put(&mut line, 129, "K");
        put(&mut line, 148, "+0.011");
        put(&mut line, 155, "-0.042");
        line
    }

    fn read_lines(content: &[Vec<u8>], primary_count: usize) -> Vec<Star> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in content {
            file.write_all(line).unwrap();
            file.write_all(b"\n").unwrap();
        }
        read(file.path(), primary_count, &StarNames::new()).unwrap()
    }

    #[test]
    fn test_numbering_continues_after_primary() {
        let stars = read_lines(
            &[supplement_line("  225300", "147066"), supplement_line("  225301", "147067")],
            9110,
        );
        assert_eq!(stars[0].number, 9111);
        assert_eq!(stars[1].number, 9112);
    }

    #[test]
    fn test_decode_record() {
        let stars = read_lines(&[supplement_line("  225300", "147066")], 9110);
        let star = &stars[0];
        assert_eq!(star.name, "          ");
        assert_eq!(star.hd_number.as_deref(), Some("225300"));
        assert_eq!(star.sao_number, Some(147066));
        assert_eq!(star.fk5_number, None);
        assert_eq!(star.variable_name, None);
        assert!((star.ra - 359.977083).abs() < 1e-4);
        assert!((star.dec + 3.922222).abs() < 1e-4);
        assert_eq!(star.mag, 7.31);
        assert_eq!(star.color, 'K');
        assert_eq!(star.pm_ra, Some(0.011));
        assert_eq!(star.pm_dec, Some(-0.042));
    }

    #[test]
    fn test_every_line_yields_a_record() {
        let stars = read_lines(
            &[
                supplement_line("  225300", "147066"),
                supplement_line("  225301", "      "),
                supplement_line("        ", "147068"),
            ],
            0,
        );
        assert_eq!(stars.len(), 3);
        assert_eq!(stars[1].sao_number, None);
        assert_eq!(stars[2].hd_number, None);
    }
}
