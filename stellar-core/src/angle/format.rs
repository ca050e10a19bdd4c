//! Angle formatting for astronomical coordinates.
//!
//! Two sexagesimal notations are in use:
//!
//! ## Degrees-Minutes-Seconds (DMS)
//!
//! Used for declination. Format: `±DD° MM' SS.ss"`, sign always shown.
//!
//! ## Hours-Minutes-Seconds (HMS)
//!
//! Used for right ascension. Format: `HHʰ MMᵐ SS.ssˢ`, always positive;
//! negative angles wrap to [0, 24h).
//!
//! # Examples
//!
//! ```
//! use stellar_core::Angle;
//! use stellar_core::angle::{DmsFmt, HmsFmt};
//!
//! // Declination of Vega: +38° 47' 01"
//! let dec = Angle::from_degrees(38.783611);
//! let dms = DmsFmt { frac_digits: 0 };
//! assert_eq!(dms.fmt(dec), "+38° 47' 1\"");
//!
//! // Right ascension of Vega: 18h 36m 56s
//! let ra = Angle::from_hours(18.615556);
//! let hms = HmsFmt { frac_digits: 0 };
//! assert_eq!(hms.fmt(ra), "18ʰ 36ᵐ 56ˢ");
//!
//! // With fractional seconds
//! let hms_precise = HmsFmt { frac_digits: 2 };
//! assert_eq!(hms_precise.fmt(ra), "18ʰ 36ᵐ 56.00ˢ");
//! ```

use super::Angle;

/// Formatter for degrees-minutes-seconds (DMS) notation.
///
/// # Fields
///
/// * `frac_digits` - Decimal places for the arcseconds component. Use 0 for
///   whole arcseconds, 2-3 for sub-arcsecond precision.
///
/// # Example
///
/// ```
/// use stellar_core::Angle;
/// use stellar_core::angle::DmsFmt;
///
/// let dec = Angle::from_degrees(-23.4392);
///
/// let fmt0 = DmsFmt { frac_digits: 0 };
/// assert_eq!(fmt0.fmt(dec), "-23° 26' 21\"");
///
/// let fmt2 = DmsFmt { frac_digits: 2 };
/// assert_eq!(fmt2.fmt(dec), "-23° 26' 21.12\"");
/// ```
pub struct DmsFmt {
    pub frac_digits: u8,
}

impl DmsFmt {
    /// Formats the angle as `±DD° MM' SS.ss"`.
    pub fn fmt(&self, angle: Angle) -> String {
        let sign = if angle.degrees() < 0.0 { '-' } else { '+' };
        let (d, m, s) = split_sexagesimal(angle.degrees().abs(), self.frac_digits);
        format!(
            "{}{}° {}' {:.*}\"",
            sign, d, m, self.frac_digits as usize, s
        )
    }
}

/// Formatter for hours-minutes-seconds (HMS) notation.
///
/// The output is always positive; negative angles wrap into [0, 24h), so
/// -1.5h renders as 22ʰ 30ᵐ.
///
/// # Fields
///
/// * `frac_digits` - Decimal places for the seconds component.
pub struct HmsFmt {
    pub frac_digits: u8,
}

impl HmsFmt {
    /// Formats the angle as `HHʰ MMᵐ SS.ssˢ`.
    pub fn fmt(&self, angle: Angle) -> String {
        let (h, m, s) = split_sexagesimal(angle.normalized().hours(), self.frac_digits);
        format!("{}ʰ {}ᵐ {:.*}ˢ", h, m, self.frac_digits as usize, s)
    }
}

/// Splits a non-negative value into whole units, whole minutes, and seconds
/// rounded to `frac_digits`.
///
/// Rounding happens on an integer grid of 10^frac_digits steps per second so
/// a value like 59.999s carries into the next minute instead of printing as
/// "60".
fn split_sexagesimal(value: f64, frac_digits: u8) -> (u64, u64, f64) {
    let scale = 10u64.pow(frac_digits as u32);
    let steps = (value * 3600.0 * scale as f64).round() as u64;
    let per_minute = 60 * scale;
    let per_unit = 60 * per_minute;
    let units = steps / per_unit;
    let minutes = steps % per_unit / per_minute;
    let seconds = (steps % per_minute) as f64 / scale as f64;
    (units, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dms_whole_arcseconds() {
        let fmt = DmsFmt { frac_digits: 0 };
        assert_eq!(fmt.fmt(Angle::from_degrees(38.783611)), "+38° 47' 1\"");
    }

    #[test]
    fn test_dms_negative() {
        let fmt = DmsFmt { frac_digits: 2 };
        assert_eq!(fmt.fmt(Angle::from_degrees(-23.4392)), "-23° 26' 21.12\"");
    }

    #[test]
    fn test_hms_wraps_negative() {
        let fmt = HmsFmt { frac_digits: 0 };
        assert_eq!(fmt.fmt(Angle::from_hours(-1.5)), "22ʰ 30ᵐ 0ˢ");
    }

    #[test]
    fn test_hms_fractional() {
        let fmt = HmsFmt { frac_digits: 2 };
        assert_eq!(fmt.fmt(Angle::from_hours(18.615556)), "18ʰ 36ᵐ 56.00ˢ");
    }

    #[test]
    fn test_seconds_carry_into_minutes() {
        // 0h 59m 59.996s rounds up to 1h 0m 0.00s at two digits
        let fmt = HmsFmt { frac_digits: 2 };
        let angle = Angle::from_hours((59.0 * 60.0 + 59.996) / 3600.0);
        assert_eq!(fmt.fmt(angle), "1ʰ 0ᵐ 0.00ˢ");
    }
}
