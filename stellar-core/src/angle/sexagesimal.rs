//! Sexagesimal triples and explicit sign handling.
//!
//! Fixed-width catalogs publish right ascension as hours/minutes/seconds and
//! declination as degrees/minutes/seconds with the sign in a column of its
//! own. [`Hms`] and [`Dms`] convert those triples to decimal degrees; the
//! caller applies [`Sign`] afterwards, because the component fields
//! themselves carry no sign.
//!
//! ```
//! use stellar_core::{Dms, Hms, Sign};
//!
//! let ra = Hms::new(6, 45, 8.9).to_degrees();
//! assert!((ra - 101.287083).abs() < 1e-3);
//!
//! let dec = Sign::from_byte(b'-').apply(Dms::new(23, 45, 30.0).to_degrees());
//! assert!((dec + 23.758333).abs() < 1e-3);
//! ```

use super::{Angle, DEGREES_PER_HOUR};

/// Hours/minutes/seconds of right ascension.
///
/// One hour equals 15 degrees, so the conversion is
/// `(h + m/60 + s/3600) * 15`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Hms {
    pub const fn new(hours: u32, minutes: u32, seconds: f64) -> Self {
        Hms {
            hours,
            minutes,
            seconds,
        }
    }

    /// Converts to decimal degrees.
    pub fn to_degrees(self) -> f64 {
        (self.hours as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0)
            * DEGREES_PER_HOUR
    }

    /// Converts to an [`Angle`].
    pub fn to_angle(self) -> Angle {
        Angle::from_degrees(self.to_degrees())
    }
}

/// Degrees/minutes/seconds of a general angle.
///
/// The triple is unsigned; declination columns keep the sign in a separate
/// character, applied by the caller via [`Sign`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl Dms {
    pub const fn new(degrees: u32, minutes: u32, seconds: f64) -> Self {
        Dms {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Converts to decimal degrees.
    pub fn to_degrees(self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }

    /// Converts to an [`Angle`].
    pub fn to_angle(self) -> Angle {
        Angle::from_degrees(self.to_degrees())
    }
}

/// Sign read from a dedicated catalog column.
///
/// A `'-'` byte means negative; any other byte (usually `'+'` or a blank)
/// means positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Interprets a raw sign byte.
    pub fn from_byte(byte: u8) -> Self {
        if byte == b'-' {
            Sign::Negative
        } else {
            Sign::Positive
        }
    }

    /// Applies the sign to an unsigned degree value.
    pub fn apply(self, degrees: f64) -> f64 {
        match self {
            Sign::Positive => degrees,
            Sign::Negative => -degrees,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hms_to_degrees() {
        // RA "06 45 08.9" from the Sirius record
        let deg = Hms::new(6, 45, 8.9).to_degrees();
        assert!((deg - 101.28708).abs() < 1e-3);
    }

    #[test]
    fn test_hms_zero() {
        assert_eq!(Hms::new(0, 0, 0.0).to_degrees(), 0.0);
    }

    #[test]
    fn test_hms_full_turn() {
        assert!((Hms::new(24, 0, 0.0).to_degrees() - 360.0).abs() < 1e-12);
    }

    #[test]
    fn test_dms_to_degrees() {
        let deg = Dms::new(23, 45, 30.0).to_degrees();
        assert!((deg - 23.75833).abs() < 1e-3);
    }

    #[test]
    fn test_sign_from_byte() {
        assert_eq!(Sign::from_byte(b'-'), Sign::Negative);
        assert_eq!(Sign::from_byte(b'+'), Sign::Positive);
        assert_eq!(Sign::from_byte(b' '), Sign::Positive);
    }

    #[test]
    fn test_sign_apply() {
        let deg = Dms::new(23, 45, 30.0).to_degrees();
        assert!(Sign::Negative.apply(deg) < 0.0);
        assert_eq!(Sign::Positive.apply(deg), deg);
        assert_eq!(Sign::Negative.apply(deg), -deg);
    }

    #[test]
    fn test_to_angle() {
        let a = Hms::new(18, 36, 56.3).to_angle();
        assert!((a.hours() - 18.615639).abs() < 1e-5);
    }
}
