//! Angle fundamentals shared by the stellar catalog crates.
//!
//! Star catalogs publish positions sexagesimally — right ascension as
//! hours/minutes/seconds, declination as signed degrees/minutes/seconds —
//! while everything downstream wants decimal degrees. This crate owns that
//! boundary:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] newtype, [`Hms`]/[`Dms`] triples, [`Sign`], display formatters |
//!
//! # Quick Start
//!
//! ```
//! use stellar_core::{Dms, Hms, Sign};
//!
//! // Right ascension 06h 45m 08.9s
//! let ra = Hms::new(6, 45, 8.9).to_degrees();
//! assert!((ra - 101.287083).abs() < 1e-3);
//!
//! // Declination -16° 42' 58"
//! let dec = Sign::Negative.apply(Dms::new(16, 42, 58.0).to_degrees());
//! assert!((dec + 16.716111).abs() < 1e-3);
//! ```

pub mod angle;

pub use angle::{Angle, Dms, DmsFmt, Hms, HmsFmt, Sign};
