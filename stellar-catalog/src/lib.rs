//! Fixed-width bright-star catalog reader.
//!
//! Decodes a pair of related fixed-width text catalogs — a primary file and
//! a supplement whose numbering continues where the primary ends — into an
//! in-memory star sequence, with an independent on-demand lookup for the
//! extended attributes the bulk load skips. A small `key = value`
//! symbol-table loader rides along because the same data directory carries
//! an alphabet file.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`reader`] | [`CatalogReader`], [`CatalogPaths`], the two format decoders, detail lookup |
//! | [`star`] | [`Star`] and [`StarDetail`] records |
//! | [`fields`] | fixed-column byte extraction ([`fields::Field`]) |
//! | [`names`] | proper-name resolution against a caller-supplied dictionary |
//! | [`alphabet`] | [`SymbolTable`] loader |
//! | [`errors`] | [`CatalogError`], [`Result`] |
//!
//! # Quick Start
//!
//! ```no_run
//! use stellar_catalog::{CatalogPaths, CatalogReader, StarNames};
//! use std::path::Path;
//!
//! # fn main() -> stellar_catalog::Result<()> {
//! let reader = CatalogReader::new(CatalogPaths::from_dir(Path::new("data")));
//!
//! // The host application supplies the proper-name dictionary.
//! let mut names = StarNames::new();
//! names.insert("HD 48915".to_string(), "Sirius".to_string());
//!
//! let stars = reader.read_stars(&names)?;
//! println!("{} stars", stars.len());
//!
//! if let Some(details) = reader.star_details(stars[0].number)? {
//!     println!("spectral class {}", details.spectral_class);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # File formats
//!
//! Both catalog files are fixed-width text addressed by byte offset, read
//! Latin-1 so arbitrary 8-bit bytes survive. Each format is a declarative
//! field table (`layout` modules in [`reader`]) consumed by one generic
//! extractor. Blank optional columns decode to `None`; a line shorter than
//! a referenced column is a hard [`CatalogError::Format`] — loads never
//! skip past a malformed record.
//!
//! # Features
//!
//! - **`cli`** — enables the `query-stars` binary for inspecting catalog
//!   files from the command line.

pub mod alphabet;
pub mod errors;
pub mod fields;
pub mod names;
pub mod reader;
pub mod star;

pub use alphabet::SymbolTable;
pub use errors::{CatalogError, Result};
pub use names::{resolve, StarNames};
pub use reader::{CatalogPaths, CatalogReader};
pub use star::{Star, StarDetail};
