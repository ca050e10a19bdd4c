//! Fixed-column field extraction over raw record bytes.
//!
//! Both catalog formats are fixed-width text addressed by **byte** offset.
//! The files predate Unicode and may carry arbitrary 8-bit values, so lines
//! are kept as byte slices and decoded Latin-1 (byte → U+00XX) only after a
//! field has been cut out — offsets stay byte-accurate no matter what the
//! name columns contain.
//!
//! A [`Field`] is a `(start, len)` pair; each record layout is a table of
//! `Field` constants consumed by one generic decoder (see
//! [`reader::primary`](crate::reader) and the supplement counterpart).
//!
//! Two rules hold for every caller:
//!
//! - A line shorter than `start + len` is malformed. There is no padding.
//! - A whitespace-only field is *absent* (`None`), never zero or a sentinel.

use std::str::FromStr;
use thiserror::Error;

/// Extraction failure local to one line.
///
/// Converted by the readers into a [`CatalogError::Format`](crate::CatalogError)
/// carrying the file and line number.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("line is {len} bytes, field at {start}..{end} runs past the end")]
    ShortLine {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("malformed numeric field '{0}'")]
    Malformed(String),
}

/// Decodes a byte slice as Latin-1, one char per byte.
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// One column of a fixed-width record: byte offset plus length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub start: usize,
    pub len: usize,
}

impl Field {
    pub const fn new(start: usize, len: usize) -> Self {
        Field { start, len }
    }

    const fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns the raw bytes of this field, or an error if the line is too
    /// short to contain it.
    pub fn raw<'a>(&self, line: &'a [u8]) -> Result<&'a [u8], FieldError> {
        if line.len() < self.end() {
            return Err(FieldError::ShortLine {
                start: self.start,
                end: self.end(),
                len: line.len(),
            });
        }
        Ok(&line[self.start..self.end()])
    }

    /// Returns the field exactly as stored, padding included.
    pub fn text(&self, line: &[u8]) -> Result<String, FieldError> {
        Ok(decode_latin1(self.raw(line)?))
    }

    /// Returns the field with surrounding whitespace trimmed.
    pub fn trimmed(&self, line: &[u8]) -> Result<String, FieldError> {
        Ok(self.text(line)?.trim().to_string())
    }

    /// Returns the trimmed field, mapping a blank field to `None`.
    pub fn optional(&self, line: &[u8]) -> Result<Option<String>, FieldError> {
        let text = self.trimmed(line)?;
        Ok(if text.is_empty() { None } else { Some(text) })
    }

    /// Parses a required numeric field.
    ///
    /// Parsing goes through `str::parse`, which is locale-independent: the
    /// decimal point is always `.`.
    pub fn parse<T: FromStr>(&self, line: &[u8]) -> Result<T, FieldError> {
        let text = self.trimmed(line)?;
        text.parse()
            .map_err(|_| FieldError::Malformed(text.clone()))
    }

    /// Parses an optional numeric field; blank means `None`, anything else
    /// must parse.
    pub fn parse_optional<T: FromStr>(&self, line: &[u8]) -> Result<Option<T>, FieldError> {
        match self.optional(line)? {
            Some(text) => text
                .parse()
                .map(Some)
                .map_err(|_| FieldError::Malformed(text.clone())),
            None => Ok(None),
        }
    }
}

/// Returns the single byte at `index`, or a short-line error.
pub(crate) fn byte_at(line: &[u8], index: usize) -> Result<u8, FieldError> {
    line.get(index).copied().ok_or(FieldError::ShortLine {
        start: index,
        end: index + 1,
        len: line.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_preserves_padding() {
        let field = Field::new(4, 10);
        let line = b"2061 58Alp Ori rest of record";
        assert_eq!(field.text(line).unwrap(), " 58Alp Ori");
    }

    #[test]
    fn test_trimmed() {
        let field = Field::new(0, 6);
        assert_eq!(field.trimmed(b"  2061 x").unwrap(), "2061");
        assert_eq!(field.trimmed(b"2061  x").unwrap(), "2061");
    }

    #[test]
    fn test_optional_blank_is_none() {
        let field = Field::new(2, 4);
        assert_eq!(field.optional(b"xx    yy").unwrap(), None);
        assert_eq!(field.optional(b"xx 12 yy").unwrap(), Some("12".into()));
    }

    #[test]
    fn test_short_line_is_error() {
        let field = Field::new(25, 6);
        let err = field.raw(b"too short").unwrap_err();
        assert!(matches!(err, FieldError::ShortLine { end: 31, len: 9, .. }));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(Field::new(0, 4).parse::<u16>(b"2061x").unwrap(), 2061);
        assert_eq!(Field::new(0, 5).parse::<f32>(b" 0.50").unwrap(), 0.5);
        // leading '+' is accepted, as in the proper-motion columns
        assert_eq!(Field::new(0, 6).parse::<f64>(b"+0.003").unwrap(), 0.003);
    }

    #[test]
    fn test_parse_malformed() {
        let err = Field::new(0, 4).parse::<u16>(b"20a1").unwrap_err();
        assert_eq!(err.to_string(), "malformed numeric field '20a1'");
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(
            Field::new(0, 6).parse_optional::<u32>(b"      ").unwrap(),
            None
        );
        assert_eq!(
            Field::new(0, 6).parse_optional::<u32>(b"113271").unwrap(),
            Some(113271)
        );
        assert!(Field::new(0, 6).parse_optional::<u32>(b"x113 z").is_err());
    }

    #[test]
    fn test_latin1_bytes_survive() {
        // 0xE9 is 'é' in Latin-1; it must decode and not shift offsets
        let mut line = vec![b' '; 20];
        line[4] = 0xE9;
        line[5] = b'X';
        assert_eq!(Field::new(4, 2).text(&line).unwrap(), "éX");
        assert_eq!(Field::new(6, 2).text(&line).unwrap(), "  ");
    }

    #[test]
    fn test_byte_at() {
        assert_eq!(byte_at(b"abc", 1).unwrap(), b'b');
        assert!(byte_at(b"abc", 3).is_err());
    }
}
