//! # Fixed-column layout of VSOP87 coefficient files
//!
//! Each coefficient file of the main version (elliptic elements) is a sequence of
//! blocks. A block starts with a header record and is followed by `N` term records.
//! The column positions below are 0-based, end-exclusive byte offsets.
//!
//! Header record
//! -----------------
//! * `17` – Version digit, `0` for the main version.
//! * `22..29` – Body name, blank padded to 7 characters.
//! * `41` – Element index, `1..=6` for `a, l, k, h, q, p`.
//! * `59` – Power of time, `0..=5`.
//! * `60..67` – Number of term records following the header.
//!
//! Term record
//! -----------------
//! * `79..97` – Amplitude (trimmed before parsing).
//! * `98..111` – Phase (parsed as is, without trimming).
//! * `111..131` – Frequency (trimmed before parsing).
use std::ops::Range;

use crate::vsop87_errors::FormatError;

/// Shortest header record still considered as data; anything shorter ends the file.
pub const MIN_HEADER_LENGTH: usize = 132;

/// Shortest term record holding every numeric field.
pub const MIN_TERM_LENGTH: usize = 131;

/// How the characters of a field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single character
    Char,
    /// Verbatim text
    Text,
    /// Integer, surrounding blanks ignored
    Integer,
    /// Floating point value, surrounding blanks ignored
    Float,
    /// Floating point value parsed exactly as it appears in the columns
    RawFloat,
}

/// Descriptor of one fixed-width field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub columns: Range<usize>,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, start: usize, end: usize, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            columns: start..end,
            kind,
        }
    }

    /// Raw text of the field, or `None` if the line stops before its last column.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.get(self.columns.clone())
    }

    fn text<'a>(&self, line: &'a str) -> Result<&'a str, FormatError> {
        self.slice(line).ok_or_else(|| FormatError::TermLineTooShort {
            length: line.len(),
            required: self.columns.end,
        })
    }

    fn invalid(&self, value: &str) -> FormatError {
        FormatError::InvalidNumber {
            field: self.name,
            value: value.to_string(),
        }
    }

    /// Single character of a [`FieldKind::Char`] field.
    pub fn char(&self, line: &str) -> Result<char, FormatError> {
        debug_assert_eq!(self.kind, FieldKind::Char);
        let text = self.text(line)?;
        text.chars().next().ok_or_else(|| self.invalid(text))
    }

    /// Integer value of a [`FieldKind::Integer`] field.
    pub fn integer(&self, line: &str) -> Result<usize, FormatError> {
        debug_assert_eq!(self.kind, FieldKind::Integer);
        let text = self.text(line)?;
        text.trim().parse().map_err(|_| self.invalid(text))
    }

    /// Floating point value of a [`FieldKind::Float`] or [`FieldKind::RawFloat`] field.
    pub fn float(&self, line: &str) -> Result<f64, FormatError> {
        let text = self.text(line)?;
        let digits = match self.kind {
            FieldKind::RawFloat => text,
            _ => text.trim(),
        };
        digits.parse().map_err(|_| self.invalid(text))
    }
}

/// Fields of a header record.
pub mod header {
    use super::{FieldKind, FieldSpec};

    pub const VERSION: FieldSpec = FieldSpec::new("version", 17, 18, FieldKind::Char);
    pub const BODY: FieldSpec = FieldSpec::new("body", 22, 29, FieldKind::Text);
    pub const ELEMENT: FieldSpec = FieldSpec::new("element index", 41, 42, FieldKind::Char);
    pub const TIME_POWER: FieldSpec = FieldSpec::new("power of time", 59, 60, FieldKind::Char);
    pub const TERM_COUNT: FieldSpec = FieldSpec::new("term count", 60, 67, FieldKind::Integer);

    pub const FIELDS: [&FieldSpec; 5] = [&VERSION, &BODY, &ELEMENT, &TIME_POWER, &TERM_COUNT];
}

/// Fields of a term record.
pub mod term {
    use super::{FieldKind, FieldSpec};

    pub const AMPLITUDE: FieldSpec = FieldSpec::new("amplitude", 79, 97, FieldKind::Float);
    pub const PHASE: FieldSpec = FieldSpec::new("phase", 98, 111, FieldKind::RawFloat);
    pub const FREQUENCY: FieldSpec = FieldSpec::new("frequency", 111, 131, FieldKind::Float);

    pub const FIELDS: [&FieldSpec; 3] = [&AMPLITUDE, &PHASE, &FREQUENCY];
}
