use camino::Utf8PathBuf;
use thiserror::Error;

/// Record-level failures found while reading a VSOP87 coefficient file.
///
/// Variants
/// -----------------
/// * `UnexpectedVersion` – Column 17 of a header is not `'0'` (main version, elliptic elements).
/// * `UnexpectedBody` – Columns 22..29 of a header name another body than the file's.
/// * `InvalidElementIndex` – Column 41 of a header is not a digit in `1..=6`.
/// * `InvalidTimePower` – Column 59 of a header is not a digit in `0..=5`.
/// * `InvalidNumber` – A numeric field could not be parsed; payload carries the field name and slice.
/// * `TruncatedBlock` – A header declares more terms than there are lines left in the file.
/// * `TermLineTooShort` – A term record does not reach the last column of the frequency field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("expected version 0, found {0:?}")]
    UnexpectedVersion(char),

    #[error("expected body {expected:?}, found {found:?}")]
    UnexpectedBody { expected: String, found: String },

    #[error("invalid element index {0:?}")]
    InvalidElementIndex(char),

    #[error("invalid power of time {0:?}")]
    InvalidTimePower(char),

    #[error("invalid {field} field: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("block declares {declared} terms but only {available} lines remain")]
    TruncatedBlock { declared: usize, available: usize },

    #[error("term record has {length} characters, at least {required} required")]
    TermLineTooShort { length: usize, required: usize },
}

#[derive(Error, Debug)]
pub enum Vsop87Error {
    #[error("Invalid precision: {0} (expected a value in [0, 0.01])")]
    InvalidPrecision(f64),

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Unable to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}, line {line}: {kind}")]
    Format {
        path: Utf8PathBuf,
        line: usize,
        kind: FormatError,
    },

    #[error("Malformed check file {path}, line {line}: {reason}")]
    CheckFile {
        path: Utf8PathBuf,
        line: usize,
        reason: String,
    },
}

impl Vsop87Error {
    /// Line number (1-based) attached to format and check-file errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Vsop87Error::Format { line, .. } | Vsop87Error::CheckFile { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl PartialEq for Vsop87Error {
    fn eq(&self, other: &Self) -> bool {
        use Vsop87Error::*;
        match (self, other) {
            (InvalidPrecision(a), InvalidPrecision(b)) => a.to_bits() == b.to_bits(),
            (UnknownBody(a), UnknownBody(b)) => a == b,

            // io::Error is not comparable: same path and same kind
            (Io { path: pa, source: sa }, Io { path: pb, source: sb }) => {
                pa == pb && sa.kind() == sb.kind()
            }

            (
                Format {
                    path: pa,
                    line: la,
                    kind: ka,
                },
                Format {
                    path: pb,
                    line: lb,
                    kind: kb,
                },
            ) => pa == pb && la == lb && ka == kb,
            (
                CheckFile {
                    path: pa,
                    line: la,
                    reason: ra,
                },
                CheckFile {
                    path: pb,
                    line: lb,
                    reason: rb,
                },
            ) => pa == pb && la == lb && ra == rb,

            _ => false,
        }
    }
}
