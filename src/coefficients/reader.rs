//! # VSOP87 coefficient file reader
//!
//! Reads the eight coefficient files of the main version of VSOP87 and keeps, for
//! every block, only the terms that matter for a requested precision.
//!
//! ## Truncation
//! -----------------
//! Blocks are sorted by decreasing amplitude. For each block a threshold `p` is
//! derived from the requested precision, the block's power of time and the time
//! elapsed between J2000.0 and a reference date:
//!
//! ```text
//! q = max(3, -log10(precision))
//! p = precision / 10 / (q - 2) / (|T|^k + k · |T|^k' · 1e-4)
//! p = p · a0            (semi-major axis series only)
//! ```
//!
//! where `k` is the power of time of the block, `k'` the power of the previous
//! block of the same file and `a0` the nominal distance of the body. The first term
//! whose amplitude is below `p` ends the block; it and every following term are
//! dropped. A precision of `0` keeps every term.
//!
//! ## Error handling
//! -----------------
//! Any malformed record aborts the whole read with a [`Vsop87Error::Format`]
//! carrying the 1-based line number. A header shorter than
//! [`MIN_HEADER_LENGTH`](super::layout::MIN_HEADER_LENGTH) marks the end of the
//! usable data and is not an error.
use camino::Utf8Path;

use super::{
    layout::{header, term, MIN_HEADER_LENGTH, MIN_TERM_LENGTH},
    CoefficientStore, ElementSeries, OrbitalElement, Term,
};
use crate::{
    body::Body,
    constants::{
        millennia_since_j2000, time_powers, JulianDate, MAX_PRECISION, MAX_TIME_POWER,
        MIN_PRECISION, N_TIME_POWERS,
    },
    vsop87_errors::{FormatError, Vsop87Error},
};

/// Precision-driven selection of the terms kept from each block.
#[derive(Debug, Clone, PartialEq)]
pub struct TruncationPolicy {
    precision: f64,
    scale: f64,
    elapsed_powers: [f64; N_TIME_POWERS],
}

impl TruncationPolicy {
    /// Build a policy for a target precision and a reference date.
    ///
    /// Arguments
    /// -----------------
    /// * `precision` – Target precision in `[0, 0.01]` (radians for angles, AU for `a`).
    /// * `reference_date` – Julian date the model is meant to be used around. It does
    ///   not have to be exact; only the elapsed time from J2000.0 matters.
    ///
    /// Return
    /// ----------
    /// * The policy, or [`Vsop87Error::InvalidPrecision`] if `precision` is out of range or NaN.
    pub fn new(precision: f64, reference_date: JulianDate) -> Result<Self, Vsop87Error> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(Vsop87Error::InvalidPrecision(precision));
        }

        let scale = (-(precision + 1e-50).log10()).max(3.0);
        let elapsed = millennia_since_j2000(reference_date).abs();

        Ok(TruncationPolicy {
            precision,
            scale,
            elapsed_powers: time_powers(elapsed),
        })
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// `|T|^power` at the reference date.
    #[inline]
    fn elapsed(&self, power: usize) -> f64 {
        self.elapsed_powers[power]
    }

    /// Smallest amplitude kept in a block.
    ///
    /// Arguments
    /// -----------------
    /// * `body` – Body of the file being read.
    /// * `element` – Element of the block; only `a` is scaled by the nominal distance.
    /// * `power` – Power of time of the block.
    /// * `previous` – Elapsed-time factor of the previous block in the same file (`0` for the first).
    pub fn threshold(
        &self,
        body: Body,
        element: OrbitalElement,
        power: usize,
        previous: f64,
    ) -> f64 {
        let d0 = self.elapsed(power);
        let mut p =
            self.precision / 10. / (self.scale - 2.) / (d0 + power as f64 * previous * 1e-4 + 1e-50);
        if element == OrbitalElement::A {
            p *= body.nominal_distance();
        }
        p
    }
}

/// Decoded header record.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BlockHeader {
    element: OrbitalElement,
    power: usize,
    term_count: usize,
}

impl BlockHeader {
    /// Decode a header record of `body`'s file. The line must be at least
    /// [`MIN_HEADER_LENGTH`] long.
    fn parse(line: &str, body: Body) -> Result<Self, FormatError> {
        let version = header::VERSION.char(line)?;
        if version != '0' {
            return Err(FormatError::UnexpectedVersion(version));
        }

        let name = header::BODY.slice(line).unwrap_or_default();
        if name != body.name_in_file() {
            return Err(FormatError::UnexpectedBody {
                expected: body.name_in_file().to_string(),
                found: name.to_string(),
            });
        }

        let ic = header::ELEMENT.char(line)?;
        let element = ic
            .to_digit(10)
            .and_then(|d| OrbitalElement::from_index(d as u8))
            .ok_or(FormatError::InvalidElementIndex(ic))?;

        let it = header::TIME_POWER.char(line)?;
        let power = it
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| *d <= MAX_TIME_POWER)
            .ok_or(FormatError::InvalidTimePower(it))?;

        let term_count = header::TERM_COUNT.integer(line)?;

        Ok(BlockHeader {
            element,
            power,
            term_count,
        })
    }
}

/// Read the term records of one block until the first amplitude below `threshold`.
///
/// On failure, returns the offset of the offending record within `records`.
fn read_terms(records: &[&str], threshold: f64) -> Result<Vec<Term>, (usize, FormatError)> {
    let mut terms = Vec::with_capacity(records.len());

    for (offset, line) in records.iter().enumerate() {
        let at = |kind| (offset, kind);

        if line.len() < MIN_TERM_LENGTH {
            return Err(at(FormatError::TermLineTooShort {
                length: line.len(),
                required: MIN_TERM_LENGTH,
            }));
        }

        let amplitude = term::AMPLITUDE.float(line).map_err(at)?;
        if amplitude.abs() < threshold {
            break;
        }

        terms.push(Term {
            amplitude,
            phase: term::PHASE.float(line).map_err(at)?,
            frequency: term::FREQUENCY.float(line).map_err(at)?,
        });
    }

    Ok(terms)
}

/// Parse the content of one coefficient file.
///
/// Arguments
/// -----------------
/// * `body` – Body the file belongs to; every header must name it.
/// * `content` – Whole text of the file.
/// * `policy` – Truncation policy applied to every block.
/// * `path` – File path, used in error reports only.
///
/// Return
/// ----------
/// * The six series of the body. Blocks absent from the file leave empty slots;
///   a block repeated for the same element and power replaces the earlier one.
pub fn parse_body_series(
    body: Body,
    content: &str,
    policy: &TruncationPolicy,
    path: &Utf8Path,
) -> Result<ElementSeries, Vsop87Error> {
    let lines: Vec<&str> = content.lines().collect();
    let format_error = |index: usize, kind: FormatError| Vsop87Error::Format {
        path: path.to_path_buf(),
        line: index + 1,
        kind,
    };

    let mut series = ElementSeries::default();
    let mut previous = 0.0;
    let mut n = 0;

    while n < lines.len() {
        let line = lines[n];
        if line.len() < MIN_HEADER_LENGTH {
            break;
        }

        let block = BlockHeader::parse(line, body).map_err(|kind| format_error(n, kind))?;
        if block.term_count == 0 {
            n += 1;
            continue;
        }

        let available = lines.len() - n - 1;
        if block.term_count > available {
            return Err(format_error(
                n,
                FormatError::TruncatedBlock {
                    declared: block.term_count,
                    available,
                },
            ));
        }

        let threshold = policy.threshold(body, block.element, block.power, previous);
        previous = policy.elapsed(block.power);

        let records = &lines[n + 1..n + 1 + block.term_count];
        let terms = read_terms(records, threshold)
            .map_err(|(offset, kind)| format_error(n + 1 + offset, kind))?;

        series
            .series_mut(block.element)
            .set_terms(block.power, terms);
        n += 1 + block.term_count;
    }

    Ok(series)
}

/// Read `<directory>/VSOP87.<ext>` for one body.
pub fn read_body_file(
    directory: &Utf8Path,
    body: Body,
    policy: &TruncationPolicy,
) -> Result<ElementSeries, Vsop87Error> {
    let path = directory.join(body.file_name());
    let content = std::fs::read_to_string(&path).map_err(|source| Vsop87Error::Io {
        path: path.clone(),
        source,
    })?;
    parse_body_series(body, &content, policy, &path)
}

impl CoefficientStore {
    /// Read the coefficient files of the eight VSOP87 bodies from `directory`.
    ///
    /// The precision is validated before any file is opened. The first failing file
    /// aborts the construction; no partially filled store is returned.
    ///
    /// Arguments
    /// -----------------
    /// * `directory` – Directory holding `VSOP87.mer`, `VSOP87.ven`, … `VSOP87.emb`.
    /// * `precision` – Target precision in `[0, 0.01]`, `0` keeps every term.
    /// * `reference_date` – Julian date driving the truncation of the time-dependent blocks.
    ///
    /// See also
    /// ------------
    /// * [`TruncationPolicy`] – Term selection rule.
    /// * [`EllipticModel::new`](crate::elliptic_model::EllipticModel::new) – Model built on top of the store.
    pub fn build(
        directory: impl AsRef<Utf8Path>,
        precision: f64,
        reference_date: JulianDate,
    ) -> Result<Self, Vsop87Error> {
        let policy = TruncationPolicy::new(precision, reference_date)?;
        Self::build_with_policy(directory.as_ref(), &policy)
    }

    pub fn build_with_policy(
        directory: &Utf8Path,
        policy: &TruncationPolicy,
    ) -> Result<Self, Vsop87Error> {
        let mut store = CoefficientStore::default();
        for body in Body::SERIES_BODIES {
            store.insert(body, read_body_file(directory, body, policy)?);
        }
        Ok(store)
    }
}
