//! # VSOP87 coefficient storage
//!
//! In-memory representation of the trigonometric series read from the VSOP87
//! coefficient files.
//!
//! ## Structure
//!
//! ```text
//! CoefficientStore
//! └── ElementSeries        one per body
//!     └── Series           one per orbital element (a, l, k, h, q, p)
//!         └── [Vec<Term>; 6]   one slot per power of time T^0 .. T^5
//! ```
//!
//! A [`Term`] contributes `amplitude · cos(phase + frequency · T)` where `T` is the
//! time since J2000.0 in Julian millennia. A [`Series`] evaluates to
//! `Σ_k T^k · Σ_terms amplitude · cos(phase + frequency · T)`.
//!
//! The store is filled once by [`CoefficientStore::build`] (see [`reader`]) and is
//! read-only afterwards, so it can be shared across threads without locking.
//!
//! ## See also
//! ------------
//! * [`layout`] – Column layout of the coefficient files.
//! * [`reader`] – File parsing and precision-driven truncation.
use std::fmt;

use crate::{body::Body, constants::N_TIME_POWERS};

pub mod layout;
pub mod reader;

pub use reader::TruncationPolicy;

/// Orbital element carried by a series, in file order (index 1..=6 in column 41).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrbitalElement {
    /// Semi-major axis `a` (AU)
    A,
    /// Mean longitude `l` (rad)
    L,
    /// `k = e·cos(ϖ)`
    K,
    /// `h = e·sin(ϖ)`
    H,
    /// `q = sin(i/2)·cos(Ω)`
    Q,
    /// `p = sin(i/2)·sin(Ω)`
    P,
}

impl OrbitalElement {
    pub const ALL: [OrbitalElement; 6] = [
        OrbitalElement::A,
        OrbitalElement::L,
        OrbitalElement::K,
        OrbitalElement::H,
        OrbitalElement::Q,
        OrbitalElement::P,
    ];

    /// Element from its 1-based file index.
    pub fn from_index(idx: u8) -> Option<Self> {
        match idx {
            1..=6 => Some(OrbitalElement::ALL[(idx - 1) as usize]),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for OrbitalElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrbitalElement::A => "a",
            OrbitalElement::L => "l",
            OrbitalElement::K => "k",
            OrbitalElement::H => "h",
            OrbitalElement::Q => "q",
            OrbitalElement::P => "p",
        };
        write!(f, "{name}")
    }
}

/// One trigonometric addend of a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub amplitude: f64,
    pub phase: f64,
    pub frequency: f64,
}

impl Term {
    #[inline]
    fn value(&self, t: f64) -> f64 {
        self.amplitude * (self.phase + self.frequency * t).cos()
    }
}

/// Terms of one orbital element, grouped by power of time.
///
/// Each slot keeps the file order of its terms; an empty slot contributes zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    powers: [Vec<Term>; N_TIME_POWERS],
}

impl Series {
    /// Terms multiplied by `T^power`.
    ///
    /// Panics if `power > 5`.
    pub fn terms(&self, power: usize) -> &[Term] {
        &self.powers[power]
    }

    pub(crate) fn set_terms(&mut self, power: usize, terms: Vec<Term>) {
        self.powers[power] = terms;
    }

    /// Total number of terms kept across all powers of time.
    pub fn term_count(&self) -> usize {
        self.powers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.term_count() == 0
    }

    /// Evaluate the series for precomputed powers of time `t[k] = T^k`.
    ///
    /// Each slot is summed in stored order, then the slot sums are weighted by
    /// `T^k` and accumulated by ascending power.
    pub fn evaluate(&self, t: &[f64; N_TIME_POWERS]) -> f64 {
        self.powers
            .iter()
            .zip(t.iter())
            .fold(0.0, |acc, (terms, tk)| {
                let slot = terms.iter().fold(0.0, |sum, term| sum + term.value(t[1]));
                acc + tk * slot
            })
    }
}

/// The six series of one body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementSeries {
    elements: [Series; 6],
}

impl ElementSeries {
    pub fn series(&self, element: OrbitalElement) -> &Series {
        &self.elements[element.slot()]
    }

    pub(crate) fn series_mut(&mut self, element: OrbitalElement) -> &mut Series {
        &mut self.elements[element.slot()]
    }

    pub fn term_count(&self) -> usize {
        self.elements.iter().map(Series::term_count).sum()
    }
}

/// Element series of every body, indexed by [`Body`].
///
/// Bodies without a coefficient file (Sun, Earth) keep empty series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoefficientStore {
    bodies: [ElementSeries; Body::COUNT],
}

impl CoefficientStore {
    pub fn body(&self, body: Body) -> &ElementSeries {
        &self.bodies[body.index()]
    }

    pub fn series(&self, body: Body, element: OrbitalElement) -> &Series {
        self.body(body).series(element)
    }

    pub(crate) fn insert(&mut self, body: Body, series: ElementSeries) {
        self.bodies[body.index()] = series;
    }

    /// Total number of terms kept for all bodies.
    pub fn term_count(&self) -> usize {
        self.bodies.iter().map(ElementSeries::term_count).sum()
    }
}
