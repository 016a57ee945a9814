#![allow(dead_code)]

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;
use vsop87::Body;

pub fn header_line(name: &str, element: u8, power: u8, count: usize) -> String {
    let line = format!(
        " VSOP87 VERSION  0    {name:<7}   VARIABLE {element} (ALKHQP)    *T**{power}{count:>7} TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX J2000"
    );
    format!("{line:<132}")
}

/// Phase must lie in `[0, 10)` to fit the unsigned 13-column field.
pub fn term_line(amplitude: f64, phase: f64, frequency: f64) -> String {
    format!(
        "{:>79}{amplitude:>18.11}{phase:>14.11}{frequency:>20.11}",
        "    1  1  0  0  0  0  0  0  0  0  0  0"
    )
}

/// One block with the given `(amplitude, phase, frequency)` terms.
pub fn block(body: Body, element: u8, power: u8, terms: &[(f64, f64, f64)]) -> String {
    let mut out = header_line(body.name_in_file(), element, power, terms.len());
    out.push('\n');
    for (a, b, c) in terms {
        out.push_str(&term_line(*a, *b, *c));
        out.push('\n');
    }
    out
}

/// A small but complete coefficient file: every element, several powers of time,
/// amplitudes sorted by decreasing magnitude inside each block.
pub fn synthetic_file(body: Body) -> String {
    let a0 = body.nominal_distance();
    [
        block(
            body,
            1,
            0,
            &[(a0, 0.0, 0.0), (2e-3 * a0, 1.5, 100.0), (1e-7 * a0, 2.5, 2000.0)],
        ),
        block(body, 1, 1, &[(1e-5 * a0, 0.3, 50.0)]),
        block(
            body,
            2,
            0,
            &[(4.4, 0.0, 0.0), (1e-4, 0.7, 300.0), (1e-8, 3.1, 900.0)],
        ),
        block(body, 2, 1, &[(26087.9 / a0, 0.0, 0.0), (2e-5, 1.1, 30.0)]),
        block(body, 2, 2, &[(3e-6, 0.2, 10.0)]),
        block(body, 3, 0, &[(0.04, 0.0, 0.0), (5e-6, 1.9, 120.0)]),
        block(body, 4, 0, &[(0.2, 0.0, 0.0), (5e-6, 4.2, 120.0)]),
        block(body, 5, 0, &[(0.04, 0.0, 0.0)]),
        block(body, 6, 0, &[(0.045, 0.0, 0.0)]),
        block(body, 6, 3, &[(1e-9, 0.0, 0.0)]),
    ]
    .concat()
}

pub struct Fixture {
    _dir: TempDir,
    pub path: Utf8PathBuf,
}

impl Fixture {
    /// One synthetic file per body in a fresh temporary directory.
    pub fn new() -> Self {
        Self::with_files(|body| Some(synthetic_file(body)))
    }

    /// Files returned by `content`; `None` leaves the body's file out.
    pub fn with_files(content: impl Fn(Body) -> Option<String>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap().to_path_buf();
        for body in Body::SERIES_BODIES {
            if let Some(text) = content(body) {
                fs::write(path.join(body.file_name()), text).unwrap();
            }
        }
        Fixture { _dir: dir, path }
    }
}
