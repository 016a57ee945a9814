//! # Constants and type definitions for VSOP87
//!
//! This module centralizes the **time constants**, **angle helpers**, and **unit type
//! aliases** shared by the coefficient reader and the series evaluator.
//!
//! ## Overview
//!
//! - Reference epoch and time unit of the VSOP87 series
//! - Accepted range of the truncation precision
//! - Unit aliases used in public signatures
//!
//! The series variable of VSOP87 is the time elapsed since J2000.0 expressed in
//! **Julian millennia** of 365 250 days.

// -------------------------------------------------------------------------------------------------
// Time and angle constants
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Julian date of J2000.0 (2000-01-01 12:00:00 TDB)
pub const T2000: f64 = 2_451_545.0;

/// Number of days in a Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Smallest truncation precision accepted by the coefficient reader (keeps every term)
pub const MIN_PRECISION: f64 = 0.0;

/// Largest truncation precision accepted by the coefficient reader
pub const MAX_PRECISION: f64 = 0.01;

/// Highest power of time appearing in a VSOP87 series (`T^0 .. T^5`)
pub const MAX_TIME_POWER: usize = 5;

/// Number of time-power slots in a series
pub const N_TIME_POWERS: usize = MAX_TIME_POWER + 1;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Julian date (days, TDB)
pub type JulianDate = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;

/// Elapsed Julian millennia between `date` and J2000.0.
///
/// Negative for dates before the epoch.
#[inline]
pub fn millennia_since_j2000(date: JulianDate) -> f64 {
    (date - T2000) / DAYS_PER_MILLENNIUM
}

/// Powers `t^0 .. t^5` of the elapsed time, each computed from the previous one.
///
/// The successive products are the ones the published reference values were
/// computed with, so they must not be replaced by `powi`.
#[inline]
pub fn time_powers(t: f64) -> [f64; N_TIME_POWERS] {
    let mut powers = [1.0; N_TIME_POWERS];
    for i in 1..N_TIME_POWERS {
        powers[i] = t * powers[i - 1];
    }
    powers
}

/// Reduce an angle into `[0, 2π)`.
///
/// `rem_euclid` alone can round a tiny negative input up to exactly `2π`;
/// that case is folded back to `0`.
#[inline]
pub fn principal_angle(a: Radian) -> Radian {
    let r = a.rem_euclid(DPI);
    if r >= DPI {
        0.0
    } else {
        r
    }
}
