//! Heliocentric elliptic elements of the planets from the VSOP87 theory.
//!
//! The coefficient files of the main version of VSOP87 are read once into an
//! [`EllipticModel`], keeping only the terms needed for a requested precision;
//! the model then evaluates `a, l, k, h, q, p` for any Julian date.
//!
//! ```rust, no_run
//! use vsop87::{Body, EllipticModel};
//!
//! let model = EllipticModel::new("data/vsop87", 1e-7, 2451545.0)?;
//! let jupiter = model.pos(2460000.5, Body::Jupiter);
//! println!("e = {}", jupiter.eccentricity());
//! # Ok::<(), vsop87::Vsop87Error>(())
//! ```
pub mod body;
pub mod check_file;
pub mod coefficients;
pub mod constants;
pub mod elliptic;
pub mod elliptic_model;
pub mod vsop87_errors;

pub use body::Body;
pub use coefficients::{CoefficientStore, ElementSeries, OrbitalElement, Series, Term};
pub use elliptic::{Elliptic, Rectangular, Spherical};
pub use elliptic_model::EllipticModel;
pub use vsop87_errors::{FormatError, Vsop87Error};
