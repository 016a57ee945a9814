//! # VSOP87 elliptic model
//!
//! [`EllipticModel`] is the query façade of the crate: it owns a
//! [`CoefficientStore`] built once from the coefficient files and evaluates the six
//! element series of a body for any date.
//!
//! ## Typical usage
//!
//! ```rust, no_run
//! use vsop87::{Body, EllipticModel};
//!
//! // Keep every term, reference date J2000.0
//! let model = EllipticModel::new("data/vsop87", 0.0, 2451545.0).unwrap();
//!
//! let mars = model.pos(2451545.0, Body::Mars);
//! println!("a = {} AU, l = {} rad", mars.a, mars.l);
//! ```
//!
//! ## Notes
//!
//! - Construction reads eight files and may take a while with `precision = 0`;
//!   queries are pure arithmetic and never fail.
//! - The model is immutable once built. `&EllipticModel` can be shared by any
//!   number of threads and `pos` allocates nothing.
//! - Querying [`Body::Sun`] or [`Body::Earth`] returns all-zero elements: the main
//!   version of VSOP87 has no series for them.
use camino::Utf8Path;
use hifitime::Epoch;

use crate::{
    body::Body,
    coefficients::{CoefficientStore, OrbitalElement},
    constants::{millennia_since_j2000, principal_angle, time_powers, JulianDate},
    elliptic::Elliptic,
    vsop87_errors::Vsop87Error,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EllipticModel {
    store: CoefficientStore,
}

impl EllipticModel {
    /// Read the VSOP87 coefficient files and build a model.
    ///
    /// Arguments
    /// -----------------
    /// * `directory` – Directory holding one `VSOP87.<ext>` file per body.
    /// * `precision` – Target precision in `[0, 0.01]`; `0` keeps every term.
    /// * `reference_date` – Julian date the model will mostly be queried around. It
    ///   does not have to be exact; it only selects the subset of terms needed for
    ///   the requested precision.
    ///
    /// Return
    /// ----------
    /// * The model, or a [`Vsop87Error`]:
    ///   - [`Vsop87Error::InvalidPrecision`] before any I/O,
    ///   - [`Vsop87Error::Io`] for a missing or unreadable file,
    ///   - [`Vsop87Error::Format`] for a malformed record, with its line number.
    ///
    /// See also
    /// ------------
    /// * [`CoefficientStore::build`] – Underlying reader.
    pub fn new(
        directory: impl AsRef<Utf8Path>,
        precision: f64,
        reference_date: JulianDate,
    ) -> Result<Self, Vsop87Error> {
        let store = CoefficientStore::build(directory, precision, reference_date)?;
        Ok(EllipticModel { store })
    }

    /// Wrap an already built store.
    pub fn from_store(store: CoefficientStore) -> Self {
        EllipticModel { store }
    }

    pub fn store(&self) -> &CoefficientStore {
        &self.store
    }

    /// Elliptic elements of `body` at Julian date `date` (TDB).
    ///
    /// The mean longitude is reduced to `[0, 2π)`.
    pub fn pos(&self, date: JulianDate, body: Body) -> Elliptic {
        let t = time_powers(millennia_since_j2000(date));
        let series = self.store.body(body);
        let eval = |element| series.series(element).evaluate(&t);

        Elliptic {
            a: eval(OrbitalElement::A),
            l: principal_angle(eval(OrbitalElement::L)),
            k: eval(OrbitalElement::K),
            h: eval(OrbitalElement::H),
            q: eval(OrbitalElement::Q),
            p: eval(OrbitalElement::P),
        }
    }

    /// Elliptic elements of `body` at `epoch`, taken as a TDB Julian date.
    pub fn pos_at_epoch(&self, epoch: &Epoch, body: Body) -> Elliptic {
        self.pos(epoch.to_jde_tdb_days(), body)
    }
}

#[cfg(test)]
mod elliptic_model_test {
    use super::*;
    use crate::{
        coefficients::{reader::reader_test::block, reader::parse_body_series, TruncationPolicy},
        constants::{DAYS_PER_MILLENNIUM, DPI, T2000},
    };
    use approx::assert_abs_diff_eq;

    fn model_from(body: Body, content: &str) -> EllipticModel {
        let policy = TruncationPolicy::new(0.0, T2000).unwrap();
        let series = parse_body_series(body, content, &policy, Utf8Path::new("VSOP87.test")).unwrap();
        let mut store = CoefficientStore::default();
        store.insert(body, series);
        EllipticModel::from_store(store)
    }

    fn mars_model() -> EllipticModel {
        // block() gives term i the phase 0.5 + 0.1·i and the frequency 10·i
        let content = [
            block("MARS", 1, 0, &[1.5, 0.01]),
            block("MARS", 2, 0, &[-20.0, 0.3]),
            block("MARS", 2, 1, &[3340.0]),
            block("MARS", 3, 2, &[0.5]),
            block("MARS", 6, 5, &[2.0]),
        ]
        .concat();
        model_from(Body::Mars, &content)
    }

    #[test]
    fn test_pos_values() {
        let model = mars_model();
        let date = T2000 + 0.25 * DAYS_PER_MILLENNIUM;
        let t: f64 = 0.25;
        let result = model.pos(date, Body::Mars);

        let a = 1.5 * 0.5f64.cos() + 0.01 * (0.6 + 10. * t).cos();
        assert_abs_diff_eq!(result.a, a, epsilon = 1e-15);

        let l = -20.0 * 0.5f64.cos() + 0.3 * (0.6 + 10. * t).cos() + t * 3340.0 * 0.5f64.cos();
        assert_abs_diff_eq!(result.l, l.rem_euclid(DPI), epsilon = 1e-12);

        assert_abs_diff_eq!(result.k, t * t * 0.5 * 0.5f64.cos(), epsilon = 1e-15);
        assert_eq!(result.h, 0.0);
        assert_eq!(result.q, 0.0);
        assert_abs_diff_eq!(result.p, t.powi(5) * 2.0 * 0.5f64.cos(), epsilon = 1e-15);
    }

    #[test]
    fn test_mean_longitude_range() {
        let model = mars_model();
        for date in [
            T2000,
            T2000 - 1e6,
            T2000 + 1.234e5,
            T2000 - 0.5 * DAYS_PER_MILLENNIUM,
            0.0,
            -1e7,
        ] {
            let l = model.pos(date, Body::Mars).l;
            assert!((0.0..DPI).contains(&l), "l = {l} at {date}");
        }
    }

    #[test]
    fn test_pos_is_deterministic() {
        let model = mars_model();
        let first = model.pos(2448976.5, Body::Mars);
        let again = model.pos(2448976.5, Body::Mars);
        assert_eq!(first.to_array().map(f64::to_bits), again.to_array().map(f64::to_bits));
    }

    #[test]
    fn test_bodies_without_series_are_zero() {
        let model = mars_model();
        for body in [Body::Sun, Body::Earth, Body::Venus] {
            assert_eq!(model.pos(2451000.0, body), Elliptic::default());
        }
    }

    #[test]
    fn test_pos_at_epoch() {
        let model = mars_model();
        let jd = 2455000.25;
        let epoch = Epoch::from_jde_tdb(jd);

        let from_epoch = model.pos_at_epoch(&epoch, Body::Mars);
        let from_jd = model.pos(jd, Body::Mars);
        for (x, y) in from_epoch.to_array().iter().zip(from_jd.to_array()) {
            assert_abs_diff_eq!(*x, y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_model_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EllipticModel>();

        let model = mars_model();
        let expected = model.pos(2451545.0, Body::Mars);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(model.pos(2451545.0, Body::Mars), expected));
            }
        });
    }
}
