//! # Output records
//!
//! [`Elliptic`] holds the six VSOP87 elliptic elements of a body at one date.
//! [`Rectangular`] and [`Spherical`] are the heliocentric coordinate shapes other
//! VSOP87 versions produce; they are plain data and carry no conversion from
//! elliptic elements.
//!
//! ## Elliptic elements
//!
//! | field | meaning | unit |
//! |---|---|---|
//! | `a` | semi-major axis | AU |
//! | `l` | mean longitude, in `[0, 2π)` | rad |
//! | `k` | `e·cos(ϖ)` | – |
//! | `h` | `e·sin(ϖ)` | – |
//! | `q` | `sin(i/2)·cos(Ω)` | – |
//! | `p` | `sin(i/2)·sin(Ω)` | – |
//!
//! with `e` the eccentricity, `ϖ` the longitude of perihelion, `i` the inclination
//! and `Ω` the longitude of the ascending node, all referred to the dynamical
//! ecliptic and equinox of J2000.0.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{principal_angle, AstronomicalUnit, Radian};

/// VSOP87 elliptic elements at one date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Elliptic {
    pub a: AstronomicalUnit,
    pub l: Radian,
    pub k: f64,
    pub h: f64,
    pub q: f64,
    pub p: f64,
}

impl Elliptic {
    /// Eccentricity `e = √(k² + h²)`.
    pub fn eccentricity(&self) -> f64 {
        self.k.hypot(self.h)
    }

    /// Longitude of perihelion `ϖ`, in `[0, 2π)`. Zero for a circular orbit.
    pub fn perihelion_longitude(&self) -> Radian {
        principal_angle(self.h.atan2(self.k))
    }

    /// Inclination `i = 2·asin(√(q² + p²))`.
    pub fn inclination(&self) -> Radian {
        2. * self.q.hypot(self.p).asin()
    }

    /// Longitude of the ascending node `Ω`, in `[0, 2π)`. Zero for an orbit in the ecliptic.
    pub fn ascending_node_longitude(&self) -> Radian {
        principal_angle(self.p.atan2(self.q))
    }

    /// The six elements in `[a, l, k, h, q, p]` order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.l, self.k, self.h, self.q, self.p]
    }
}

/// Heliocentric rectangular coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangular {
    /// position x (AU)
    pub px: f64,
    /// position y (AU)
    pub py: f64,
    /// position z (AU)
    pub pz: f64,
    /// velocity x (AU/day)
    pub vx: f64,
    /// velocity y (AU/day)
    pub vy: f64,
    /// velocity z (AU/day)
    pub vz: f64,
}

impl Rectangular {
    pub fn from_vectors(position: &Vector3<f64>, velocity: &Vector3<f64>) -> Self {
        Rectangular {
            px: position.x,
            py: position.y,
            pz: position.z,
            vx: velocity.x,
            vy: velocity.y,
            vz: velocity.z,
        }
    }

    pub fn position(&self) -> Vector3<f64> {
        Vector3::new(self.px, self.py, self.pz)
    }

    pub fn velocity(&self) -> Vector3<f64> {
        Vector3::new(self.vx, self.vy, self.vz)
    }
}

/// Heliocentric spherical coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    /// longitude (rad)
    pub lon: Radian,
    /// latitude (rad)
    pub lat: Radian,
    /// radius (AU)
    pub r: AstronomicalUnit,
    /// longitude velocity (rad/day)
    pub vlon: f64,
    /// latitude velocity (rad/day)
    pub vlat: f64,
    /// radius velocity (AU/day)
    pub vr: f64,
}
