//! # Solar system bodies covered by VSOP87
//!
//! [`Body`] identifies the bodies of the theory. Only eight of them carry elliptic
//! element series in the main version of VSOP87 (Mercury, Venus, the Earth-Moon
//! barycenter, Mars, Jupiter, Saturn, Uranus and Neptune); the Sun and the Earth
//! proper are accepted as identifiers but have no series.
//!
//! Per-body static data lives in compile-time tables indexed by the enum
//! discriminant:
//!
//! | body | file extension | name in file | nominal distance (AU) |
//! |---|---|---|---|
//! | Mercury | `mer` | `MERCURY` | 0.3871 |
//! | Venus | `ven` | `VENUS  ` | 0.7233 |
//! | Earth | `ear` | `EARTH  ` | 1 |
//! | Mars | `mar` | `MARS   ` | 1.5237 |
//! | Jupiter | `jup` | `JUPITER` | 5.2026 |
//! | Saturn | `sat` | `SATURN ` | 9.5547 |
//! | Uranus | `ura` | `URANUS ` | 19.2181 |
//! | Neptune | `nep` | `NEPTUNE` | 30.1096 |
//! | Earth-Moon barycenter | `emb` | `EMB    ` | 1 |
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{constants::AstronomicalUnit, vsop87_errors::Vsop87Error};

/// Identifier of a VSOP87 body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    /// Earth-Moon barycenter
    EarthMoon,
}

/// File extensions, `VSOP87.<ext>`
const EXTENSIONS: [&str; Body::COUNT] = [
    "", "mer", "ven", "ear", "mar", "jup", "sat", "ura", "nep", "emb",
];

/// Body names as written in columns 22..29 of a header record
const FILE_NAMES: [&str; Body::COUNT] = [
    "", "MERCURY", "VENUS  ", "EARTH  ", "MARS   ", "JUPITER", "SATURN ", "URANUS ", "NEPTUNE",
    "EMB    ",
];

/// Nominal semi-major axes used to scale the truncation threshold of the `a` series
const NOMINAL_DISTANCES: [AstronomicalUnit; Body::COUNT] = [
    0., 0.3871, 0.7233, 1., 1.5237, 5.2026, 9.5547, 19.2181, 30.1096, 1.,
];

/// Body names used in the published check file
const CHECK_NAMES: [&str; Body::COUNT] = [
    "SUN",
    "MERCURY",
    "VENUS",
    "EARTH",
    "MARS",
    "JUPITER",
    "SATURN",
    "URANUS",
    "NEPTUNE",
    "EARTH-MOON",
];

impl Body {
    /// Number of identifiers, including the bodies without series
    pub const COUNT: usize = 10;

    /// Every identifier, in discriminant order
    pub const ALL: [Body; Body::COUNT] = [
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::EarthMoon,
    ];

    /// Bodies whose coefficient file is read when a model is built, in loading order
    pub const SERIES_BODIES: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::EarthMoon,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Three-letter extension of the body's coefficient file (empty for the Sun).
    pub fn file_extension(self) -> &'static str {
        EXTENSIONS[self.index()]
    }

    /// Name of the coefficient file, e.g. `VSOP87.mer`.
    pub fn file_name(self) -> String {
        format!("VSOP87.{}", self.file_extension())
    }

    /// Seven-character, blank-padded name expected in header records.
    pub fn name_in_file(self) -> &'static str {
        FILE_NAMES[self.index()]
    }

    /// Nominal distance scale of the body, in AU.
    pub fn nominal_distance(self) -> AstronomicalUnit {
        NOMINAL_DISTANCES[self.index()]
    }

    /// Whether the main version of VSOP87 provides elliptic elements for this body.
    pub fn has_series(self) -> bool {
        Body::SERIES_BODIES.contains(&self)
    }

    /// Upper-case name used by the published check file (`EARTH-MOON` for the barycenter).
    pub fn check_name(self) -> &'static str {
        CHECK_NAMES[self.index()]
    }

    /// Resolve a check-file body name.
    pub fn from_check_name(name: &str) -> Option<Body> {
        CHECK_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| Body::ALL[i])
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::EarthMoon => "Earth-Moon barycenter",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Body {
    type Err = Vsop87Error;

    /// Parse a body from its name, check-file name or file extension, ignoring case.
    ///
    /// Accepted forms include `"mars"`, `"MARS"`, `"mar"`, `"EARTH-MOON"` and `"emb"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        if let Some(body) = Body::from_check_name(&upper) {
            return Ok(body);
        }
        let lower = upper.to_ascii_lowercase();
        Body::ALL
            .iter()
            .copied()
            .find(|b| *b != Body::Sun && b.file_extension() == lower)
            .ok_or_else(|| Vsop87Error::UnknownBody(s.to_string()))
    }
}
