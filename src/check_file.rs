//! # VSOP87 check file
//!
//! The VSOP87 distribution ships a `vsop87.chk` file with reference values of the
//! elements for every body at a few dates. Records of the main version look like:
//!
//! ```text
//!  VSOP87   MERCURY     JD2451545.0  01/01/2000 12h TDB
//!  a= .3870982122 ua     k= .0445799696 rd     q= .0406156529 rd
//!  l=4.4026088424 rd     h= .2007208267 rd     p= .0456355169 rd
//!
//! ```
//!
//! Values may omit the leading zero. Reading stops at the first header that does
//! not belong to the main version (`VSOP87A`, `VSOP87B`, …).
use std::{collections::HashMap, sync::LazyLock};

use camino::Utf8Path;
use regex::Regex;

use crate::{body::Body, constants::JulianDate, elliptic::Elliptic, vsop87_errors::Vsop87Error};

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*VSOP87\s+(?P<body>[A-Z][A-Z-]*)\s+JD\s*(?P<jd>\d+(?:\.\d*)?)")
        .expect("valid check header regex")
});

static VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<name>[alkhqp])\s*=\s*(?P<value>[-+]?(?:\d+(?:\.\d*)?|\.\d+))")
        .expect("valid check value regex")
});

/// Reference elements of one body at one date.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRecord {
    pub body: Body,
    pub jd: JulianDate,
    pub expected: Elliptic,
    /// 1-based line number of the record header
    pub line: usize,
}

impl CheckRecord {
    /// Largest absolute difference between `actual` and the reference elements.
    pub fn max_deviation(&self, actual: &Elliptic) -> f64 {
        self.expected
            .to_array()
            .iter()
            .zip(actual.to_array())
            .map(|(e, a)| (e - a).abs())
            .fold(0.0, f64::max)
    }

    /// Whether every element of `actual` lies within `tolerance` of the reference.
    pub fn matches(&self, actual: &Elliptic, tolerance: f64) -> bool {
        self.max_deviation(actual) <= tolerance
    }
}

/// Read the main-version records of a check file.
pub fn read_check_file(path: impl AsRef<Utf8Path>) -> Result<Vec<CheckRecord>, Vsop87Error> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| Vsop87Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_check_records(&content, path)
}

/// Parse the main-version records of a check file already in memory.
///
/// `path` is only used in error reports.
pub fn parse_check_records(
    content: &str,
    path: &Utf8Path,
) -> Result<Vec<CheckRecord>, Vsop87Error> {
    let malformed = |index: usize, reason: String| Vsop87Error::CheckFile {
        path: path.to_path_buf(),
        line: index + 1,
        reason,
    };

    let lines: Vec<&str> = content.lines().collect();
    let mut records = Vec::new();
    let mut n = 0;

    while n < lines.len() {
        if lines[n].trim().is_empty() {
            n += 1;
            continue;
        }

        let Some(header) = HEADER.captures(lines[n]) else {
            break;
        };

        let name = &header["body"];
        let body = Body::from_check_name(name)
            .ok_or_else(|| malformed(n, format!("unknown body {name:?}")))?;
        let jd: JulianDate = header["jd"]
            .parse()
            .map_err(|_| malformed(n, format!("invalid date {:?}", &header["jd"])))?;

        let mut values = HashMap::new();
        for offset in 1..=2 {
            let line = lines
                .get(n + offset)
                .ok_or_else(|| malformed(n + offset, "missing element line".into()))?;
            for cap in VALUE.captures_iter(line) {
                let value: f64 = cap["value"].parse().map_err(|_| {
                    malformed(n + offset, format!("invalid value {:?}", &cap["value"]))
                })?;
                values.insert(cap["name"].to_string(), value);
            }
        }

        let get = |name: &str| {
            values
                .get(name)
                .copied()
                .ok_or_else(|| malformed(n, format!("element {name} missing")))
        };

        records.push(CheckRecord {
            body,
            jd,
            expected: Elliptic {
                a: get("a")?,
                l: get("l")?,
                k: get("k")?,
                h: get("h")?,
                q: get("q")?,
                p: get("p")?,
            },
            line: n + 1,
        });
        n += 3;
    }

    Ok(records)
}

#[cfg(test)]
mod check_file_test {
    use super::*;

    const SAMPLE: &str = "\
 VSOP87   MERCURY     JD2451545.0  01/01/2000 12h TDB
 a= .3870982122 ua     k= .0445799696 rd     q= .0406156529 rd
 l=4.4026088424 rd     h= .2007208267 rd     p= .0456355169 rd

 VSOP87   EARTH-MOON  JD2415020.0  31/12/1899 12h TDB
 a=1.0000006617 ua     k=-.0037510457 rd     q=-.0000015217 rd
 l=1.7519321166 rd     h= .0166284785 rd     p= .0000000927 rd

 VSOP87A  MERCURY     JD2451545.0  01/01/2000 12h TDB
 x= -.1300934115 ua    y= -.4472876716 ua    z= -.0245983802 ua
";

    #[test]
    fn test_parse_sample() {
        let records = parse_check_records(SAMPLE, Utf8Path::new("vsop87.chk")).unwrap();
        assert_eq!(records.len(), 2);

        assert_eq!(records[0].body, Body::Mercury);
        assert_eq!(records[0].jd, 2451545.0);
        assert_eq!(records[0].line, 1);
        assert_eq!(
            records[0].expected,
            Elliptic {
                a: 0.3870982122,
                l: 4.4026088424,
                k: 0.0445799696,
                h: 0.2007208267,
                q: 0.0406156529,
                p: 0.0456355169,
            }
        );

        assert_eq!(records[1].body, Body::EarthMoon);
        assert_eq!(records[1].jd, 2415020.0);
        assert_eq!(records[1].expected.k, -0.0037510457);
        assert_eq!(records[1].expected.q, -0.0000015217);
        assert_eq!(records[1].line, 5);
    }

    #[test]
    fn test_matches() {
        let records = parse_check_records(SAMPLE, Utf8Path::new("vsop87.chk")).unwrap();
        let mut actual = records[0].expected;
        assert!(records[0].matches(&actual, 0.0));

        actual.h += 5e-11;
        assert!(records[0].matches(&actual, 1e-10));
        actual.h += 1e-10;
        assert!(!records[0].matches(&actual, 1e-10));
    }

    #[test]
    fn test_missing_element() {
        let content = "\
 VSOP87   MARS        JD2451545.0
 a=1.5237 ua     k= .0850 rd
 l=6.2034 rd     h=-.0379 rd     p= .0124 rd
";
        let err = parse_check_records(content, Utf8Path::new("vsop87.chk")).unwrap_err();
        assert_eq!(
            err,
            Vsop87Error::CheckFile {
                path: "vsop87.chk".into(),
                line: 1,
                reason: "element q missing".into()
            }
        );
    }

    #[test]
    fn test_unknown_body() {
        let content = " VSOP87   PLUTO       JD2451545.0\n a=39.5 ua\n l=1.0 rd\n";
        let err = parse_check_records(content, Utf8Path::new("vsop87.chk")).unwrap_err();
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_truncated_record() {
        let content = " VSOP87   MARS        JD2451545.0\n a=1.5237 ua k= .0850 rd q= .0104 rd\n";
        let err = parse_check_records(content, Utf8Path::new("vsop87.chk")).unwrap_err();
        assert_eq!(err.line(), Some(3));
    }
}
