//! Instance files: a distance threshold followed by one point per line.
//!
//! ```text
//! 2.0
//! 0.0, 0.0
//! 1.0, 0.0
//! ```
//!
//! Blank lines after the threshold are ignored.

use std::{io::BufRead, str::FromStr};

use tracing::debug;

use crate::{
    Result, builder::ConnectivityBuilder, connectivity::Connectivity, error::InstanceError,
    point::Point,
};

type InstanceResult<T> = core::result::Result<T, InstanceError>;

/// A parsed problem instance.
///
/// # Examples
/// ```
/// use tonari_core::Instance;
///
/// let instance: Instance = "0.5\n0,0\n10,10\n".parse()?;
/// assert_eq!(instance.threshold(), 0.5);
/// assert_eq!(instance.len(), 2);
///
/// let sizes = instance.connectivity()?.run(&instance)?;
/// assert_eq!(sizes.as_slice(), &[1, 1]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    threshold: f64,
    points: Vec<Point>,
}

impl Instance {
    /// Creates an instance from already-parsed values.
    #[must_use]
    pub fn new(threshold: f64, points: Vec<Point>) -> Self {
        Self { threshold, points }
    }

    /// Parses an instance from a line-oriented reader.
    ///
    /// # Errors
    /// Returns [`InstanceError::MissingThreshold`] for empty input,
    /// [`InstanceError::InvalidThreshold`] when line 1 is not a number, and a
    /// line-tagged variant for the first malformed point line or read
    /// failure.
    pub fn try_from_reader<R: BufRead>(reader: R) -> InstanceResult<Self> {
        let mut lines = reader.lines().enumerate().map(|(index, read)| {
            let line = index + 1;
            read.map(|text| (line, text))
                .map_err(|source| InstanceError::Read { line, source })
        });

        let (_, header) = lines.next().ok_or(InstanceError::MissingThreshold)??;
        let threshold = parse_threshold(&header)?;

        let mut points = Vec::new();
        for read in lines {
            let (line, text) = read?;
            if text.trim().is_empty() {
                continue;
            }
            points.push(parse_point(line, &text)?);
        }

        debug!(threshold, points = points.len(), "instance parsed");
        Ok(Self { threshold, points })
    }

    /// Distance threshold declared on line 1.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Points in file order; a point's index is its identity.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the instance holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Builds a [`Connectivity`] configured with this instance's threshold.
    ///
    /// # Errors
    /// Returns [`crate::TonariError::InvalidThreshold`] when the declared
    /// threshold is not finite and positive.
    pub fn connectivity(&self) -> Result<Connectivity> {
        ConnectivityBuilder::new()
            .with_threshold(self.threshold)
            .build()
    }
}

impl FromStr for Instance {
    type Err = InstanceError;

    fn from_str(text: &str) -> InstanceResult<Self> {
        Self::try_from_reader(text.as_bytes())
    }
}

fn parse_threshold(text: &str) -> InstanceResult<f64> {
    let raw = text.trim();
    raw.parse::<f64>()
        .map_err(|source| InstanceError::InvalidThreshold {
            raw: raw.to_owned(),
            source,
        })
}

fn parse_point(line: usize, text: &str) -> InstanceResult<Point> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let [x, y] = fields.as_slice() else {
        return Err(InstanceError::WrongFieldCount {
            line,
            found: fields.len(),
        });
    };
    Ok(Point::new(
        parse_coordinate(line, x)?,
        parse_coordinate(line, y)?,
    ))
}

fn parse_coordinate(line: usize, raw: &str) -> InstanceResult<f64> {
    let value = raw
        .parse::<f64>()
        .map_err(|source| InstanceError::InvalidCoordinate {
            line,
            raw: raw.to_owned(),
            source,
        })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InstanceError::NonFiniteCoordinate {
            line,
            raw: raw.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(text: &str) -> InstanceResult<Instance> {
        text.parse()
    }

    #[rstest]
    fn parses_threshold_and_points() {
        let instance = parse("2.0\n0,0\n1.5, -2\n  5e1 ,6\n").expect("instance must parse");
        assert_eq!(instance.threshold(), 2.0);
        assert_eq!(instance.points(), &[
            Point::new(0.0, 0.0),
            Point::new(1.5, -2.0),
            Point::new(50.0, 6.0),
        ]);
    }

    #[rstest]
    #[case::trailing("1.0\n0,0\n\n")]
    #[case::interleaved("1.0\n\n0,0\n   \n")]
    #[case::crlf("1.0\r\n0,0\r\n")]
    fn skips_blank_lines(#[case] text: &str) {
        let instance = parse(text).expect("instance must parse");
        assert_eq!(instance.points(), &[Point::new(0.0, 0.0)]);
    }

    #[rstest]
    fn threshold_only_yields_no_points() {
        let instance = parse("3.5\n").expect("instance must parse");
        assert!(instance.is_empty());
    }

    #[rstest]
    fn empty_input_is_missing_threshold() {
        let err = parse("").expect_err("empty input must fail");
        assert!(matches!(err, InstanceError::MissingThreshold));
    }

    #[rstest]
    #[case::word("far\n0,0\n")]
    #[case::blank_first_line("\n0,0\n")]
    fn rejects_malformed_threshold(#[case] text: &str) {
        let err = parse(text).expect_err("threshold must be numeric");
        assert!(matches!(err, InstanceError::InvalidThreshold { .. }));
    }

    #[rstest]
    #[case::one_field("1\n0,0\n4\n", 3, 1)]
    #[case::three_fields("1\n1,2,3\n", 2, 3)]
    fn rejects_wrong_field_count(
        #[case] text: &str,
        #[case] expected_line: usize,
        #[case] expected_found: usize,
    ) {
        match parse(text) {
            Err(InstanceError::WrongFieldCount { line, found }) => {
                assert_eq!(line, expected_line);
                assert_eq!(found, expected_found);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    fn rejects_non_numeric_coordinate() {
        match parse("1\n0,0\n2,y\n") {
            Err(InstanceError::InvalidCoordinate { line, raw, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(raw, "y");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[rstest]
    #[case("NaN")]
    #[case("inf")]
    fn rejects_non_finite_coordinate(#[case] raw: &str) {
        let text = format!("1\n{raw},0\n");
        let err = parse(&text).expect_err("non-finite coordinates must fail");
        assert!(matches!(
            err,
            InstanceError::NonFiniteCoordinate { line: 2, .. }
        ));
    }

    #[rstest]
    #[case::zero("0\n0,0\n")]
    #[case::negative("-1\n0,0\n")]
    fn connectivity_rejects_unusable_threshold(#[case] text: &str) {
        let instance = parse(text).expect("numeric threshold parses");
        assert!(instance.connectivity().is_err());
    }
}
