//! The plain-text point table input format.
//!
//! ```text
//! 3          <- control point count N
//! 0 0        <- N lines of integer x y pairs
//! 2 0
//! 2 2
//! 5          <- sample count M
//! ```
//!
//! Each line must contain exactly the expected number of whitespace
//! separated tokens. Content after the sample count line is ignored.
//! All failures are reported as [`BezierError::Parse`] with the offending
//! 1-based line number, never as a panic.

use crate::data::{ControlPoint, ControlPolygon, Point};
use crate::error::{BezierError, BezierResult};

/// A parsed sampling request: the control polygon plus the number of
/// points to sample along the curve it defines.
#[derive(Debug, Clone, PartialEq)]
pub struct PointTable {
    pub polygon: ControlPolygon,
    pub sample_count: usize,
}

impl PointTable {
    /// Parse the point table format from a string
    pub fn parse(input: &str) -> BezierResult<Self> {
        let lines: Vec<&str> = input.lines().collect();
        let mut cursor = 0;

        let point_count = parse_count(&lines, &mut cursor, "control point count")?;

        // The header count is untrusted; cap the reservation at what the
        // input could possibly hold so an absurd count fails in the read
        // loop below instead of overflowing the allocation.
        let mut points = Vec::with_capacity(point_count.min(lines.len()));
        for _ in 0..point_count {
            let (line_no, line) = take_line(&lines, &mut cursor, "control point line")?;
            points.push(parse_control_point(line, line_no)?);
        }

        let sample_count = parse_count(&lines, &mut cursor, "sample count")?;

        Ok(Self {
            polygon: ControlPolygon::new(points)?,
            sample_count,
        })
    }
}

/// Re-parse the output point table format (two decimals, tab separated)
/// back into points. Lets a saved result be loaded and compared.
pub fn parse_sampled_points(data: &str) -> BezierResult<Vec<Point>> {
    data.lines()
        .enumerate()
        .map(|(index, line)| {
            let line_no = index + 1;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 2 {
                return Err(BezierError::Parse {
                    line: line_no,
                    reason: format!("expected 2 values, found {}", tokens.len()),
                });
            }
            Ok(Point::new(
                parse_token::<f64>(tokens[0], line_no)?,
                parse_token::<f64>(tokens[1], line_no)?,
            ))
        })
        .collect()
}

/// Consume the next line, or fail naming what is missing
fn take_line<'a>(
    lines: &[&'a str],
    cursor: &mut usize,
    expected: &str,
) -> BezierResult<(usize, &'a str)> {
    let line = lines.get(*cursor).copied().ok_or_else(|| BezierError::Parse {
        line: *cursor + 1,
        reason: format!("missing {expected}"),
    })?;
    *cursor += 1;
    Ok((*cursor, line))
}

/// Parse a line holding exactly one non-negative integer
fn parse_count(lines: &[&str], cursor: &mut usize, expected: &str) -> BezierResult<usize> {
    let (line_no, line) = take_line(lines, cursor, expected)?;
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 1 {
        return Err(BezierError::Parse {
            line: line_no,
            reason: format!("expected 1 value, found {}", tokens.len()),
        });
    }
    parse_token::<usize>(tokens[0], line_no)
}

/// Parse a line holding exactly two integer coordinates
fn parse_control_point(line: &str, line_no: usize) -> BezierResult<ControlPoint> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(BezierError::Parse {
            line: line_no,
            reason: format!("expected 2 values, found {}", tokens.len()),
        });
    }
    Ok(ControlPoint::new(
        parse_token::<i64>(tokens[0], line_no)?,
        parse_token::<i64>(tokens[1], line_no)?,
    ))
}

fn parse_token<T: std::str::FromStr>(token: &str, line_no: usize) -> BezierResult<T> {
    token.parse().map_err(|_| BezierError::Parse {
        line: line_no,
        reason: format!("invalid number \"{token}\""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_table() {
        let table = PointTable::parse("3\n0 0\n2 0\n2 2\n5\n").unwrap();

        assert_eq!(table.sample_count, 5);
        assert_eq!(
            table.polygon.points(),
            &[
                ControlPoint::new(0, 0),
                ControlPoint::new(2, 0),
                ControlPoint::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_negative_coordinates_allowed() {
        let table = PointTable::parse("2\n-3 -7\n4 1\n2\n").unwrap();
        assert_eq!(table.polygon.points()[0], ControlPoint::new(-3, -7));
    }

    #[test]
    fn test_content_after_sample_count_ignored() {
        let table = PointTable::parse("1\n5 5\n4\ntrailing garbage\n").unwrap();
        assert_eq!(table.sample_count, 4);
    }

    #[test]
    fn test_wrong_token_count_reports_line() {
        let err = PointTable::parse("2\n0 0 0\n1 1\n3\n").unwrap_err();
        assert!(matches!(err, BezierError::Parse { line: 2, .. }));

        let err = PointTable::parse("2 extra\n0 0\n1 1\n3\n").unwrap_err();
        assert!(matches!(err, BezierError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_truncated_input() {
        // Fewer control point lines than the header promises.
        let err = PointTable::parse("3\n0 0\n1 1\n").unwrap_err();
        assert!(matches!(err, BezierError::Parse { line: 4, .. }));

        // Missing sample count.
        let err = PointTable::parse("1\n0 0\n").unwrap_err();
        assert!(matches!(err, BezierError::Parse { line: 3, .. }));

        // Empty input.
        assert!(PointTable::parse("").is_err());
    }

    #[test]
    fn test_absurd_point_count_is_a_parse_error() {
        // A header count near usize::MAX must fail like any other
        // truncated input, not abort while reserving the point vector.
        let err = PointTable::parse("18446744073709551615\n").unwrap_err();
        assert!(matches!(err, BezierError::Parse { line: 2, .. }));

        let err = PointTable::parse("1000000\n0 0\n").unwrap_err();
        assert!(matches!(err, BezierError::Parse { .. }));
    }

    #[test]
    fn test_non_numeric_token() {
        let err = PointTable::parse("1\n0 zero\n2\n").unwrap_err();
        match err {
            BezierError::Parse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("zero"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_control_points_rejected() {
        let err = PointTable::parse("0\n2\n").unwrap_err();
        assert!(matches!(err, BezierError::NoControlPoints));
    }

    #[test]
    fn test_parse_sampled_points() {
        let points = parse_sampled_points("0.00\t0.00\n1.50\t0.50\n2.00\t2.00\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.5, 0.5),
                Point::new(2.0, 2.0),
            ]
        );

        assert!(parse_sampled_points("1.00\n").is_err());
    }
}
