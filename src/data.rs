use crate::error::{Error, Result};
use csv::ReaderBuilder;
use log::{debug, warn};
use ndarray::Array2;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Read a point from the first two whitespace separated tokens of `text`.
    /// Anything after the second token is ignored.
    pub fn parse(text: &str) -> std::result::Result<Self, PointParseError> {
        Self::from_tokens(text.split_whitespace())
    }

    fn from_tokens<'a, I>(mut tokens: I) -> std::result::Result<Self, PointParseError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut coords = [0.0f64; 2];
        for (found, slot) in coords.iter_mut().enumerate() {
            let token = tokens.next().ok_or(PointParseError::TooFewValues { found })?;
            *slot = token
                .parse::<f64>()
                .map_err(|_| PointParseError::NotANumber(token.to_string()))?;
        }
        let [x, y] = coords;
        if !x.is_finite() || !y.is_finite() {
            return Err(PointParseError::NonFinite { x, y });
        }
        Ok(Self { x, y })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Why a line of input did not yield a point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PointParseError {
    #[error("expected two values, found {found}")]
    TooFewValues { found: usize },
    #[error("{0:?} is not a floating-point number")]
    NotANumber(String),
    #[error("invalid point ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// The validated 2D points of one input, in input order.
#[derive(Debug, Clone)]
pub struct DataSet {
    /// One row per point, columns are x and y.
    pub data: Array2<f64>,
}

impl DataSet {
    /// Read whitespace separated `x y` lines from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        debug!("reading points from {:?}", path.as_ref());
        Self::from_reader(file)
    }

    /// Read whitespace separated `x y` lines from any reader.
    ///
    /// Lines that do not hold two finite numbers are reported with `warn!` and
    /// skipped. Fails with [`Error::NoData`] if no line was usable.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b' ')
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut flat: Vec<f64> = Vec::new();
        for result in rdr.records() {
            let record = match result {
                Ok(record) => record,
                Err(e) if e.is_io_error() => return Err(e.into()),
                Err(e) => {
                    warn!("Skipping unreadable line: {}", e);
                    continue;
                }
            };
            let line = record.position().map_or(0, |p| p.line());
            let tokens = record.iter().flat_map(str::split_whitespace);
            match Point::from_tokens(tokens) {
                Ok(p) => {
                    flat.push(p.x);
                    flat.push(p.y);
                }
                Err(e) => {
                    let text: Vec<&str> = record.iter().collect();
                    warn!("Skipping line {} '{}': {}", line, text.join(" "), e);
                }
            }
        }
        Self::from_flat(flat)
    }

    /// Build a data set from points already in memory.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        Self::from_flat(points.iter().flat_map(|p| [p.x, p.y]).collect())
    }

    fn from_flat(flat: Vec<f64>) -> Result<Self> {
        if flat.is_empty() {
            return Err(Error::NoData);
        }
        let nrows = flat.len() / 2;
        let data = Array2::from_shape_vec((nrows, 2), flat)
            .map_err(|_| Error::InvalidParameter {
                name: "data",
                message: "point buffer is not a whole number of x/y pairs",
            })?;
        Ok(Self { data })
    }

    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// The point in row `i`.
    pub fn point(&self, i: usize) -> Point {
        Point::new(self.data[[i, 0]], self.data[[i, 1]])
    }

    /// All points in input order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.data.outer_iter().map(|row| Point::new(row[0], row[1]))
    }

    pub fn to_vec(&self) -> Vec<Point> {
        self.points().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_skips_bad_lines() {
        let input = "1.0 2.0\nbad line\n3.0 4.0\nNaN 5.0\n";
        let ds = DataSet::from_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.to_vec(), vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_mixed_whitespace() {
        let input = "1.5\t2.5\n  -3   4e1  \n7 8 9\n";
        let ds = DataSet::from_reader(input.as_bytes()).unwrap();
        assert_eq!(
            ds.to_vec(),
            vec![Point::new(1.5, 2.5), Point::new(-3.0, 40.0), Point::new(7.0, 8.0)]
        );
    }

    #[test]
    fn test_keeps_duplicates_in_order() {
        let input = "2 2\n1 1\n2 2\n";
        let ds = DataSet::from_reader(input.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.point(0), ds.point(2));
        assert_eq!(ds.point(1), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_no_data() {
        let input = "x y\nonly_one\ninf 1\n";
        assert!(matches!(DataSet::from_reader(input.as_bytes()), Err(Error::NoData)));
        assert!(matches!(DataSet::from_points(&[]), Err(Error::NoData)));
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(Point::parse("1.0 2.0"), Ok(Point::new(1.0, 2.0)));
        assert_eq!(
            Point::parse("1.0"),
            Err(PointParseError::TooFewValues { found: 1 })
        );
        assert!(matches!(Point::parse("1.0 abc"), Err(PointParseError::NotANumber(_))));
        assert!(matches!(Point::parse("nan 1"), Err(PointParseError::NonFinite { .. })));
    }
}
