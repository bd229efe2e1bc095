use std::str::FromStr;

use thiserror::Error;

use super::Point;

/// Errors from polygon construction and parsing
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// A closed loop needs at least three vertices
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    /// Vertex text that is not of the form "x,y"
    #[error("invalid point '{0}': expected 'x,y'")]
    InvalidPoint(String),
}

/// A simple polygon: an ordered loop of vertices
///
/// The loop is closed implicitly - the last vertex connects back to the
/// first. Construction enforces the three-vertex minimum, so a `Polygon`
/// in hand is always a closable loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Build a polygon from its vertices
    ///
    /// Fails with [`GeometryError::TooFewPoints`] when fewer than three
    /// points are given.
    pub fn new(points: Vec<Point>) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    /// Build a polygon from raw coordinate pairs
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, GeometryError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices (equal to the number of edges)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Iterate the boundary edges in vertex order, including the
    /// wrap-around edge from the last vertex back to the first
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

impl FromStr for Polygon {
    type Err = GeometryError;

    /// Parse space-separated "x,y" vertices, e.g. `"0,0 4,0 4,4 0,4"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut points = Vec::new();

        for token in s.split_whitespace() {
            let (x, y) = token
                .split_once(',')
                .ok_or_else(|| GeometryError::InvalidPoint(token.to_string()))?;
            let x: f64 = x
                .trim()
                .parse()
                .map_err(|_| GeometryError::InvalidPoint(token.to_string()))?;
            let y: f64 = y
                .trim()
                .parse()
                .map_err(|_| GeometryError::InvalidPoint(token.to_string()))?;
            points.push(Point::new(x, y));
        }

        Self::new(points)
    }
}
