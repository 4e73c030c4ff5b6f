use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, Point};

/// Sum of consecutive-vertex distances along a polyline.
#[must_use]
pub fn line_length(line: &[Point]) -> f64 {
    line.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Computes the length of a line-typed geometry.
pub struct Length<'a> {
    geometry: &'a Geometry,
}

impl<'a> Length<'a> {
    /// Creates a new `Length` query.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self { geometry }
    }

    /// Executes the query.
    ///
    /// Members of a `GeometryCollection` that are not line-typed contribute
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Unsupported`] for points and areas.
    pub fn execute(&self) -> Result<f64> {
        match self.geometry {
            Geometry::LineString(_)
            | Geometry::MultiLineString(_)
            | Geometry::GeometryCollection(_) => Ok(length_of(self.geometry)),
            other => Err(GeometryError::unsupported(other.kind(), "length").into()),
        }
    }
}

fn length_of(geometry: &Geometry) -> f64 {
    match geometry {
        Geometry::LineString(line) => line_length(line),
        Geometry::MultiLineString(lines) => lines.iter().map(|l| line_length(l)).sum(),
        Geometry::GeometryCollection(members) => members.iter().map(length_of).sum(),
        _ => 0.0,
    }
}
