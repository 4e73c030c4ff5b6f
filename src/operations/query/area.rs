use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, Point};

/// Signed area of a ring by the shoelace sum, wrapping from the last vertex
/// back to the first.
///
/// Positive for counter-clockwise rings. A repeated closing vertex adds nothing.
#[must_use]
pub fn ring_area(ring: &[Point]) -> f64 {
    let Some(last) = ring.last() else {
        return 0.0;
    };
    let mut a = (last.x + ring[0].x) * (ring[0].y - last.y);
    for w in ring.windows(2) {
        a += (w[0].x + w[1].x) * (w[1].y - w[0].y);
    }
    a / 2.0
}

/// Computes the area covered by an area-typed geometry.
///
/// Ring areas are summed with their sign, so holes wound opposite to their
/// shell subtract themselves. The result is the absolute value.
pub struct Area<'a> {
    geometry: &'a Geometry,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self { geometry }
    }

    /// Executes the query.
    ///
    /// Members of a `GeometryCollection` that are not area-typed contribute
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Unsupported`] for points and lines.
    pub fn execute(&self) -> Result<f64> {
        match self.geometry {
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) | Geometry::GeometryCollection(_) => {
                Ok(area_of(self.geometry))
            }
            other => Err(GeometryError::unsupported(other.kind(), "area").into()),
        }
    }
}

fn area_of(geometry: &Geometry) -> f64 {
    let a: f64 = match geometry {
        Geometry::Polygon(rings) => rings.iter().map(|r| ring_area(r)).sum(),
        Geometry::MultiPolygon(polygons) => polygons
            .iter()
            .map(|p| p.iter().map(|r| ring_area(r)).sum::<f64>().abs())
            .sum(),
        Geometry::GeometryCollection(members) => members.iter().map(area_of).sum(),
        _ => 0.0,
    };
    a.abs()
}
