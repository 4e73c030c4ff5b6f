use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, Point, Ring};

use super::area::ring_area;

/// Computes the area centroid of a polygon.
///
/// Each ring's centroid is weighted by its signed area, so holes wound
/// opposite to their shell pull the centroid away from themselves.
///
/// A polygon whose total signed area is (nearly) zero has no centroid; the
/// result is then non-finite rather than an error.
pub struct Centroid<'a> {
    geometry: &'a Geometry,
}

impl<'a> Centroid<'a> {
    /// Creates a new `Centroid` query.
    #[must_use]
    pub fn new(geometry: &'a Geometry) -> Self {
        Self { geometry }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Unsupported`] for anything but a `Polygon`.
    pub fn execute(&self) -> Result<Point> {
        match self.geometry {
            Geometry::Polygon(rings) => Ok(polygon_centroid(rings)),
            other => Err(GeometryError::unsupported(other.kind(), "centroid").into()),
        }
    }
}

fn polygon_centroid(rings: &[Ring]) -> Point {
    let mut total = 0.0;
    let mut x_moment = 0.0;
    let mut y_moment = 0.0;

    for ring in rings {
        let n = ring.len();
        if n == 0 {
            continue;
        }
        let a = ring_area(ring);
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..n {
            let p = &ring[i];
            let q = &ring[(i + 1) % n];
            let cross = p.x * q.y - q.x * p.y;
            cx += (p.x + q.x) * cross;
            cy += (p.y + q.y) * cross;
        }
        cx /= 6.0 * a;
        cy /= 6.0 * a;
        total += a;
        x_moment += cx * a;
        y_moment += cy * a;
    }

    Point::new(x_moment / total, y_moment / total)
}
