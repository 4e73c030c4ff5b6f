use crate::math::Point2;

use super::{Geometry, Point};

/// An axis-aligned bounding box in the plane.
///
/// Built as a fold: start from [`Bounds::empty`] and widen per point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// The identity box: extending it by a point yields that point's box.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Returns true if no point has been folded in.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max.x < self.min.x || self.max.y < self.min.y
    }

    /// Widens the box to include `p`.
    #[must_use]
    pub fn extend(mut self, p: &Point2) -> Self {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self
    }

    /// Widens the box to include every point of `points`.
    #[must_use]
    pub fn extend_points(self, points: &[Point]) -> Self {
        points.iter().fold(self, |b, p| b.extend(&p.xy()))
    }

    /// Computes the box of any geometry; empty geometries yield [`Bounds::empty`].
    #[must_use]
    pub fn of(geometry: &Geometry) -> Self {
        Self::empty().extend_geometry(geometry)
    }

    fn extend_geometry(self, geometry: &Geometry) -> Self {
        match geometry {
            Geometry::Point(p) => self.extend(&p.xy()),
            Geometry::MultiPoint(points) | Geometry::LineString(points) => {
                self.extend_points(points)
            }
            Geometry::MultiLineString(lines) | Geometry::Polygon(lines) => {
                lines.iter().fold(self, |b, l| b.extend_points(l))
            }
            Geometry::MultiPolygon(polygons) => polygons
                .iter()
                .flatten()
                .fold(self, |b, r| b.extend_points(r)),
            Geometry::GeometryCollection(members) => {
                members.iter().fold(self, Self::extend_geometry)
            }
        }
    }

    /// Closed-interval overlap test, independent per axis.
    #[must_use]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x
            && self.min.y <= other.max.y
            && self.max.x >= other.min.x
            && self.max.y >= other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn empty_is_empty() {
        assert!(Bounds::empty().is_empty());
        assert!(!Bounds::empty().extend(&Point2::new(1.0, 2.0)).is_empty());
    }

    #[test]
    fn point_ignores_higher_dimensions() {
        let g = Geometry::Point(Point::with_extra(1.0, 2.0, vec![3.0, 4.0]));
        let b = Bounds::of(&g);
        assert_eq!(b.min, Point2::new(1.0, 2.0));
        assert_eq!(b.max, Point2::new(1.0, 2.0));
    }

    #[test]
    fn multilinestring_bounds() {
        let g = Geometry::MultiLineString(vec![
            vec![p(1.0, 2.0), p(3.0, 4.0)],
            vec![p(5.0, 6.0), p(7.0, 8.0)],
        ]);
        let b = Bounds::of(&g);
        assert_eq!(b.min, Point2::new(1.0, 2.0));
        assert_eq!(b.max, Point2::new(7.0, 8.0));
    }

    #[test]
    fn collection_bounds() {
        let g = Geometry::GeometryCollection(vec![
            Geometry::Point(p(-1.0, 0.0)),
            Geometry::Polygon(vec![vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 3.0)]]),
        ]);
        let b = Bounds::of(&g);
        assert_eq!(b.min, Point2::new(-1.0, 0.0));
        assert_eq!(b.max, Point2::new(2.0, 3.0));
    }

    #[test]
    fn overlap_touching_edges() {
        let a = Bounds::empty().extend_points(&[p(0.0, 0.0), p(1.0, 1.0)]);
        let b = Bounds::empty().extend_points(&[p(1.0, 0.0), p(2.0, 1.0)]);
        let c = Bounds::empty().extend_points(&[p(1.5, 0.0), p(2.0, 1.0)]);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn empty_never_overlaps() {
        let a = Bounds::empty().extend_points(&[p(0.0, 0.0), p(1.0, 1.0)]);
        assert!(!a.overlaps(&Bounds::empty()));
    }
}
