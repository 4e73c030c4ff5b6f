//! The geometry value model consumed and produced by every operation.
//!
//! Containers are plain vectors. A [`Ring`] may or may not repeat its first
//! point as its last; operations preserve whichever convention they receive.

pub mod bounds;
pub mod point;

use std::fmt;

pub use bounds::Bounds;
pub use point::Point;

use crate::math::EPSILON;

/// A closed boundary; closure (first == last) is optional.
pub type Ring = Vec<Point>;

/// An open polyline.
pub type LineString = Vec<Point>;

/// A bag of rings. Once organized, ring 0 is the shell and the rest are holes.
pub type Polygon = Vec<Ring>;

pub type MultiPoint = Vec<Point>;
pub type MultiLineString = Vec<LineString>;
pub type MultiPolygon = Vec<Polygon>;

/// Closed set of geometry kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(Vec<Geometry>),
}

/// Discriminant of [`Geometry`], carried by errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        };
        f.write_str(name)
    }
}

impl Geometry {
    /// Returns the kind tag of this geometry.
    #[must_use]
    pub fn kind(&self) -> GeometryKind {
        match self {
            Self::Point(_) => GeometryKind::Point,
            Self::MultiPoint(_) => GeometryKind::MultiPoint,
            Self::LineString(_) => GeometryKind::LineString,
            Self::MultiLineString(_) => GeometryKind::MultiLineString,
            Self::Polygon(_) => GeometryKind::Polygon,
            Self::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Self::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// Returns true if the geometry holds no points at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(_) => false,
            Self::MultiPoint(points) | Self::LineString(points) => points.is_empty(),
            Self::MultiLineString(lines) | Self::Polygon(lines) => {
                lines.iter().all(Vec::is_empty)
            }
            Self::MultiPolygon(polygons) => polygons.iter().flatten().all(Vec::is_empty),
            Self::GeometryCollection(members) => members.iter().all(Self::is_empty),
        }
    }

    /// Bounding box of the geometry.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::of(self)
    }
}

/// Returns true if the ring repeats its first point as its last (within [`EPSILON`]).
#[must_use]
pub fn is_closed(ring: &[Point]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 1 => first.distance(last) < EPSILON,
        _ => false,
    }
}

/// Total number of vertices over all rings of a polygon.
#[must_use]
pub fn num_vertices(polygon: &[Ring]) -> usize {
    polygon.iter().map(Vec::len).sum()
}

/// Approximate structural equality: same kind, same shape, every component within `e`.
#[must_use]
pub fn similar(a: &Geometry, b: &Geometry, e: f64) -> bool {
    match (a, b) {
        (Geometry::Point(p1), Geometry::Point(p2)) => point_similar(p1, p2, e),
        (Geometry::MultiPoint(p1), Geometry::MultiPoint(p2))
        | (Geometry::LineString(p1), Geometry::LineString(p2)) => points_similar(p1, p2, e),
        (Geometry::MultiLineString(l1), Geometry::MultiLineString(l2))
        | (Geometry::Polygon(l1), Geometry::Polygon(l2)) => rings_similar(l1, l2, e),
        (Geometry::MultiPolygon(m1), Geometry::MultiPolygon(m2)) => {
            m1.len() == m2.len() && m1.iter().zip(m2).all(|(p1, p2)| rings_similar(p1, p2, e))
        }
        (Geometry::GeometryCollection(g1), Geometry::GeometryCollection(g2)) => {
            g1.len() == g2.len() && g1.iter().zip(g2).all(|(a, b)| similar(a, b, e))
        }
        _ => false,
    }
}

fn point_similar(p1: &Point, p2: &Point, e: f64) -> bool {
    p1.dim() == p2.dim()
        && (p1.x - p2.x).abs() < e
        && (p1.y - p2.y).abs() < e
        && p1.extra.iter().zip(&p2.extra).all(|(a, b)| (a - b).abs() < e)
}

fn points_similar(p1: &[Point], p2: &[Point], e: f64) -> bool {
    p1.len() == p2.len() && p1.iter().zip(p2).all(|(a, b)| point_similar(a, b, e))
}

fn rings_similar(r1: &[Vec<Point>], r2: &[Vec<Point>], e: f64) -> bool {
    r1.len() == r2.len() && r1.iter().zip(r2).all(|(a, b)| points_similar(a, b, e))
}
