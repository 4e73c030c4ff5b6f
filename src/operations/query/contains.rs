use crate::error::{GeometryError, Result};
use crate::geometry::{Geometry, Ring};
use crate::math::predicates::{point_in_ring, ring_orientation};
use crate::math::Point2;

/// Winding-aware point-in-polygon test.
///
/// Every ring containing `p` votes `+1` if counter-clockwise and `-1` if
/// clockwise; the point is inside when the vote is positive. Ring order does
/// not matter, so holes and nested shells work without prior organization.
#[must_use]
pub fn point_in_polygon(polygon: &[Ring], p: &Point2) -> bool {
    let votes: i32 = polygon
        .iter()
        .filter(|r| point_in_ring(r, p))
        .map(|r| ring_orientation(r).sign())
        .sum();
    votes > 0
}

/// Point-in-polygon over any container.
///
/// A `MultiPolygon` contains the point if any member does. Containers that
/// are not area-typed never contain anything.
#[must_use]
pub fn point_in_geometry(container: &Geometry, p: &Point2) -> bool {
    match container {
        Geometry::Polygon(rings) => point_in_polygon(rings, p),
        Geometry::MultiPolygon(polygons) => polygons.iter().any(|poly| point_in_polygon(poly, p)),
        _ => false,
    }
}

/// Tests whether `inner` lies within the polygon `outer`.
///
/// A polygon is within when every vertex of every one of its rings is inside
/// `outer`; a point when it is inside `outer`.
///
/// # Errors
///
/// Returns [`GeometryError::Unsupported`] when `outer` is not a `Polygon`, or
/// `inner` is neither a `Polygon` nor a `Point`.
pub fn within(inner: &Geometry, outer: &Geometry) -> Result<bool> {
    let Geometry::Polygon(container) = outer else {
        return Err(GeometryError::unsupported(outer.kind(), "within").into());
    };
    match inner {
        Geometry::Polygon(rings) => Ok(rings
            .iter()
            .flatten()
            .all(|p| point_in_polygon(container, &p.xy()))),
        Geometry::Point(p) => Ok(point_in_polygon(container, &p.xy())),
        other => Err(GeometryError::unsupported(other.kind(), "within").into()),
    }
}
