//! Metrics, ring organization and simplification on whole geometries.

mod common;

use approx::assert_relative_eq;
use common::{init_tracing, rect, ring, unit_square};
use planar::geometry::{is_closed, Geometry};
use planar::math::Point2;
use planar::operations::boolean::{BooleanOp, Construct};
use planar::operations::query::{point_in_polygon, ring_area, Area, Centroid};
use planar::operations::repair::{FixOrientation, Organize};
use planar::operations::simplify::{Simplify, SimplifyAlgorithm};

#[test]
#[allow(clippy::unwrap_used)]
fn unit_square_area_ignores_winding() {
    let sq = rect(0.0, 0.0, 1.0, 1.0);
    assert_relative_eq!(ring_area(&sq), 1.0);

    let mut reversed = sq.clone();
    reversed.reverse();
    assert_relative_eq!(ring_area(&reversed), -1.0);
    assert_relative_eq!(
        Area::new(&Geometry::Polygon(vec![reversed])).execute().unwrap(),
        1.0
    );
}

#[test]
fn point_in_square() {
    let sq = vec![ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])];
    assert!(point_in_polygon(&sq, &Point2::new(1.0, 1.0)));
    assert!(!point_in_polygon(&sq, &Point2::new(3.0, 3.0)));
    // Pinned boundary behaviour.
    assert!(!point_in_polygon(&sq, &Point2::new(2.0, 0.0)));
}

#[test]
fn organize_shell_and_holes() {
    init_tracing();
    let shell = rect(0.0, 0.0, 10.0, 10.0);
    let mut inner = rect(2.0, 2.0, 2.0, 2.0);
    inner.reverse();
    let mut stray = rect(20.0, 20.0, 1.0, 1.0);
    stray.reverse();

    let out = Organize::new(vec![shell, inner]).execute();
    assert_eq!(out.polygons.len(), 1);
    assert_eq!(out.polygons[0].len(), 2);
    assert!(out.leftovers.is_empty());

    let out = Organize::new(vec![rect(0.0, 0.0, 10.0, 10.0), stray.clone()]).execute();
    assert_eq!(out.polygons.len(), 1);
    assert_eq!(out.polygons[0].len(), 1);
    assert_eq!(out.leftovers, vec![stray]);
}

#[test]
fn fix_orientation_then_organize() {
    // Both rings arrive clockwise.
    let mut shell = rect(0.0, 0.0, 4.0, 4.0);
    shell.reverse();
    let mut hole = rect(1.0, 1.0, 1.0, 1.0);
    hole.reverse();

    let fixed = FixOrientation::new(vec![shell, hole]).execute();
    assert!(ring_area(&fixed[0]) > 0.0);
    assert!(ring_area(&fixed[1]) < 0.0);

    let out = Organize::new(fixed).execute();
    assert_eq!(out.polygons.len(), 1);
    assert_eq!(out.polygons[0].len(), 2);
}

#[test]
#[allow(clippy::unwrap_used)]
fn simplify_is_idempotent() {
    let noisy = Geometry::Polygon(vec![ring(&[
        (0.0, 0.0),
        (1.0, 0.02),
        (2.0, -0.01),
        (3.0, 0.0),
        (3.01, 1.5),
        (3.0, 3.0),
        (1.5, 3.02),
        (0.0, 3.0),
        (0.0, 0.0),
    ])]);
    for (algorithm, epsilon) in [(SimplifyAlgorithm::Rdp, 0.1), (SimplifyAlgorithm::Grid, 0.5)] {
        let once = Simplify::new(noisy.clone(), epsilon, algorithm).execute().unwrap();
        let twice = Simplify::new(once.clone(), epsilon, algorithm).execute().unwrap();
        assert_eq!(once, twice, "{algorithm:?}");
        let Geometry::Polygon(rings) = &once else {
            panic!("expected polygon");
        };
        assert!(is_closed(&rings[0]));
    }
}

#[test]
#[allow(clippy::unwrap_used)]
fn simplified_clip_result_keeps_its_area() {
    init_tracing();
    let a = unit_square();
    let b = Geometry::Polygon(vec![rect(0.5, 0.5, 1.0, 1.0)]);
    let union = Construct::new(&a, &b, BooleanOp::Union).execute().unwrap();
    let simplified = Simplify::new(union.clone(), 1e-6, SimplifyAlgorithm::Rdp)
        .execute()
        .unwrap();
    assert_relative_eq!(
        Area::new(&simplified).execute().unwrap(),
        Area::new(&union).execute().unwrap(),
        epsilon = 1e-9
    );
    assert_relative_eq!(Area::new(&union).execute().unwrap(), 1.75, epsilon = 1e-9);
}

#[test]
#[allow(clippy::unwrap_used)]
fn centroid_of_rectangle() {
    let g = Geometry::Polygon(vec![rect(0.0, 0.0, 4.0, 2.0)]);
    let c = Centroid::new(&g).execute().unwrap();
    assert_relative_eq!(c.x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(c.y, 1.0, epsilon = 1e-12);
}
