//! Point/ring predicates shared by every operation.

use super::{Point2, EPSILON};
use crate::geometry::Point;

/// Winding direction of a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Positive turn at the extreme vertex.
    CounterClockwise,
    /// Negative turn at the extreme vertex.
    Clockwise,
    /// Zero turn (collinear or too few vertices).
    Degenerate,
}

impl Orientation {
    /// `+1`, `-1` or `0`.
    #[must_use]
    pub fn sign(self) -> i32 {
        match self {
            Self::CounterClockwise => 1,
            Self::Clockwise => -1,
            Self::Degenerate => 0,
        }
    }
}

/// Tests whether `p2` is left of (`> 0`), on (`= 0`) or right of (`< 0`) the
/// infinite line through `p0` and `p1`.
#[must_use]
pub fn is_left(p0: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y)
}

/// Even/odd ray-casting test, ray cast towards +x.
///
/// Works for either winding. Results for points exactly on the boundary are
/// deterministic but not meaningful.
#[must_use]
pub fn point_in_ring(ring: &[Point], p: &Point2) -> bool {
    let n = ring.len();
    let mut crossings = 0usize;
    for i in 0..n {
        let curr = ring[i].xy();
        let next = ring[(i + 1) % n].xy();
        if ray_crosses(*p, curr, next) {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}

fn ray_crosses(origin: Point2, start: Point2, end: Point2) -> bool {
    let (start, end) = if start.y > end.y {
        (end, start)
    } else {
        (start, end)
    };

    // Nudge off any vertex coordinate so the ray never grazes an endpoint.
    let mut p = origin;
    while p.y == start.y || p.y == end.y {
        p.y = next_up(p.y);
    }
    while p.x == start.x || p.x == end.x {
        p.x = next_up(p.x);
    }

    if p.y < start.y || p.y > end.y {
        return false;
    }

    if start.x > end.x {
        if p.x > start.x {
            return false;
        }
        if p.x < end.x {
            return true;
        }
    } else {
        if p.x > end.x {
            return false;
        }
        if p.x < start.x {
            return true;
        }
    }
    (p.y - start.y) / (p.x - start.x) >= (end.y - start.y) / (end.x - start.x)
}

/// Next representable value towards +∞.
fn next_up(v: f64) -> f64 {
    if v.is_nan() || v == f64::INFINITY {
        return v;
    }
    if v == 0.0 {
        return f64::from_bits(1);
    }
    let bits = v.to_bits();
    if v > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Orientation of a ring from the turn at its lowest (then rightmost) vertex.
///
/// A repeated closing vertex is ignored, as are zero-length edges next to the
/// extreme vertex.
#[must_use]
pub fn ring_orientation(ring: &[Point]) -> Orientation {
    let mut n = ring.len();
    if n > 1 && ring[0].x == ring[n - 1].x && ring[0].y == ring[n - 1].y {
        n -= 1;
    }
    if n < 3 {
        return Orientation::Degenerate;
    }

    let mut best = 0;
    for (i, pt) in ring.iter().enumerate().take(n).skip(1) {
        let b = &ring[best];
        if pt.y < b.y || (pt.y == b.y && pt.x >= b.x) {
            best = i;
        }
    }

    let v = ring[best].xy();
    let Some(prev) = (1..n)
        .map(|k| ring[(best + n - k) % n].xy())
        .find(|q| *q != v)
    else {
        return Orientation::Degenerate;
    };
    let Some(next) = (1..n).map(|k| ring[(best + k) % n].xy()).find(|q| *q != v) else {
        return Orientation::Degenerate;
    };

    let turn = is_left(&prev, &v, &next);
    if turn > 0.0 {
        Orientation::CounterClockwise
    } else if turn < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

/// Distance from `p` to the segment `[a, b]`, clamping the projection to the endpoints.
#[must_use]
pub fn distance_point_to_segment(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let v = b - a;
    let w = p - a;

    let c1 = w.dot(&v);
    if c1 <= 0.0 {
        return (p - a).norm();
    }
    let c2 = v.dot(&v);
    if c2 <= c1 {
        return (p - b).norm();
    }
    let t = c1 / c2;
    (p - (a + v * t)).norm()
}

/// Returns true if `p` lies within [`EPSILON`] of the segment `[a, b]`.
#[must_use]
pub fn point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> bool {
    distance_point_to_segment(p, a, b) < EPSILON
}

/// Returns true if every vertex of `inner` lies inside `outer` (even/odd rule).
#[must_use]
pub fn ring_in_ring(outer: &[Point], inner: &[Point]) -> bool {
    inner.iter().all(|p| point_in_ring(outer, &p.xy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn square() -> Vec<Point> {
        ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
    }

    #[test]
    fn inside_and_outside() {
        let sq = square();
        assert!(point_in_ring(&sq, &Point2::new(1.0, 1.0)));
        assert!(!point_in_ring(&sq, &Point2::new(3.0, 3.0)));
        assert!(!point_in_ring(&sq, &Point2::new(-1.0, 1.0)));
    }

    #[test]
    fn winding_does_not_matter() {
        let mut sq = square();
        sq.reverse();
        assert!(point_in_ring(&sq, &Point2::new(1.0, 1.0)));
    }

    #[test]
    fn closed_and_open_agree() {
        let open = square();
        let mut closed = square();
        closed.push(Point::new(0.0, 0.0));
        for q in [(0.5, 0.5), (1.9, 0.1), (2.5, 1.0), (1.0, -0.5)] {
            let q = Point2::new(q.0, q.1);
            assert_eq!(point_in_ring(&open, &q), point_in_ring(&closed, &q));
        }
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // Ray from (0, 1) passes exactly through the vertex (2, 1).
        let diamond = ring(&[(1.0, 0.0), (2.0, 1.0), (1.0, 2.0), (0.5, 1.0)]);
        assert!(point_in_ring(&diamond, &Point2::new(1.0, 1.0)));
        assert!(!point_in_ring(&diamond, &Point2::new(0.0, 1.0)));
    }

    #[test]
    fn concave_ring() {
        let u = ring(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]);
        assert!(point_in_ring(&u, &Point2::new(0.5, 2.0)));
        assert!(!point_in_ring(&u, &Point2::new(1.5, 2.0)));
        assert!(point_in_ring(&u, &Point2::new(1.5, 0.5)));
    }

    #[test]
    fn orientation_ccw_cw() {
        let sq = square();
        assert_eq!(ring_orientation(&sq), Orientation::CounterClockwise);
        let mut rev = sq;
        rev.reverse();
        assert_eq!(ring_orientation(&rev), Orientation::Clockwise);
    }

    #[test]
    fn orientation_closed_ring_lowest_at_start() {
        let closed = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, 0.0)]);
        assert_eq!(ring_orientation(&closed), Orientation::CounterClockwise);
        let mut rev = closed;
        rev.reverse();
        assert_eq!(ring_orientation(&rev), Orientation::Clockwise);
    }

    #[test]
    fn orientation_degenerate() {
        assert_eq!(ring_orientation(&[]), Orientation::Degenerate);
        let line = ring(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        assert_eq!(ring_orientation(&line), Orientation::Degenerate);
    }

    #[test]
    fn orientation_skips_duplicate_neighbours() {
        let r = ring(&[(0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert_eq!(ring_orientation(&r), Orientation::CounterClockwise);
    }

    #[test]
    fn segment_distance_cases() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(2.0, 0.0);
        assert!((distance_point_to_segment(&Point2::new(1.0, 1.0), &a, &b) - 1.0).abs() < 1e-12);
        assert!((distance_point_to_segment(&Point2::new(-1.0, 0.0), &a, &b) - 1.0).abs() < 1e-12);
        assert!((distance_point_to_segment(&Point2::new(3.0, 0.0), &a, &b) - 1.0).abs() < 1e-12);
        assert!(distance_point_to_segment(&Point2::new(1.0, 0.0), &a, &b).abs() < 1e-12);
    }

    #[test]
    fn segment_distance_degenerate_segment() {
        let a = Point2::new(1.0, 1.0);
        let d = distance_point_to_segment(&Point2::new(4.0, 5.0), &a, &a);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn on_segment() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 10.0);
        assert!(point_on_segment(&Point2::new(5.0, 5.0), &a, &b));
        assert!(!point_on_segment(&Point2::new(5.0, 5.1), &a, &b));
        assert!(!point_on_segment(&Point2::new(11.0, 11.0), &a, &b));
    }

    #[test]
    fn nested_rings() {
        let outer = square();
        let inner = ring(&[(0.5, 0.5), (1.5, 0.5), (1.5, 1.5), (0.5, 1.5)]);
        assert!(ring_in_ring(&outer, &inner));
        assert!(!ring_in_ring(&inner, &outer));
    }

    #[test]
    fn next_up_moves_forward() {
        assert!(next_up(1.0) > 1.0);
        assert!(next_up(-1.0) > -1.0);
        assert!(next_up(0.0) > 0.0);
    }
}
