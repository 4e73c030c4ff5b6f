use super::{points_equal, Point2, Vector2, EPSILON};

/// Outcome of intersecting two closed segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not meet.
    None,
    /// The segments meet in exactly one point.
    Point(Point2),
    /// The segments are collinear and share the sub-segment between the two
    /// points, ordered along the first segment.
    Overlap(Point2, Point2),
}

fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Intersection of segments `[a0, a1]` and `[b0, b1]`.
///
/// Parallelism and collinearity are decided relative to the segment lengths
/// with [`EPSILON`]. Computed points that land within tolerance of an input
/// endpoint are replaced by that endpoint, so shared vertices stay bit-identical.
#[must_use]
pub fn segment_intersection(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> SegmentIntersection {
    let va = a1 - a0;
    let vb = b1 - b0;
    let e = b0 - a0;

    let sqr_len_a = va.dot(&va);
    let sqr_len_b = vb.dot(&vb);
    if sqr_len_a == 0.0 || sqr_len_b == 0.0 {
        return SegmentIntersection::None;
    }

    let kross = cross(&va, &vb);
    if kross * kross > EPSILON * EPSILON * sqr_len_a * sqr_len_b {
        let s = cross(&e, &vb) / kross;
        if !(0.0..=1.0).contains(&s) {
            return SegmentIntersection::None;
        }
        let t = cross(&e, &va) / kross;
        if !(0.0..=1.0).contains(&t) {
            return SegmentIntersection::None;
        }
        let p = if t == 0.0 || t == 1.0 {
            b0 + vb * t
        } else {
            a0 + va * s
        };
        let p = pin_axis_aligned(p, [(a0, a1), (b0, b1)]);
        return SegmentIntersection::Point(snap(p, [a0, a1, b0, b1]));
    }

    // Parallel: only collinear segments can still share points.
    let sqr_len_e = e.dot(&e);
    let kross = cross(&e, &va);
    if kross * kross > EPSILON * EPSILON * sqr_len_a * sqr_len_e {
        return SegmentIntersection::None;
    }

    let sa = va.dot(&e) / sqr_len_a;
    let sb = sa + va.dot(&vb) / sqr_len_a;
    let smin = sa.min(sb);
    let smax = sa.max(sb);
    if smin > 1.0 || smax < 0.0 {
        return SegmentIntersection::None;
    }

    let p0 = snap(a0 + va * smin.max(0.0), [a0, a1, b0, b1]);
    let p1 = snap(a0 + va * smax.min(1.0), [a0, a1, b0, b1]);
    if points_equal(&p0, &p1) {
        SegmentIntersection::Point(p0)
    } else {
        SegmentIntersection::Overlap(p0, p1)
    }
}

/// Copies the constant coordinate of horizontal and vertical segments into `p`.
fn pin_axis_aligned(mut p: Point2, segments: [(&Point2, &Point2); 2]) -> Point2 {
    for (s0, s1) in segments {
        if s0.x == s1.x {
            p.x = s0.x;
        }
        if s0.y == s1.y {
            p.y = s0.y;
        }
    }
    p
}

fn snap(p: Point2, candidates: [&Point2; 4]) -> Point2 {
    candidates
        .into_iter()
        .find(|c| points_equal(&p, c) || (p - **c).norm() < EPSILON)
        .copied()
        .unwrap_or(p)
}
