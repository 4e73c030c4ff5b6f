use crate::geometry::Point;
use crate::math::predicates::distance_point_to_segment;

/// Ramer–Douglas–Peucker over an open polyline, keeping both endpoints.
///
/// A span whose farthest interior vertex lies within `epsilon` of its chord
/// collapses to its two endpoints.
pub(super) fn rdp(points: Vec<Point>, epsilon: f64) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;
    mark(&points, 0, n - 1, epsilon, &mut keep);

    points
        .into_iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(p))
        .collect()
}

fn mark(points: &[Point], first: usize, last: usize, epsilon: f64, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }
    let a = points[first].xy();
    let b = points[last].xy();

    let mut dmax = 0.0;
    let mut index = first;
    for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
        let d = distance_point_to_segment(&p.xy(), &a, &b);
        if d > dmax {
            dmax = d;
            index = i;
        }
    }

    if dmax <= epsilon {
        return;
    }
    keep[index] = true;
    mark(points, first, index, epsilon, keep);
    mark(points, index, last, epsilon, keep);
}

/// RDP over a ring, split at its two most separated vertices so the result
/// does not depend on which vertex the ring starts at.
///
/// Both anchors belong to both halves; the seam drops the duplicated anchors.
pub(super) fn rdp_ring(ring: Vec<Point>, epsilon: f64) -> Vec<Point> {
    let n = ring.len();
    let mut max_distance = 0.0;
    let mut start = 0;
    let mut end = 0;
    for i in 0..n.saturating_sub(1) {
        for j in (i + 1)..n {
            let d = ring[i].distance(&ring[j]);
            if d > max_distance {
                max_distance = d;
                start = i;
                end = j;
            }
        }
    }

    let first_half = ring[start..=end].to_vec();
    let mut second_half = ring[end..].to_vec();
    second_half.extend_from_slice(&ring[..=start]);

    let mut out = rdp(first_half, epsilon);
    let second_half = rdp(second_half, epsilon);
    let seam_end = second_half.len().saturating_sub(1);
    if let Some(middle) = second_half.get(1..seam_end) {
        out.extend_from_slice(middle);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn collinear_collapses() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        assert_eq!(rdp(line, 0.1), pts(&[(0.0, 0.0), (3.0, 0.0)]));
    }

    #[test]
    fn peak_is_kept() {
        let line = pts(&[(0.0, 0.0), (1.0, 0.52), (2.0, 1.0), (3.0, 0.52), (4.0, 0.0)]);
        assert_eq!(
            rdp(line, 0.1),
            pts(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0)])
        );
    }

    #[test]
    fn short_lines_untouched() {
        let line = pts(&[(0.0, 0.0), (1.0, 5.0)]);
        assert_eq!(rdp(line.clone(), 10.0), line);
    }

    #[test]
    fn extra_components_survive() {
        let line = vec![
            Point::with_extra(0.0, 0.0, vec![7.0]),
            Point::with_extra(1.0, 0.0, vec![8.0]),
            Point::with_extra(2.0, 0.0, vec![9.0]),
        ];
        let out = rdp(line, 0.1);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].extra, vec![9.0]);
    }

    #[test]
    fn ring_drops_near_collinear_vertices() {
        let ring = pts(&[
            (0.0, 0.0),
            (2.0, 0.01),
            (4.0, 0.0),
            (4.0, 4.0),
            (2.0, 3.99),
            (0.0, 4.0),
        ]);
        let out = rdp_ring(ring, 0.1);
        assert_eq!(out.len(), 4);
        for corner in [(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)] {
            assert!(out.contains(&Point::from(corner)));
        }
    }

    #[test]
    fn ring_result_independent_of_start() {
        let base = [
            (0.0, 0.0),
            (1.0, 0.02),
            (3.0, 0.0),
            (3.0, 2.0),
            (1.5, 2.03),
            (0.0, 2.0),
        ];
        let a = rdp_ring(pts(&base), 0.1);
        let mut rotated = base.to_vec();
        rotated.rotate_left(2);
        let b = rdp_ring(pts(&rotated), 0.1);
        assert_eq!(a.len(), b.len());
        for p in &a {
            assert!(b.contains(p));
        }
    }
}
