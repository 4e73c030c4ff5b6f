use crate::geometry::Point;
use crate::math::EPSILON;
use crate::operations::query::ring_area;

/// Snaps every component to the nearest multiple of `spacing`.
///
/// A zero spacing leaves the point unchanged.
pub(super) fn snap_to_grid(p: &Point, spacing: f64) -> Point {
    if spacing == 0.0 {
        return p.clone();
    }
    p.map_coords(|v| (v / spacing + 0.5).floor() * spacing)
}

/// Grid simplification of a ring.
///
/// Vertices are snapped, consecutive duplicates merged and collinear
/// vertices dropped. Finally, spikes that return to a vertex within
/// `ear_window` steps are cut off as long as more than three vertices remain.
pub(super) fn grid_ring(ring: &[Point], spacing: f64, ear_window: usize) -> Vec<Point> {
    let mut coords: Vec<Point> = Vec::with_capacity(ring.len());
    for p in ring {
        let snapped = snap_to_grid(p, spacing);
        if coords.last().is_none_or(|last| snapped.distance(last) > EPSILON) {
            coords.push(snapped);
        }
    }

    // Closure is restored by the caller; a closing duplicate would rotate the ring.
    if coords.len() > 1 && coords[0].distance(&coords[coords.len() - 1]) <= EPSILON {
        coords.pop();
    }

    remove_collinear(&mut coords);
    remove_ears(&mut coords, ear_window);
    coords
}

fn remove_collinear(coords: &mut Vec<Point>) {
    let mut cursor = 0;
    while cursor < coords.len() {
        let n = coords.len();
        let before = (cursor + n - 1) % n;
        let after = (cursor + 1) % n;
        let triangle = [
            coords[before].clone(),
            coords[cursor].clone(),
            coords[after].clone(),
        ];
        if ring_area(&triangle).abs() < EPSILON {
            coords.remove(cursor);
        } else {
            cursor += 1;
        }
    }
}

fn remove_ears(coords: &mut Vec<Point>, ear_window: usize) {
    let mut cursor = 0;
    while cursor < coords.len() {
        let n = coords.len();
        let mut clipped = false;
        for step in 2..ear_window {
            let after = (cursor + step) % n;
            if coords[cursor].distance(&coords[after]) >= EPSILON || n <= step + 3 {
                continue;
            }
            if after > cursor {
                coords.drain(cursor..cursor + step);
            } else {
                coords.truncate(cursor);
                coords.drain(..after);
            }
            tracing::trace!(cursor, removed = step, "Cut ear from ring");
            clipped = true;
            break;
        }
        if !clipped {
            cursor += 1;
        }
    }
}
