use std::cmp::Ordering;

use crate::math::intersect_2d::{segment_intersection, SegmentIntersection};
use crate::math::Point2;

use super::sweep_event::{EdgeType, EventArena, EventId, EventQueue};

/// What [`possible_intersection`] did to a pair of neighbouring segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Split {
    /// Nothing to do.
    None,
    /// The segments crossed and were split at the crossing point.
    Crossing,
    /// The segments overlap from a shared left endpoint; their edge types
    /// changed, so their fields must be recomputed.
    SharedLeft,
    /// The segments overlap partially and were split at the overlap ends.
    Overlap,
}

/// Splits the segment of left event `se` at `p`.
///
/// `se` keeps the part left of `p`; a new segment runs from `p` to the old
/// right endpoint. Both new events are queued, and the old right event is
/// queued again because its partner changed.
pub(super) fn divide_segment(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    se: EventId,
    p: Point2,
) {
    let (is_subject, contour_id, edge) = {
        let e = &arena[se];
        (e.is_subject, e.contour_id, e.edge)
    };
    let old_right = arena[se].other;

    let r = arena.create(p, false, se, is_subject, contour_id, edge);
    let l = arena.create(p, true, old_right, is_subject, contour_id, edge);

    // Rounding may put the split point past the old right endpoint.
    if arena.compare(l, old_right) == Ordering::Greater {
        arena[old_right].left = true;
        arena[l].left = false;
    }

    arena[old_right].other = l;
    arena[old_right].version += 1;
    arena[se].other = r;

    queue.push(arena, l);
    queue.push(arena, r);
    queue.push(arena, old_right);
}

/// Intersects two segments that are adjacent in the sweep status and splits
/// them so that afterwards they only meet at endpoints or coincide exactly.
pub(super) fn possible_intersection(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    se1: EventId,
    se2: EventId,
) -> Split {
    let (a0, a1) = (arena[se1].point, arena.other_point(se1));
    let (b0, b1) = (arena[se2].point, arena.other_point(se2));

    match segment_intersection(&a0, &a1, &b0, &b1) {
        SegmentIntersection::None => Split::None,
        SegmentIntersection::Point(p) => {
            if a0 == b0 || a1 == b1 {
                return Split::None;
            }
            if p != a0 && p != a1 {
                divide_segment(arena, queue, se1, p);
            }
            if p != b0 && p != b1 {
                divide_segment(arena, queue, se2, p);
            }
            Split::Crossing
        }
        SegmentIntersection::Overlap(..) => {
            if arena[se1].is_subject == arena[se2].is_subject {
                return Split::None;
            }
            overlap(arena, queue, se1, se2)
        }
    }
}

fn overlap(arena: &mut EventArena, queue: &mut EventQueue, se1: EventId, se2: EventId) -> Split {
    let mut events: Vec<EventId> = Vec::with_capacity(4);

    let left_coincide = arena[se1].point == arena[se2].point;
    if !left_coincide {
        if arena.compare(se1, se2) == Ordering::Greater {
            events.extend([se2, se1]);
        } else {
            events.extend([se1, se2]);
        }
    }

    let (r1, r2) = (arena[se1].other, arena[se2].other);
    let right_coincide = arena[r1].point == arena[r2].point;
    if !right_coincide {
        if arena.compare(r1, r2) == Ordering::Greater {
            events.extend([r2, r1]);
        } else {
            events.extend([r1, r2]);
        }
    }

    if left_coincide {
        let same = arena[se1].in_out == arena[se2].in_out;
        arena[se2].edge_type = EdgeType::NonContributing;
        arena[se1].edge_type = if same {
            EdgeType::SameTransition
        } else {
            EdgeType::DifferentTransition
        };
        arena[se1].on_boundary = true;
        arena[se2].on_boundary = true;

        if !right_coincide {
            // events holds the two right events; cut the longer segment at the shorter one's end.
            let longer = arena[events[1]].other;
            let at = arena[events[0]].point;
            divide_segment(arena, queue, longer, at);
        }
        return Split::SharedLeft;
    }

    if right_coincide {
        let at = arena[events[1]].point;
        divide_segment(arena, queue, events[0], at);
        return Split::Overlap;
    }

    if events[0] != arena[events[3]].other {
        // Neither segment contains the other.
        let (at1, at2) = (arena[events[1]].point, arena[events[2]].point);
        divide_segment(arena, queue, events[0], at1);
        divide_segment(arena, queue, events[1], at2);
        return Split::Overlap;
    }

    // One segment contains the other.
    let (at1, at2) = (arena[events[1]].point, arena[events[2]].point);
    divide_segment(arena, queue, events[0], at1);
    // The first split handed the outer right event a new left partner.
    let outer_left = arena[events[3]].other;
    divide_segment(arena, queue, outer_left, at2);
    Split::Overlap
}
