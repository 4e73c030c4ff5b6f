use super::sweep_event::{EdgeType, EventArena, EventId};

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    Intersection,
    /// Subject minus clipping.
    Difference,
    Xor,
}

/// Determines whether a segment belongs to the result boundary.
///
/// For ordinary segments the decision depends on whether the segment lies
/// inside the other operand (`!other_in_out`) and which operand owns it:
///
/// | Owner    | vs other operand | Union   | Intersection | Difference | Xor  |
/// |----------|------------------|---------|--------------|------------|------|
/// | subject  | outside          | keep    | discard      | keep       | keep |
/// | subject  | inside           | discard | keep         | discard    | keep |
/// | clipping | outside          | keep    | discard      | discard    | keep |
/// | clipping | inside           | discard | keep         | keep       | keep |
///
/// Of two coincident segments only one is kept: when both operands bound the
/// region on the same side (Union, Intersection) or on opposite sides
/// (Difference).
#[allow(clippy::match_same_arms)]
#[must_use]
pub(super) fn in_result(
    edge_type: EdgeType,
    is_subject: bool,
    other_in_out: bool,
    op: BooleanOp,
) -> bool {
    let inside_other = !other_in_out;
    match (edge_type, op) {
        (EdgeType::Normal, BooleanOp::Union) => !inside_other,
        (EdgeType::Normal, BooleanOp::Intersection) => inside_other,
        (EdgeType::Normal, BooleanOp::Difference) => is_subject != inside_other,
        (EdgeType::Normal, BooleanOp::Xor) => true,

        (EdgeType::SameTransition, BooleanOp::Union) => true,
        (EdgeType::SameTransition, BooleanOp::Intersection) => true,
        (EdgeType::SameTransition, BooleanOp::Difference) => false,
        (EdgeType::SameTransition, BooleanOp::Xor) => false,

        (EdgeType::DifferentTransition, BooleanOp::Difference) => true,
        (EdgeType::DifferentTransition, _) => false,

        (EdgeType::NonContributing, _) => false,
    }
}

/// Whether crossing the segment upwards enters (`+1`) or leaves (`-1`) the result.
fn result_transition(
    edge_type: EdgeType,
    is_subject: bool,
    in_out: bool,
    other_in_out: bool,
    op: BooleanOp,
) -> i8 {
    let this_in = !in_out;
    let that_in = !other_in_out;
    let is_in = match (edge_type, op) {
        // Coincident edges switch both operands at once.
        (EdgeType::SameTransition, _) => this_in,
        (EdgeType::DifferentTransition, _) => this_in == is_subject,
        (_, BooleanOp::Intersection) => this_in && that_in,
        (_, BooleanOp::Union) => this_in || that_in,
        (_, BooleanOp::Xor) => this_in ^ that_in,
        (_, BooleanOp::Difference) if is_subject => this_in && !that_in,
        (_, BooleanOp::Difference) => that_in && !this_in,
    };
    if is_in {
        1
    } else {
        -1
    }
}

/// Derives the inside/outside flags of the left event `id` from the segment
/// directly below it, then decides its membership in the result.
pub(super) fn compute_fields(
    arena: &mut EventArena,
    id: EventId,
    prev: Option<EventId>,
    op: BooleanOp,
) {
    let below = prev.map(|p| {
        let e = &arena[p];
        (e.is_subject, e.in_out, e.other_in_out, arena.is_vertical(p))
    });

    let e = &mut arena[id];
    match below {
        None => {
            e.in_out = false;
            e.other_in_out = true;
        }
        Some((p_subject, p_in_out, p_other_in_out, p_vertical)) => {
            if e.is_subject == p_subject {
                e.in_out = !p_in_out;
                e.other_in_out = p_other_in_out;
            } else {
                e.in_out = !p_other_in_out;
                e.other_in_out = if p_vertical { !p_in_out } else { p_in_out };
            }
        }
    }

    e.result_transition = if in_result(e.edge_type, e.is_subject, e.other_in_out, op) {
        result_transition(e.edge_type, e.is_subject, e.in_out, e.other_in_out, op)
    } else {
        0
    };
}

/// Whether a piece of the line operand survives the operation against the
/// area operand. Pieces lying on the area's boundary count as inside except
/// for Difference.
#[allow(clippy::match_same_arms)]
#[must_use]
pub(super) fn keep_line_piece(on_boundary: bool, other_in_out: bool, op: BooleanOp) -> bool {
    let inside = !other_in_out;
    match (op, on_boundary) {
        (BooleanOp::Difference, true) => false,
        (_, true) => true,
        (BooleanOp::Intersection, false) => inside,
        (BooleanOp::Union, false) => !inside,
        (BooleanOp::Difference, false) => !inside,
        (BooleanOp::Xor, false) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_keeps_outside_segments() {
        assert!(in_result(EdgeType::Normal, true, true, BooleanOp::Union));
        assert!(in_result(EdgeType::Normal, false, true, BooleanOp::Union));
        assert!(!in_result(EdgeType::Normal, true, false, BooleanOp::Union));
    }

    #[test]
    fn intersection_keeps_inside_segments() {
        assert!(in_result(EdgeType::Normal, true, false, BooleanOp::Intersection));
        assert!(!in_result(EdgeType::Normal, false, true, BooleanOp::Intersection));
    }

    #[test]
    fn difference_keeps_subject_outside_and_clipping_inside() {
        assert!(in_result(EdgeType::Normal, true, true, BooleanOp::Difference));
        assert!(!in_result(EdgeType::Normal, true, false, BooleanOp::Difference));
        assert!(in_result(EdgeType::Normal, false, false, BooleanOp::Difference));
        assert!(!in_result(EdgeType::Normal, false, true, BooleanOp::Difference));
    }

    #[test]
    fn xor_keeps_every_normal_segment() {
        for subject in [true, false] {
            for outside in [true, false] {
                assert!(in_result(EdgeType::Normal, subject, outside, BooleanOp::Xor));
            }
        }
    }

    #[test]
    fn coincident_segments() {
        assert!(in_result(EdgeType::SameTransition, true, true, BooleanOp::Union));
        assert!(!in_result(EdgeType::SameTransition, true, true, BooleanOp::Xor));
        assert!(in_result(EdgeType::DifferentTransition, true, true, BooleanOp::Difference));
        assert!(!in_result(EdgeType::DifferentTransition, true, true, BooleanOp::Union));
        assert!(!in_result(EdgeType::NonContributing, true, true, BooleanOp::Union));
    }

    #[test]
    fn transitions() {
        let normal = EdgeType::Normal;
        // Bottom edge of a lone subject square: entering it upwards.
        assert_eq!(result_transition(normal, true, false, true, BooleanOp::Union), 1);
        // Top edge: leaving it.
        assert_eq!(result_transition(normal, true, true, true, BooleanOp::Union), -1);
        // Clipping edge inside the subject, for Difference: entering the hole leaves the result.
        assert_eq!(result_transition(normal, false, false, false, BooleanOp::Difference), -1);
    }

    #[test]
    fn coincident_bottom_edge_enters_result() {
        // Shared bottom edge of two identical squares.
        assert_eq!(
            result_transition(EdgeType::SameTransition, true, false, true, BooleanOp::Intersection),
            1
        );
        // Subject bottom edge coinciding with a clipping top edge.
        assert_eq!(
            result_transition(EdgeType::DifferentTransition, true, false, true, BooleanOp::Difference),
            1
        );
        assert_eq!(
            result_transition(EdgeType::DifferentTransition, false, true, true, BooleanOp::Difference),
            1
        );
    }

    #[test]
    fn line_pieces() {
        assert!(keep_line_piece(false, false, BooleanOp::Intersection));
        assert!(!keep_line_piece(false, true, BooleanOp::Intersection));
        assert!(keep_line_piece(false, true, BooleanOp::Difference));
        assert!(!keep_line_piece(true, false, BooleanOp::Difference));
        assert!(keep_line_piece(true, false, BooleanOp::Intersection));
        assert!(keep_line_piece(false, false, BooleanOp::Xor));
    }

    #[test]
    fn lone_segment_is_outside_other() {
        let mut arena = EventArena::default();
        let (l, _) = arena.create_segment(
            crate::math::Point2::new(0.0, 0.0),
            crate::math::Point2::new(1.0, 0.0),
            true,
            0,
            None,
        );
        compute_fields(&mut arena, l, None, BooleanOp::Union);
        assert!(arena[l].other_in_out);
        assert!(!arena[l].in_out);
        assert_eq!(arena[l].result_transition, 1);
    }
}
