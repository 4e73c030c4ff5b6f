use crate::error::Result;
use crate::geometry::{Bounds, Geometry, Point, Polygon, Ring};
use crate::math::Point2;
use crate::operations::repair::{FixOrientation, Organize};

use super::connect::{connect_edges, connect_lines, crossing_points};
use super::possible_intersection::{possible_intersection, Split};
use super::prepare::{fill_queue, Operand, OperandKind};
use super::select::{compute_fields, BooleanOp};
use super::status::SweepStatus;
use super::sweep_event::{EventArena, EventId, EventQueue};

/// Shape of a boolean result, fixed by the operand kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResultShape {
    /// area ∘ area
    Polygons,
    /// area ∘ line
    Lines,
    /// line ∘ line
    Points,
}

/// Executes a boolean operation on two planar geometries.
///
/// Orchestrates the full pipeline: flattening, sweep with segment
/// subdivision, selection, and reconnection of the kept edges.
pub(super) fn boolean_execute(
    subject: &Geometry,
    clipping: &Geometry,
    op: BooleanOp,
) -> Result<Geometry> {
    // Step 1: Flatten the operands; a line operand always takes the subject role
    let mut subject = Operand::from_geometry(subject)?;
    let mut clipping = Operand::from_geometry(clipping)?;
    let shape = match (subject.kind, clipping.kind) {
        (OperandKind::Area, OperandKind::Area) => ResultShape::Polygons,
        (OperandKind::Line, OperandKind::Line) => ResultShape::Points,
        _ => ResultShape::Lines,
    };
    if subject.kind == OperandKind::Area && clipping.kind == OperandKind::Line {
        std::mem::swap(&mut subject, &mut clipping);
    }

    // Step 2: Shortcut empty and disjoint operands
    if subject.is_empty() || clipping.is_empty() || !subject.bounds.overlaps(&clipping.bounds) {
        tracing::debug!(?op, ?shape, "Operands do not interact, skipping sweep");
        return Ok(trivial_result(&subject, &clipping, op, shape));
    }

    // Step 3: Queue the segments of both operands
    let mut arena = EventArena::default();
    let mut queue = EventQueue::default();
    let mut contour_id = 0;
    let segments = fill_queue(&mut arena, &mut queue, &subject, true, &mut contour_id)
        + fill_queue(&mut arena, &mut queue, &clipping, false, &mut contour_id);

    // Step 4: Sweep, splitting segments at every intersection
    let cutoff = sweep_cutoff(&subject.bounds, &clipping.bounds, op, shape);
    let sorted = subdivide(&mut arena, &mut queue, op, cutoff);
    tracing::debug!(
        ?op,
        segments,
        processed = sorted.len(),
        "Sweep finished"
    );

    // Step 5: Reconnect the kept edges
    let result = match shape {
        ResultShape::Polygons => {
            let rings = connect_edges(&arena, &sorted);
            Geometry::MultiPolygon(organize(rings))
        }
        ResultShape::Lines => Geometry::MultiLineString(
            connect_lines(&arena, &sorted, op)
                .iter()
                .map(|line| to_points(line))
                .collect(),
        ),
        ResultShape::Points => Geometry::MultiPoint(to_points(&crossing_points(&arena, &sorted))),
    };
    Ok(result)
}

/// Sweep position past which no further event can contribute.
fn sweep_cutoff(subject: &Bounds, clipping: &Bounds, op: BooleanOp, shape: ResultShape) -> f64 {
    match (shape, op) {
        (ResultShape::Points, _) => f64::INFINITY,
        (_, BooleanOp::Intersection) => subject.max.x.min(clipping.max.x),
        (_, BooleanOp::Difference) => subject.max.x,
        _ => f64::INFINITY,
    }
}

/// Runs the sweep, returning the processed events in order.
fn subdivide(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    op: BooleanOp,
    cutoff: f64,
) -> Vec<EventId> {
    let mut status = SweepStatus::default();
    let mut sorted = Vec::with_capacity(queue.len());

    while let Some(event) = queue.pop(arena) {
        if arena[event].point.x > cutoff {
            break;
        }
        sorted.push(event);

        if arena[event].left {
            status.insert(arena, event);
            let prev = status.prev(event);
            let next = status.next(event);
            compute_fields(arena, event, prev, op);

            if let Some(next) = next {
                if possible_intersection(arena, queue, event, next) == Split::SharedLeft {
                    compute_fields(arena, event, prev, op);
                    compute_fields(arena, next, Some(event), op);
                }
            }
            if let Some(prev) = prev {
                if possible_intersection(arena, queue, prev, event) == Split::SharedLeft {
                    let prev_prev = status.prev(prev);
                    compute_fields(arena, prev, prev_prev, op);
                    compute_fields(arena, event, Some(prev), op);
                }
            }
        } else {
            let left = arena[event].other;
            if status.contains(left) {
                let prev = status.prev(left);
                let next = status.next(left);
                status.remove(left);
                if let (Some(prev), Some(next)) = (prev, next) {
                    possible_intersection(arena, queue, prev, next);
                }
            }
        }
    }

    tracing::trace!(
        remaining = queue.len(),
        open_segments = status.len(),
        "Sweep stopped"
    );
    sorted
}

/// Result for operands whose boundaries cannot meet.
fn trivial_result(
    subject: &Operand,
    clipping: &Operand,
    op: BooleanOp,
    shape: ResultShape,
) -> Geometry {
    match (shape, op) {
        (ResultShape::Points, _) => Geometry::MultiPoint(Vec::new()),
        (ResultShape::Lines, BooleanOp::Intersection) => Geometry::MultiLineString(Vec::new()),
        (ResultShape::Lines, _) => Geometry::MultiLineString(subject.to_points()),
        (ResultShape::Polygons, BooleanOp::Intersection) => Geometry::MultiPolygon(Vec::new()),
        (ResultShape::Polygons, BooleanOp::Difference) => {
            Geometry::MultiPolygon(organize_operand(subject))
        }
        (ResultShape::Polygons, BooleanOp::Union | BooleanOp::Xor) => {
            let mut polygons = organize_operand(subject);
            polygons.extend(organize_operand(clipping));
            Geometry::MultiPolygon(polygons)
        }
    }
}

/// Closes, rewinds and nests the rings of an area operand.
fn organize_operand(operand: &Operand) -> Vec<Polygon> {
    let rings: Polygon = operand.to_points().into_iter().map(close_ring).collect();
    organize(FixOrientation::new(rings).execute())
}

fn organize(rings: Vec<Ring>) -> Vec<Polygon> {
    let organized = Organize::new(rings).execute();
    if !organized.leftovers.is_empty() {
        tracing::debug!(
            leftovers = organized.leftovers.len(),
            "Dropped degenerate result rings"
        );
    }
    organized.polygons
}

fn close_ring(mut ring: Ring) -> Ring {
    if ring.first() != ring.last() {
        if let Some(first) = ring.first().cloned() {
            ring.push(first);
        }
    }
    ring
}

fn to_points(points: &[Point2]) -> Vec<Point> {
    points.iter().map(|p| Point::new(p.x, p.y)).collect()
}
