use std::f64::consts::TAU;

use slotmap::SecondaryMap;

use crate::geometry::{Point, Ring};
use crate::math::Point2;

use super::select::{keep_line_piece, BooleanOp};
use super::sweep_event::{EventArena, EventId};

/// A result segment between two vertices of the result graph.
struct ResultEdge {
    /// Vertex at the left event.
    left: usize,
    /// Vertex at the right event.
    right: usize,
    /// The result lies above the segment.
    result_above: bool,
    vertical: bool,
    used: bool,
}

impl ResultEdge {
    fn far_end(&self, from: usize) -> usize {
        if self.left == from {
            self.right
        } else {
            self.left
        }
    }
}

/// Kept segments whose both events were processed, as an edge list over
/// distinct vertices, plus the vertex positions and per-vertex incidence.
fn result_graph(
    arena: &EventArena,
    sorted: &[EventId],
) -> (Vec<ResultEdge>, Vec<Point2>, Vec<Vec<usize>>) {
    let mut processed: SecondaryMap<EventId, ()> = SecondaryMap::new();
    for &id in sorted {
        processed.insert(id, ());
    }

    let segments: Vec<EventId> = sorted
        .iter()
        .copied()
        .filter(|&id| {
            let e = &arena[id];
            e.left && e.in_result() && processed.contains_key(e.other)
        })
        .collect();

    // Endpoints shared by split segments are bit-identical, so exact
    // equality identifies the vertices.
    let mut ends: Vec<(Point2, usize)> = Vec::with_capacity(segments.len() * 2);
    for (i, &id) in segments.iter().enumerate() {
        ends.push((arena[id].point, 2 * i));
        ends.push((arena.other_point(id), 2 * i + 1));
    }
    ends.sort_by(|a, b| a.0.x.total_cmp(&b.0.x).then(a.0.y.total_cmp(&b.0.y)));

    let mut vertices = Vec::new();
    let mut vertex_of_end = vec![0; ends.len()];
    for group in ends.chunk_by(|a, b| a.0 == b.0) {
        for &(_, end) in group {
            vertex_of_end[end] = vertices.len();
        }
        vertices.push(group[0].0);
    }

    let mut incident = vec![Vec::new(); vertices.len()];
    let edges = segments
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let (left, right) = (vertex_of_end[2 * i], vertex_of_end[2 * i + 1]);
            incident[left].push(i);
            incident[right].push(i);
            ResultEdge {
                left,
                right,
                result_above: arena[id].result_transition > 0,
                vertical: arena.is_vertical(id),
                used: false,
            }
        })
        .collect();
    (edges, vertices, incident)
}

/// Clockwise angle from direction `from` to direction `to`, in `(0, TAU]`.
fn clockwise_turn(from: f64, to: f64) -> f64 {
    let turn = (from - to).rem_euclid(TAU);
    if turn <= 0.0 {
        TAU
    } else {
        turn
    }
}

fn direction(vertices: &[Point2], from: usize, to: usize) -> f64 {
    let d = vertices[to] - vertices[from];
    d.y.atan2(d.x)
}

/// Closed rings traced through the result segments, exteriors
/// counter-clockwise and holes clockwise.
///
/// Every contour is walked with the result on its left. At a vertex shared
/// by more than two result segments the walk leaves along the first segment
/// clockwise from the one it arrived on, which keeps pieces that only touch
/// at that vertex apart. A contour that still returns to one of its own
/// vertices is cut there into separate rings.
pub(super) fn connect_edges(arena: &EventArena, sorted: &[EventId]) -> Vec<Ring> {
    let (mut edges, vertices, incident) = result_graph(arena, sorted);
    let mut rings = Vec::new();
    let mut path_position: Vec<Option<usize>> = vec![None; vertices.len()];

    for first in 0..edges.len() {
        // Vertical segments carry no usable above/below side to start from;
        // every contour has a non-vertical segment.
        if edges[first].used || edges[first].vertical {
            continue;
        }
        edges[first].used = true;
        let (start, mut current) = if edges[first].result_above {
            (edges[first].left, edges[first].right)
        } else {
            (edges[first].right, edges[first].left)
        };
        let mut previous = start;
        let mut contour = vec![start, current];

        for _ in 0..edges.len() {
            let incoming = direction(&vertices, current, previous);
            let mut best: Option<(f64, Option<usize>)> = None;
            for &e in &incident[current] {
                if edges[e].used {
                    continue;
                }
                let far = edges[e].far_end(current);
                let turn = clockwise_turn(incoming, direction(&vertices, current, far));
                if best.is_none_or(|(t, _)| turn < t) {
                    best = Some((turn, Some(e)));
                }
            }
            if current == start {
                let turn = clockwise_turn(incoming, direction(&vertices, start, contour[1]));
                if best.is_none_or(|(t, _)| turn < t) {
                    best = Some((turn, None));
                }
            }
            let Some((_, Some(e))) = best else { break };
            edges[e].used = true;
            previous = current;
            current = edges[e].far_end(current);
            contour.push(current);
        }

        split_contour(&contour, &vertices, &mut path_position, &mut rings);
    }

    tracing::debug!(
        result_edges = edges.len(),
        contours = rings.len(),
        "Connected result edges"
    );
    rings
}

/// Cuts a closed vertex walk into simple rings at every repeated vertex.
fn split_contour(
    contour: &[usize],
    vertices: &[Point2],
    path_position: &mut [Option<usize>],
    rings: &mut Vec<Ring>,
) {
    let mut path: Vec<usize> = Vec::with_capacity(contour.len());
    for &v in contour {
        if let Some(at) = path_position[v] {
            let mut ring: Ring = path[at..].iter().map(|&u| to_point(vertices[u])).collect();
            ring.push(to_point(vertices[v]));
            rings.push(ring);
            for &u in &path[at + 1..] {
                path_position[u] = None;
            }
            path.truncate(at + 1);
        } else {
            path_position[v] = Some(path.len());
            path.push(v);
        }
    }
    if path.len() > 1 {
        // The walk stopped early; close what was traced.
        let mut ring: Ring = path.iter().map(|&u| to_point(vertices[u])).collect();
        ring.push(to_point(vertices[path[0]]));
        rings.push(ring);
    }
    for &u in &path {
        path_position[u] = None;
    }
}

fn to_point(p: Point2) -> Point {
    Point::new(p.x, p.y)
}

/// Pieces of the line operand kept by `op`, joined back into chains that
/// follow the input direction.
pub(super) fn connect_lines(
    arena: &EventArena,
    sorted: &[EventId],
    op: BooleanOp,
) -> Vec<Vec<Point2>> {
    struct Piece {
        chain: usize,
        index: usize,
        offset: f64,
        start: Point2,
        end: Point2,
    }

    let mut pieces: Vec<Piece> = sorted
        .iter()
        .filter_map(|&id| {
            let e = &arena[id];
            let edge = e.edge?;
            if !e.left || !keep_line_piece(e.on_boundary, e.other_in_out, op) {
                return None;
            }
            let (a, b) = (e.point, arena.other_point(id));
            let (start, end) = if (a - edge.origin).norm() <= (b - edge.origin).norm() {
                (a, b)
            } else {
                (b, a)
            };
            Some(Piece {
                chain: edge.chain,
                index: edge.index,
                offset: (start - edge.origin).norm(),
                start,
                end,
            })
        })
        .collect();

    pieces.sort_by(|a, b| {
        a.chain
            .cmp(&b.chain)
            .then(a.index.cmp(&b.index))
            .then(a.offset.total_cmp(&b.offset))
    });

    let mut lines: Vec<Vec<Point2>> = Vec::new();
    let mut current_chain = None;
    for piece in pieces {
        let continues = current_chain == Some(piece.chain)
            && lines.last().and_then(|l| l.last()) == Some(&piece.start);
        match lines.last_mut() {
            Some(line) if continues => line.push(piece.end),
            _ => lines.push(vec![piece.start, piece.end]),
        }
        current_chain = Some(piece.chain);
    }

    tracing::debug!(lines = lines.len(), "Connected line pieces");
    lines
}

/// Distinct points where segments of both operands meet.
pub(super) fn crossing_points(arena: &EventArena, sorted: &[EventId]) -> Vec<Point2> {
    let mut touches: Vec<(Point2, bool)> = sorted
        .iter()
        .map(|&id| (arena[id].point, arena[id].is_subject))
        .collect();
    touches.sort_by(|a, b| a.0.x.total_cmp(&b.0.x).then(a.0.y.total_cmp(&b.0.y)));

    let mut points = Vec::new();
    for group in touches.chunk_by(|a, b| a.0 == b.0) {
        let subject = group.iter().any(|t| t.1);
        let clipping = group.iter().any(|t| !t.1);
        if subject && clipping {
            points.push(group[0].0);
        }
    }
    points
}
