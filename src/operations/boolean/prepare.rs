use crate::error::{GeometryError, Result};
use crate::geometry::{Bounds, Geometry, Point};
use crate::math::Point2;

use super::sweep_event::{EdgeRef, EventArena, EventQueue};

/// Offset factor for the synthetic vertex added to two-point area rings.
pub const PAD_DELTA: f64 = 1e-5;

/// Role an operand plays in the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum OperandKind {
    Area,
    Line,
}

/// An input geometry flattened into a bag of 2-D vertex chains.
///
/// Area chains are rings and wrap around; line chains stay open.
#[derive(Debug, Clone)]
pub(super) struct Operand {
    pub kind: OperandKind,
    pub chains: Vec<Vec<Point2>>,
    pub bounds: Bounds,
}

impl Operand {
    /// Flattens `geometry` for the sweep.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Unsupported`] for point-like kinds and collections.
    pub fn from_geometry(geometry: &Geometry) -> Result<Self> {
        let (kind, chains): (OperandKind, Vec<&[Point]>) = match geometry {
            Geometry::Polygon(rings) => (OperandKind::Area, rings.iter().map(Vec::as_slice).collect()),
            Geometry::MultiPolygon(polygons) => (
                OperandKind::Area,
                polygons.iter().flatten().map(Vec::as_slice).collect(),
            ),
            Geometry::LineString(line) => (OperandKind::Line, vec![line.as_slice()]),
            Geometry::MultiLineString(lines) => {
                (OperandKind::Line, lines.iter().map(Vec::as_slice).collect())
            }
            Geometry::Point(_) | Geometry::MultiPoint(_) | Geometry::GeometryCollection(_) => {
                return Err(GeometryError::unsupported(geometry.kind(), "construct").into());
            }
        };

        let chains: Vec<Vec<Point2>> = chains
            .into_iter()
            .filter_map(|chain| {
                let mut xy: Vec<Point2> = chain.iter().map(Point::xy).collect();
                match (kind, xy.len()) {
                    (_, 0 | 1) => None,
                    (OperandKind::Area, 2) => {
                        xy.push(pad_point(&xy[0], &xy[1]));
                        Some(xy)
                    }
                    _ => Some(xy),
                }
            })
            .collect();

        let bounds = chains
            .iter()
            .flatten()
            .fold(Bounds::empty(), |b, p| b.extend(p));

        tracing::debug!(
            kind = ?kind,
            chains = chains.len(),
            vertices = chains.iter().map(Vec::len).sum::<usize>(),
            "Flattened operand"
        );

        Ok(Self {
            kind,
            chains,
            bounds,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// The chains as value-model rings or lines.
    pub fn to_points(&self) -> Vec<Vec<Point>> {
        self.chains
            .iter()
            .map(|chain| chain.iter().map(|p| Point::new(p.x, p.y)).collect())
            .collect()
    }
}

/// Synthetic third vertex giving a two-point ring some extent.
fn pad_point(p0: &Point2, p1: &Point2) -> Point2 {
    Point2::new(
        p1.x + (p1.x - p0.x) * PAD_DELTA,
        p1.y - (p1.y - p0.y) * PAD_DELTA,
    )
}

/// Creates the events of every segment of `operand` and queues them.
///
/// `contour_id` numbers chains across both operands. Zero-length segments
/// are skipped. Returns the number of segments added.
pub(super) fn fill_queue(
    arena: &mut EventArena,
    queue: &mut EventQueue,
    operand: &Operand,
    is_subject: bool,
    contour_id: &mut usize,
) -> usize {
    let mut segments = 0;
    for (chain_index, chain) in operand.chains.iter().enumerate() {
        let n = chain.len();
        let edge_count = match operand.kind {
            OperandKind::Area => n,
            OperandKind::Line => n - 1,
        };
        for i in 0..edge_count {
            let a = chain[i];
            let b = chain[(i + 1) % n];
            if a == b {
                continue;
            }
            let edge = match operand.kind {
                OperandKind::Area => None,
                OperandKind::Line => Some(EdgeRef {
                    chain: chain_index,
                    index: i,
                    origin: a,
                }),
            };
            let (e1, e2) = arena.create_segment(a, b, is_subject, *contour_id, edge);
            queue.push(arena, e1);
            queue.push(arena, e2);
            segments += 1;
        }
        *contour_id += 1;
    }
    segments
}
