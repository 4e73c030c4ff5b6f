//! Boolean operations between planar geometries.
//!
//! The engine is a Martínez–Rueda–Feito plane sweep: segments are split at
//! every intersection, each piece learns from its neighbour below whether it
//! lies inside the other operand, and the pieces selected for the operation
//! are linked back into rings, chains or points.

mod connect;
mod engine;
mod possible_intersection;
mod prepare;
mod select;
mod status;
mod sweep_event;

use crate::error::Result;
use crate::geometry::Geometry;

pub use prepare::PAD_DELTA;
pub use select::BooleanOp;

/// Computes `subject <op> clipping`.
///
/// The operand kinds select the result shape:
///
/// | subject  | clipping | result            |
/// |----------|----------|-------------------|
/// | area     | area     | `MultiPolygon`    |
/// | area     | line     | `MultiLineString` |
/// | line     | area     | `MultiLineString` |
/// | line     | line     | `MultiPoint`      |
///
/// With one line operand the line always plays the subject role, so
/// `Difference` keeps the parts of the line outside the area whichever side
/// it was passed on. Between two lines the result is their meeting points
/// for every operation.
///
/// Result coordinates are two-dimensional; result rings are closed, shells
/// counter-clockwise and holes clockwise.
pub struct Construct<'a> {
    subject: &'a Geometry,
    clipping: &'a Geometry,
    op: BooleanOp,
}

impl<'a> Construct<'a> {
    /// Creates a new `Construct` operation.
    #[must_use]
    pub fn new(subject: &'a Geometry, clipping: &'a Geometry, op: BooleanOp) -> Self {
        Self {
            subject,
            clipping,
            op,
        }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Unsupported`](crate::error::GeometryError::Unsupported)
    /// if either operand is a point, multipoint or collection.
    pub fn execute(&self) -> Result<Geometry> {
        engine::boolean_execute(self.subject, self.clipping, self.op)
    }
}
