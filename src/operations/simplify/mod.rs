mod grid;
mod rdp;

use crate::error::{OperationError, Result};
use crate::geometry::{is_closed, Geometry, LineString, Ring};

/// Vertex-reduction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimplifyAlgorithm {
    /// Ramer–Douglas–Peucker with a start-independent ring split.
    Rdp,
    /// Grid snapping followed by duplicate, collinear and ear removal.
    Grid,
}

/// Parameters controlling simplification.
#[derive(Debug, Clone, Copy)]
pub struct SimplifyParams {
    /// Distance tolerance (RDP) or grid spacing (Grid).
    pub epsilon: f64,
    /// Which algorithm to run.
    pub algorithm: SimplifyAlgorithm,
    /// Rings with more vertices than this are returned unchanged by RDP.
    pub max_vertices: usize,
    /// How many vertices ahead the grid pass looks for a ring returning onto itself.
    pub ear_search_window: usize,
}

impl Default for SimplifyParams {
    fn default() -> Self {
        Self {
            epsilon: 0.0,
            algorithm: SimplifyAlgorithm::Rdp,
            max_vertices: 10_000,
            ear_search_window: 9,
        }
    }
}

impl SimplifyParams {
    fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "simplify epsilon must be finite and non-negative, got {}",
                self.epsilon
            ))
            .into());
        }
        if self.max_vertices == 0 {
            return Err(
                OperationError::InvalidInput("max_vertices must be positive".into()).into(),
            );
        }
        Ok(())
    }
}

/// Reduces the vertex count of every ring of an area-typed geometry.
///
/// Polygons simplify each ring; multipolygons and collections recurse. Other
/// kinds come back unchanged. Rings with fewer than four points are left
/// alone, and a ring that was closed on input is closed on output.
///
/// The geometry is consumed and its buffers are reused.
pub struct Simplify {
    geometry: Geometry,
    params: SimplifyParams,
}

impl Simplify {
    /// Creates a new `Simplify` operation with default limits.
    #[must_use]
    pub fn new(geometry: Geometry, epsilon: f64, algorithm: SimplifyAlgorithm) -> Self {
        Self {
            geometry,
            params: SimplifyParams {
                epsilon,
                algorithm,
                ..SimplifyParams::default()
            },
        }
    }

    /// Sets custom parameters, replacing epsilon and algorithm too.
    #[must_use]
    pub fn with_params(mut self, params: SimplifyParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the simplification.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if epsilon is negative or not
    /// finite, or if `max_vertices` is zero.
    pub fn execute(self) -> Result<Geometry> {
        self.params.validate()?;
        Ok(simplify_geometry(self.geometry, &self.params))
    }
}

fn simplify_geometry(geometry: Geometry, params: &SimplifyParams) -> Geometry {
    match geometry {
        Geometry::Polygon(rings) => Geometry::Polygon(simplify_rings(rings, params)),
        Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(
            polygons
                .into_iter()
                .map(|rings| simplify_rings(rings, params))
                .collect(),
        ),
        Geometry::GeometryCollection(members) => Geometry::GeometryCollection(
            members
                .into_iter()
                .map(|g| simplify_geometry(g, params))
                .collect(),
        ),
        other => other,
    }
}

fn simplify_rings(rings: Vec<Ring>, params: &SimplifyParams) -> Vec<Ring> {
    rings
        .into_iter()
        .map(|ring| {
            let was_closed = is_closed(&ring);
            let mut out = simplify_ring(ring, params);
            if was_closed && !is_closed(&out) {
                if let Some(first) = out.first().cloned() {
                    out.push(first);
                }
            }
            out
        })
        .collect()
}

fn simplify_ring(ring: Ring, params: &SimplifyParams) -> Ring {
    if ring.len() < 4 {
        return ring;
    }
    match params.algorithm {
        SimplifyAlgorithm::Rdp => {
            if ring.len() > params.max_vertices {
                tracing::debug!(
                    vertices = ring.len(),
                    limit = params.max_vertices,
                    "Ring too large to simplify, returning it unchanged"
                );
                return ring;
            }
            rdp::rdp_ring(ring, params.epsilon)
        }
        SimplifyAlgorithm::Grid => {
            grid::grid_ring(&ring, params.epsilon, params.ear_search_window)
        }
    }
}

/// Plain RDP over an open polyline; both endpoints are always kept.
pub struct SimplifyLine {
    line: LineString,
    epsilon: f64,
}

impl SimplifyLine {
    /// Creates a new `SimplifyLine` operation.
    #[must_use]
    pub fn new(line: LineString, epsilon: f64) -> Self {
        Self { line, epsilon }
    }

    /// Executes the simplification.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidInput`] if epsilon is negative or not finite.
    pub fn execute(self) -> Result<LineString> {
        SimplifyParams {
            epsilon: self.epsilon,
            ..SimplifyParams::default()
        }
        .validate()?;
        Ok(rdp::rdp(self.line, self.epsilon))
    }
}
