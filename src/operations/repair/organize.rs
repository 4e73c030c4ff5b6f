use crate::geometry::{Polygon, Ring};
use crate::math::predicates::point_on_segment;
use crate::math::{Point2, MIN_AREA};
use crate::operations::query::{point_in_polygon, ring_area};

/// Parameters for [`Organize`].
#[derive(Debug, Clone, Copy)]
pub struct OrganizeParams {
    /// Rings with an absolute area below this are set aside as leftovers.
    pub min_area: f64,
}

impl Default for OrganizeParams {
    fn default() -> Self {
        Self { min_area: MIN_AREA }
    }
}

/// Output of [`Organize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Organized {
    /// One polygon per positive ring: the shell first, then its holes.
    pub polygons: Vec<Polygon>,
    /// Degenerate rings, and holes no shell contains.
    pub leftovers: Vec<Ring>,
}

/// Groups a flat bag of rings into shell-and-hole polygons.
///
/// Positive (counter-clockwise) rings become shells. Each negative ring is
/// attached to the smallest shell that contains all of its vertices, where a
/// vertex on the shell's boundary counts as contained. When two containing
/// shells have exactly the same area, the one met first in input order wins.
pub struct Organize {
    rings: Vec<Ring>,
    params: OrganizeParams,
}

struct Shell {
    ring: Ring,
    area: f64,
    holes: Vec<usize>,
}

impl Organize {
    /// Creates a new `Organize` operation over `rings`.
    #[must_use]
    pub fn new(rings: Vec<Ring>) -> Self {
        Self {
            rings,
            params: OrganizeParams::default(),
        }
    }

    /// Sets custom parameters.
    #[must_use]
    pub fn with_params(mut self, params: OrganizeParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the grouping. Degenerate outcomes are reported as leftovers.
    #[must_use]
    pub fn execute(self) -> Organized {
        let mut leftovers = Vec::new();
        let mut shells: Vec<Shell> = Vec::new();
        let mut holes: Vec<Option<Ring>> = Vec::new();

        for ring in self.rings {
            let a = ring_area(&ring);
            if a.abs() < self.params.min_area {
                leftovers.push(ring);
            } else if a > 0.0 {
                shells.push(Shell {
                    ring,
                    area: a,
                    holes: Vec::new(),
                });
            } else {
                holes.push(Some(ring));
            }
        }

        tracing::debug!(
            shells = shells.len(),
            holes = holes.len(),
            degenerate = leftovers.len(),
            "Sorted rings by winding"
        );

        if shells.is_empty() {
            leftovers.extend(holes.into_iter().flatten());
            return Organized {
                polygons: Vec::new(),
                leftovers,
            };
        }

        for (index, hole) in holes.iter().enumerate() {
            let Some(hole) = hole else { continue };
            let mut best: Option<(usize, f64)> = None;
            for (si, shell) in shells.iter().enumerate() {
                if !hole.iter().all(|p| covers(&shell.ring, &p.xy())) {
                    continue;
                }
                if best.is_none_or(|(_, area)| shell.area < area) {
                    best = Some((si, shell.area));
                }
            }
            match best {
                Some((si, _)) => shells[si].holes.push(index),
                None => tracing::trace!(hole = index, "Hole has no containing shell"),
            }
        }

        let mut polygons = Vec::with_capacity(shells.len());
        for shell in shells {
            let mut polygon = Vec::with_capacity(1 + shell.holes.len());
            polygon.push(shell.ring);
            for index in shell.holes {
                if let Some(hole) = holes[index].take() {
                    polygon.push(hole);
                }
            }
            polygons.push(polygon);
        }
        leftovers.extend(holes.into_iter().flatten());

        Organized {
            polygons,
            leftovers,
        }
    }
}

/// Inside the ring, or on one of its edges.
fn covers(ring: &Ring, p: &Point2) -> bool {
    if point_in_polygon(std::slice::from_ref(ring), p) {
        return true;
    }
    let n = ring.len();
    (0..n).any(|i| point_on_segment(p, &ring[i].xy(), &ring[(i + 1) % n].xy()))
}
