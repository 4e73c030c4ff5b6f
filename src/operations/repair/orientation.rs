use crate::geometry::Polygon;
use crate::math::predicates::{ring_in_ring, ring_orientation, Orientation};

/// Rewinds the rings of a polygon so nesting levels alternate direction.
///
/// A ring contained by an even number of the polygon's other rings ends up
/// counter-clockwise, by an odd number clockwise. The outermost ring is
/// therefore always counter-clockwise.
///
/// The polygon is taken by value and its ring buffers are reversed in place.
pub struct FixOrientation {
    polygon: Polygon,
}

impl FixOrientation {
    /// Creates a new `FixOrientation` operation.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the operation, returning the same rings with corrected winding.
    #[must_use]
    pub fn execute(self) -> Polygon {
        let mut polygon = self.polygon;
        let orientations: Vec<Orientation> = polygon.iter().map(|r| ring_orientation(r)).collect();

        let mut flip = vec![false; polygon.len()];
        for (i, inner) in polygon.iter().enumerate() {
            let depth = polygon
                .iter()
                .enumerate()
                .filter(|&(j, outer)| j != i && ring_in_ring(outer, inner))
                .count();
            flip[i] = match orientations[i] {
                Orientation::CounterClockwise => depth % 2 == 1,
                Orientation::Clockwise => depth % 2 == 0,
                Orientation::Degenerate => false,
            };
        }

        for (ring, flip) in polygon.iter_mut().zip(flip) {
            if flip {
                ring.reverse();
            }
        }
        polygon
    }
}
