use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// A coordinate tuple with at least an x and a y component.
///
/// Components beyond y (z, m, ...) live in `extra`. They are carried through
/// every operation that keeps an input vertex, and ignored by all 2D math.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub extra: Vec<f64>,
}

impl Point {
    /// Creates a 2D point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            extra: Vec::new(),
        }
    }

    /// Creates a point with additional components after x and y.
    #[must_use]
    pub fn with_extra(x: f64, y: f64, extra: Vec<f64>) -> Self {
        Self { x, y, extra }
    }

    /// Builds a point from a flat component slice.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] when fewer than two components are given.
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        match coords {
            [x, y, rest @ ..] => Ok(Self::with_extra(*x, *y, rest.to_vec())),
            _ => Err(GeometryError::Degenerate(format!(
                "a point needs at least 2 components, got {}",
                coords.len()
            ))
            .into()),
        }
    }

    /// Number of components, including x and y.
    #[must_use]
    pub fn dim(&self) -> usize {
        2 + self.extra.len()
    }

    /// Returns the component at `index` (0 = x, 1 = y).
    #[must_use]
    pub fn coord(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            i => self.extra.get(i - 2).copied(),
        }
    }

    /// All components as a flat vector.
    #[must_use]
    pub fn coords(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.dim());
        out.push(self.x);
        out.push(self.y);
        out.extend_from_slice(&self.extra);
        out
    }

    /// Projection onto the plane, as used by every algorithm.
    #[must_use]
    pub fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Applies `f` to every component, keeping the dimension.
    #[must_use]
    pub fn map_coords(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
            extra: self.extra.iter().map(|&c| f(c)).collect(),
        }
    }

    /// Euclidean distance in the plane.
    #[must_use]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn from_coords_keeps_extra() {
        let p = Point::from_coords(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(p.dim(), 4);
        assert_eq!(p.coord(2), Some(3.0));
        assert_eq!(p.coord(3), Some(4.0));
        assert_eq!(p.coord(4), None);
        assert_eq!(p.coords(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn from_coords_too_short() {
        assert!(Point::from_coords(&[1.0]).is_err());
        assert!(Point::from_coords(&[]).is_err());
    }

    #[test]
    fn xy_ignores_extra() {
        let p = Point::with_extra(1.0, 2.0, vec![9.0]);
        assert_eq!(p.xy(), Point2::new(1.0, 2.0));
    }

    #[test]
    fn map_coords_rounds_all_components() {
        let p = Point::with_extra(1.4, 2.6, vec![3.5]);
        let r = p.map_coords(f64::round);
        assert_eq!(r.coords(), vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn distance_345() {
        let a = Point::new(0.0, 0.0);
        let b = Point::with_extra(3.0, 4.0, vec![100.0]);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }
}
