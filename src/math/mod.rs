pub mod intersect_2d;
pub mod predicates;

/// 2D point type used by every algorithm internally.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global tolerance for equality, collinearity and on-segment decisions.
pub const EPSILON: f64 = 1e-9;

/// Rings whose absolute area falls below this are treated as degenerate.
pub const MIN_AREA: f64 = 1e-8;

/// Twice the signed area of the triangle `(p0, p1, p2)`.
///
/// Positive when `p0 -> p1 -> p2` turns counter-clockwise.
#[must_use]
pub fn signed_area(p0: &Point2, p1: &Point2, p2: &Point2) -> f64 {
    (p0.x - p2.x) * (p1.y - p2.y) - (p1.x - p2.x) * (p0.y - p2.y)
}

/// Tolerant point equality: exact, or relative difference below [`EPSILON`] on both axes.
#[must_use]
pub fn points_equal(a: &Point2, b: &Point2) -> bool {
    if a.x == b.x && a.y == b.y {
        return true;
    }
    axis_close(a.x, b.x) && axis_close(a.y, b.y)
}

fn axis_close(a: f64, b: f64) -> bool {
    if a == b {
        return true;
    }
    (a - b).abs() / (a + b).abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_area_sign() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        let c = Point2::new(0.0, 1.0);
        assert!(signed_area(&a, &b, &c) > 0.0);
        assert!(signed_area(&a, &c, &b) < 0.0);
        assert!(signed_area(&a, &b, &Point2::new(2.0, 0.0)).abs() < EPSILON);
    }

    #[test]
    fn points_equal_relative() {
        assert!(points_equal(&Point2::new(1.0, 2.0), &Point2::new(1.0, 2.0)));
        assert!(points_equal(
            &Point2::new(1000.0, 2000.0),
            &Point2::new(1000.0 + 1e-8, 2000.0)
        ));
        assert!(!points_equal(&Point2::new(1.0, 2.0), &Point2::new(1.001, 2.0)));
    }

    #[test]
    fn points_equal_mixed_zero_axis() {
        // x identical at zero, y differs
        assert!(!points_equal(&Point2::new(0.0, 1.0), &Point2::new(0.0, 1.5)));
        assert!(points_equal(&Point2::new(0.0, 1.0), &Point2::new(0.0, 1.0)));
    }
}
