//! 2-D city coordinates.

/// An immutable 2-D coordinate.
///
/// Points are created once from external coordinate data and never
/// mutated; tours share them by value (`Copy`). Equality compares
/// coordinates, so the city set handed to the engine must contain
/// distinct coordinates — two cities at the same location would be
/// indistinguishable to the crossover membership test.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    ///
    /// Pure and symmetric; zero iff both coordinates match.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = Point::new(3.5, -1.25);
        assert_eq!(p.distance(&p), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(&b), b.distance(&a));
    }

    #[test]
    fn test_distance_pythagorean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_positive_for_distinct_points() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(1.0, 1.000001);
        assert!(a.distance(&b) > 0.0);
    }
}
