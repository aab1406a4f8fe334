use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use serde::{Deserialize, Serialize};

/// A 2D point on the ground plane of the world. The host world is 3D, but the
/// hex grid only ever lives on the plane where the vertical axis is zero, so
/// we drop that axis entirely. `x` is the world's x axis, and `y` here is the
/// world's _depth_ axis (often called `z` in 3D engines).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance between two points
    pub fn distance_to(self, other: Point2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_point_math() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(4.0, 6.0);
        assert_eq!(a + b, Point2::new(5.0, 8.0));
        assert_eq!(b - a, Point2::new(3.0, 4.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_approx_eq!(a.distance_to(b), 5.0);
        assert_eq!(a.to_string(), "(1, 2)");
    }
}
