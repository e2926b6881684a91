use derive_more::{Add, AddAssign, Sub, SubAssign};
use std::ops::{Mul, MulAssign};

/// A 2D cartesian pair, used for pixel-space results of the layout
/// transform.
#[derive(Debug, Default, PartialEq, Clone, Copy, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

#[test]
fn test_point_addition() {
    assert_eq!(
        Point::new(1.0, -3.0) + Point::new(-10.0, 30.0),
        Point::new(-9.0, 27.0)
    );
}

#[test]
fn test_point_subtraction() {
    assert_eq!(
        Point::new(1.0, -3.0) - Point::new(-10.0, 30.0),
        Point::new(11.0, -33.0)
    );
}

#[test]
fn test_point_scaling() {
    assert_eq!(Point::new(1.5, -3.0) * 2.0, Point::new(3.0, -6.0));
    assert_eq!(2.0 * Point::new(1.5, -3.0), Point::new(3.0, -6.0));
}
