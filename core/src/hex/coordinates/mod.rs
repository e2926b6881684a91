use std::ops::{Add, AddAssign, Mul, MulAssign};

pub mod cubic;
pub mod direction;

pub trait HexagonalVector:
    Sized + Clone + Copy + Add<Output = Self> + AddAssign + Mul<f64, Output = Self> + MulAssign<f64>
{
}
