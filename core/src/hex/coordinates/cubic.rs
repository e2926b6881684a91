use crate::hex::coordinates::{
    direction::{HexagonalDirection, NUM_DIRECTIONS},
    HexagonalVector,
};
use derive_more::{Add, AddAssign, Sub, SubAssign};
use std::ops::{Mul, MulAssign};
use thiserror::Error;

/// Error returned when cube coordinates do not lie on the `q + r + s = 0`
/// plane.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid cube coordinates q = {q}, r = {r}, s = {s}: q + r + s must round to zero")]
pub struct InvalidCoordinate {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

/// A cube-coordinate hex cell, or a fractional position between cells.
///
/// Components are `f64` so that interpolation can move through cell
/// interiors; [`Hex::round`] maps a fractional position back to the
/// nearest whole cell. Equality is componentwise, so round interpolated
/// values before comparing them to cell addresses.
#[derive(Debug, Default, PartialEq, Clone, Copy, Add, AddAssign, Sub, SubAssign)]
pub struct Hex {
    q: f64,
    r: f64,
    s: f64,
}

impl Hex {
    /// Builds a hex from all three cube components, validating that their
    /// sum rounds to zero. Fractional components are fine as long as the
    /// triple still sums to zero.
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, InvalidCoordinate> {
        if (q + r + s).round() != 0.0 {
            return Err(InvalidCoordinate { q, r, s });
        }
        Ok(Self { q, r, s })
    }

    /// Builds a hex from axial q and r, deriving `s = -q - r`. Cannot
    /// fail since the derived component restores the zero sum.
    pub fn axial(q: f64, r: f64) -> Self {
        Self { q, r, s: -q - r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// 60° counterclockwise rotation about the origin.
    pub fn rotate_left(self) -> Self {
        Self {
            q: -self.s,
            r: -self.q,
            s: -self.r,
        }
    }

    /// 60° clockwise rotation about the origin.
    pub fn rotate_right(self) -> Self {
        Self {
            q: -self.r,
            r: -self.s,
            s: -self.q,
        }
    }

    /// Grid distance from the origin. An integer for whole-cell hexes.
    pub fn len(self) -> f64 {
        (f64::abs(self.q) + f64::abs(self.r) + f64::abs(self.s)) / 2.0
    }

    /// Minimum number of cell-to-cell steps between two hexes.
    pub fn distance(self, other: Self) -> f64 {
        (self - other).len()
    }

    /// Maps a fractional position to the nearest whole cell.
    ///
    /// Each component is rounded independently, then the one that moved
    /// furthest is recomputed from the other two so the result lands back
    /// on the `q + r + s = 0` plane. The comparison operators are load
    /// bearing: q is corrected only when strictly largest on both counts,
    /// and an r/s tie corrects s.
    pub fn round(self) -> Self {
        let qi = self.q.round();
        let ri = self.r.round();
        let si = self.s.round();
        let qdiff = f64::abs(qi - self.q);
        let rdiff = f64::abs(ri - self.r);
        let sdiff = f64::abs(si - self.s);
        if qdiff > rdiff && qdiff > sdiff {
            Self {
                q: -ri - si,
                r: ri,
                s: si,
            }
        } else if rdiff > sdiff {
            Self {
                q: qi,
                r: -qi - si,
                s: si,
            }
        } else {
            Self {
                q: qi,
                r: ri,
                s: -qi - ri,
            }
        }
    }

    /// Componentwise linear interpolation toward `other`. The result is
    /// generally fractional; [`Hex::round`] it before using it as a cell
    /// address.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            q: self.q * (1.0 - t) + other.q * t,
            r: self.r * (1.0 - t) + other.r * t,
            s: self.s * (1.0 - t) + other.s * t,
        }
    }

    /// The ordered sequence of cells approximating the straight segment
    /// from `self` to `other`, endpoints included; `distance + 1` cells.
    ///
    /// Both endpoints are nudged off the cell edges first so samples that
    /// would land exactly between two cells round the same way every
    /// time. The nudge is a fixed symmetry-breaking bias and changing it
    /// changes which side such lines favor.
    pub fn linedraw(self, other: Self) -> Vec<Self> {
        let n = self.distance(other).round() as usize;
        let a_nudge = Self {
            q: self.q + 1e-6,
            r: self.r + 1e-6,
            s: self.s - 2e-6,
        };
        let b_nudge = Self {
            q: other.q + 1e-6,
            r: other.r + 1e-6,
            s: other.s - 2e-6,
        };
        let step = 1.0 / usize::max(n, 1) as f64;
        (0..=n)
            .map(|i| a_nudge.lerp(b_nudge, step * i as f64).round())
            .collect()
    }
}

impl Mul<f64> for Hex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            q: self.q * rhs,
            r: self.r * rhs,
            s: self.s * rhs,
        }
    }
}

impl MulAssign<f64> for Hex {
    fn mul_assign(&mut self, rhs: f64) {
        self.q *= rhs;
        self.r *= rhs;
        self.s *= rhs;
    }
}

impl Mul<Hex> for f64 {
    type Output = Hex;

    fn mul(self, rhs: Hex) -> Self::Output {
        rhs * self
    }
}

impl HexagonalVector for Hex {}

// Don't use a constructor and lazy_static so that the compiler can
// actually optimize the use of directions.
const DIRECTIONS: [Hex; NUM_DIRECTIONS] = [
    Hex {
        q: 1.0,
        r: 0.0,
        s: -1.0,
    },
    Hex {
        q: 1.0,
        r: -1.0,
        s: 0.0,
    },
    Hex {
        q: 0.0,
        r: -1.0,
        s: 1.0,
    },
    Hex {
        q: -1.0,
        r: 0.0,
        s: 1.0,
    },
    Hex {
        q: -1.0,
        r: 1.0,
        s: 0.0,
    },
    Hex {
        q: 0.0,
        r: 1.0,
        s: -1.0,
    },
];

const DIAGONALS: [Hex; NUM_DIRECTIONS] = [
    Hex {
        q: 2.0,
        r: -1.0,
        s: -1.0,
    },
    Hex {
        q: 1.0,
        r: -2.0,
        s: 1.0,
    },
    Hex {
        q: -1.0,
        r: -1.0,
        s: 2.0,
    },
    Hex {
        q: -2.0,
        r: 1.0,
        s: 1.0,
    },
    Hex {
        q: -1.0,
        r: 2.0,
        s: -1.0,
    },
    Hex {
        q: 1.0,
        r: 1.0,
        s: -2.0,
    },
];

impl HexagonalDirection for Hex {
    fn direction(direction: usize) -> Self {
        DIRECTIONS[direction]
    }

    fn diagonal(direction: usize) -> Self {
        DIAGONALS[direction]
    }
}

#[cfg(test)]
fn hex(q: f64, r: f64, s: f64) -> Hex {
    Hex::new(q, r, s).unwrap()
}

#[test]
fn test_new_hex() {
    assert_eq!(
        hex(1.0, 2.0, -3.0),
        Hex {
            q: 1.0,
            r: 2.0,
            s: -3.0
        }
    )
}

#[test]
fn test_new_invalid_hex() {
    assert_eq!(
        Hex::new(1.0, 1.0, 1.0),
        Err(InvalidCoordinate {
            q: 1.0,
            r: 1.0,
            s: 1.0
        })
    );
}

#[test]
fn test_new_fractional_hex() {
    // Fractional components are legitimate while the sum still rounds to
    // zero.
    assert!(Hex::new(0.5, -0.25, -0.25).is_ok());
    assert!(Hex::new(0.5, 0.5, 0.5).is_err());
}

#[test]
fn test_axial_hex() {
    assert_eq!(Hex::axial(1.0, -3.0), hex(1.0, -3.0, 2.0));
}

#[test]
fn test_hex_addition() {
    assert_eq!(
        hex(1.0, -3.0, 2.0) + hex(3.0, -7.0, 4.0),
        hex(4.0, -10.0, 6.0)
    );
}

#[test]
fn test_hex_subtraction() {
    assert_eq!(
        hex(1.0, -3.0, 2.0) - hex(3.0, -7.0, 4.0),
        hex(-2.0, 4.0, -2.0)
    );
}

#[test]
fn test_hex_scaling() {
    assert_eq!(hex(1.0, -3.0, 2.0) * 2.0, hex(2.0, -6.0, 4.0));
    assert_eq!(2.0 * hex(1.0, -3.0, 2.0), hex(2.0, -6.0, 4.0));
}

#[test]
fn test_hex_rotate_left() {
    assert_eq!(hex(1.0, -3.0, 2.0).rotate_left(), hex(-2.0, -1.0, 3.0));
}

#[test]
fn test_hex_rotate_right() {
    assert_eq!(hex(1.0, -3.0, 2.0).rotate_right(), hex(3.0, -2.0, -1.0));
}

#[test]
fn test_hex_rotations_are_inverse() {
    let h = hex(1.0, -3.0, 2.0);
    assert_eq!(h.rotate_left().rotate_right(), h);
    assert_eq!(h.rotate_right().rotate_left(), h);
}

#[test]
fn test_hex_six_rotations_are_identity() {
    let h = hex(1.0, -3.0, 2.0);
    let mut rotated = h;
    for _ in 0..NUM_DIRECTIONS {
        rotated = rotated.rotate_left();
    }
    assert_eq!(rotated, h);
}

#[test]
fn test_hex_direction() {
    assert_eq!(Hex::direction(2), hex(0.0, -1.0, 1.0));
}

#[test]
fn test_hex_directions_are_valid() {
    for v in DIRECTIONS.iter().chain(DIAGONALS.iter()) {
        Hex::new(v.q(), v.r(), v.s()).unwrap();
    }
}

#[test]
fn test_hex_directions_are_unique() {
    for dir1 in 0..NUM_DIRECTIONS - 1 {
        for dir2 in dir1 + 1..NUM_DIRECTIONS {
            assert_ne!(DIRECTIONS[dir1], DIRECTIONS[dir2]);
            assert_ne!(DIAGONALS[dir1], DIAGONALS[dir2]);
        }
    }
}

#[test]
fn test_hex_directions_have_opposite() {
    for dir in 0..NUM_DIRECTIONS / 2 {
        assert_eq!(
            DIRECTIONS[dir] + DIRECTIONS[dir + NUM_DIRECTIONS / 2],
            Hex::default()
        );
        assert_eq!(
            DIAGONALS[dir] + DIAGONALS[dir + NUM_DIRECTIONS / 2],
            Hex::default()
        );
    }
}

#[test]
fn test_hex_neighbor() {
    assert_eq!(hex(1.0, -2.0, 1.0).neighbor(2), hex(1.0, -3.0, 2.0));
}

#[test]
fn test_hex_diagonal_neighbor() {
    assert_eq!(
        hex(1.0, -2.0, 1.0).diagonal_neighbor(3),
        hex(-1.0, -1.0, 2.0)
    );
}

#[test]
fn test_hex_len() {
    assert_eq!(hex(3.0, -7.0, 4.0).len(), 7.0);
    assert_eq!(Hex::default().len(), 0.0);
}

#[test]
fn test_hex_distance() {
    let a = hex(3.0, -7.0, 4.0);
    let b = Hex::default();
    assert_eq!(a.distance(b), 7.0);
    assert_eq!(b.distance(a), 7.0);
    assert_eq!(a.distance(a), 0.0);
}

#[test]
fn test_hex_add_sub_are_inverse() {
    let a = hex(1.0, -3.0, 2.0);
    let b = hex(3.0, -7.0, 4.0);
    assert_eq!((a + b) - b, a);
}

#[test]
fn test_hex_round_midpoint() {
    assert_eq!(
        Hex::default()
            .lerp(hex(10.0, -20.0, 10.0), 0.5)
            .round(),
        hex(5.0, -10.0, 5.0)
    );
}

#[test]
fn test_hex_round_boundary() {
    let a = Hex::default();
    let b = hex(1.0, -1.0, 0.0);
    assert_eq!(a.lerp(b, 0.499).round(), a.round());
    assert_eq!(a.lerp(b, 0.501).round(), b.round());
}

#[test]
fn test_hex_round_blend() {
    let a = Hex::default();
    let b = hex(1.0, -1.0, 0.0);
    let c = hex(0.0, -1.0, 1.0);
    assert_eq!(
        hex(
            a.q() * 0.4 + b.q() * 0.3 + c.q() * 0.3,
            a.r() * 0.4 + b.r() * 0.3 + c.r() * 0.3,
            a.s() * 0.4 + b.s() * 0.3 + c.s() * 0.3,
        )
        .round(),
        a.round()
    );
    assert_eq!(
        hex(
            a.q() * 0.3 + b.q() * 0.3 + c.q() * 0.4,
            a.r() * 0.3 + b.r() * 0.3 + c.r() * 0.4,
            a.s() * 0.3 + b.s() * 0.3 + c.s() * 0.4,
        )
        .round(),
        c.round()
    );
}

#[test]
fn test_hex_lerp() {
    assert_eq!(
        Hex::default().lerp(hex(10.0, -20.0, 10.0), 0.5),
        hex(5.0, -10.0, 5.0)
    );
}

#[test]
fn test_hex_linedraw() {
    assert_eq!(
        Hex::default().linedraw(hex(1.0, -5.0, 4.0)),
        vec![
            hex(0.0, 0.0, 0.0),
            hex(0.0, -1.0, 1.0),
            hex(0.0, -2.0, 2.0),
            hex(1.0, -3.0, 2.0),
            hex(1.0, -4.0, 3.0),
            hex(1.0, -5.0, 4.0),
        ]
    );
}

#[test]
fn test_hex_linedraw_cell_count() {
    let a = hex(-2.0, 3.0, -1.0);
    let b = hex(4.0, -6.0, 2.0);
    assert_eq!(a.linedraw(b).len(), a.distance(b) as usize + 1);
}

#[test]
fn test_hex_linedraw_degenerate() {
    let a = hex(2.0, -3.0, 1.0);
    assert_eq!(a.linedraw(a), vec![a]);
}
