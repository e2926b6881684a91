use crate::{hex::coordinates::cubic::Hex, point::Point};
use std::f64::consts::PI;

// Nearest f64 to sqrt(3); f64::sqrt is not const.
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Forward and inverse coefficients of the linear map between cube space
/// and pixel space, plus the angular offset of the first corner in
/// sixths of a turn. `b` is the 2x2 inverse of `f`; only q and r are
/// recovered, s is derived from the zero-sum invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub f: [f64; 4],
    pub b: [f64; 4],
    pub start_angle: f64,
}

impl Orientation {
    /// Hexagons with a vertex at the top.
    pub const POINTY: Self = Self {
        f: [SQRT_3, SQRT_3 / 2.0, 0.0, 3.0 / 2.0],
        b: [SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        start_angle: 0.5,
    };

    /// Hexagons with a flat edge at the top.
    pub const FLAT: Self = Self {
        f: [3.0 / 2.0, 0.0, SQRT_3 / 2.0, SQRT_3],
        b: [2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0],
        start_angle: 0.0,
    };
}

/// An [`Orientation`] made concrete with a per-axis pixel scale and the
/// pixel position of the cube origin. Size components must be non-zero;
/// the inverse transform divides by them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub orientation: Orientation,
    pub size: Point,
    pub origin: Point,
}

impl Layout {
    pub fn new(orientation: Orientation, size: Point, origin: Point) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    /// Pixel position of the center of cell `h`. The s component is
    /// redundant under the zero-sum invariant and goes unused.
    pub fn hex_to_pixel(&self, h: Hex) -> Point {
        let m = &self.orientation;
        let x = (m.f[0] * h.q() + m.f[1] * h.r()) * self.size.x;
        let y = (m.f[2] * h.q() + m.f[3] * h.r()) * self.size.y;
        Point::new(x + self.origin.x, y + self.origin.y)
    }

    /// Fractional cube position under pixel `p`; the exact inverse of
    /// [`Layout::hex_to_pixel`] up to floating error. Apply
    /// [`Hex::round`] to get a cell address.
    pub fn pixel_to_hex(&self, p: Point) -> Hex {
        let m = &self.orientation;
        let pt = Point::new(
            (p.x - self.origin.x) / self.size.x,
            (p.y - self.origin.y) / self.size.y,
        );
        let q = m.b[0] * pt.x + m.b[1] * pt.y;
        let r = m.b[2] * pt.x + m.b[3] * pt.y;
        Hex::axial(q, r)
    }

    /// Offset from a cell center to corner `corner` (0..6, rotational
    /// order).
    pub fn hex_corner_offset(&self, corner: usize) -> Point {
        let angle = 2.0 * PI * (self.orientation.start_angle - corner as f64) / 6.0;
        Point::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// The six pixel corners of cell `h`, in a fixed rotational order.
    pub fn polygon_corners(&self, h: Hex) -> [Point; 6] {
        let center = self.hex_to_pixel(h);
        let mut corners = [Point::default(); 6];
        for (corner, out) in corners.iter_mut().enumerate() {
            *out = center + self.hex_corner_offset(corner);
        }
        corners
    }
}

#[cfg(test)]
use assert_approx_eq::assert_approx_eq;

#[cfg(test)]
fn do_test_round_trip(orientation: Orientation) {
    let layout = Layout::new(orientation, Point::new(10.0, 15.0), Point::new(35.0, 71.0));
    let h = Hex::axial(3.0, 4.0);
    assert_eq!(layout.pixel_to_hex(layout.hex_to_pixel(h)).round(), h);
}

#[test]
fn test_pointy_layout_round_trip() {
    do_test_round_trip(Orientation::POINTY);
}

#[test]
fn test_flat_layout_round_trip() {
    do_test_round_trip(Orientation::FLAT);
}

#[test]
fn test_pointy_hex_to_pixel() {
    let layout = Layout::new(Orientation::POINTY, Point::new(1.0, 1.0), Point::default());
    let p = layout.hex_to_pixel(Hex::axial(1.0, 0.0));
    assert_approx_eq!(p.x, SQRT_3);
    assert_approx_eq!(p.y, 0.0);
    let p = layout.hex_to_pixel(Hex::axial(0.0, 1.0));
    assert_approx_eq!(p.x, SQRT_3 / 2.0);
    assert_approx_eq!(p.y, 1.5);
}

#[test]
fn test_hex_to_pixel_origin_offset() {
    let layout = Layout::new(
        Orientation::FLAT,
        Point::new(10.0, 15.0),
        Point::new(35.0, 71.0),
    );
    let p = layout.hex_to_pixel(Hex::default());
    assert_approx_eq!(p.x, 35.0);
    assert_approx_eq!(p.y, 71.0);
}

#[test]
fn test_pixel_to_hex_is_fractional() {
    let layout = Layout::new(Orientation::POINTY, Point::new(10.0, 10.0), Point::default());
    let h = layout.pixel_to_hex(Point::new(1.0, 2.0));
    assert_approx_eq!(h.q() + h.r() + h.s(), 0.0);
    assert_eq!(h.round(), Hex::default());
}

#[test]
fn test_pointy_corner_offset() {
    // start_angle 0.5 puts the first corner at 30 degrees.
    let layout = Layout::new(Orientation::POINTY, Point::new(2.0, 2.0), Point::default());
    let offset = layout.hex_corner_offset(0);
    assert_approx_eq!(offset.x, SQRT_3);
    assert_approx_eq!(offset.y, 1.0);
}

#[test]
fn test_flat_corner_offset() {
    let layout = Layout::new(Orientation::FLAT, Point::new(2.0, 3.0), Point::default());
    let offset = layout.hex_corner_offset(0);
    assert_approx_eq!(offset.x, 2.0);
    assert_approx_eq!(offset.y, 0.0);
}

#[test]
fn test_polygon_corners() {
    let layout = Layout::new(
        Orientation::POINTY,
        Point::new(10.0, 15.0),
        Point::new(35.0, 71.0),
    );
    let h = Hex::axial(3.0, 4.0);
    let center = layout.hex_to_pixel(h);
    let corners = layout.polygon_corners(h);
    for (corner, point) in corners.iter().enumerate() {
        let offset = layout.hex_corner_offset(corner);
        assert_approx_eq!(point.x, center.x + offset.x);
        assert_approx_eq!(point.y, center.y + offset.y);
        // Every corner sits on the size-scaled ellipse around the center.
        let dx = (point.x - center.x) / layout.size.x;
        let dy = (point.y - center.y) / layout.size.y;
        assert_approx_eq!(dx * dx + dy * dy, 1.0);
    }
}
