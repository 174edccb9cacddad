// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/geometry.rs
//
// Points, sizes, rectangles and affine transforms in display units.

use std::fmt;

/// A location in floating-point display units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width and height. May be negative until a rectangle is standardized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle given by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Rectangle spanning two opposite corners, in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x - a.x, b.y - a.y).standardized()
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x.min(self.origin.x + self.size.width)
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y.min(self.origin.y + self.size.height)
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x.max(self.origin.x + self.size.width)
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y.max(self.origin.y + self.size.height)
    }

    pub fn width(&self) -> f64 {
        self.size.width.abs()
    }

    pub fn height(&self) -> f64 {
        self.size.height.abs()
    }

    /// Same rectangle with non-negative width and height.
    pub fn standardized(&self) -> Self {
        Self::new(self.min_x(), self.min_y(), self.width(), self.height())
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.origin.x + dx,
            self.origin.y + dy,
            self.size.width,
            self.size.height,
        )
    }

    /// Overlap of two rectangles, or `None` if they share no area.
    ///
    /// Rectangles that only touch along an edge or corner do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.min_x().max(other.min_x());
        let top = self.min_y().max(other.min_y());
        let right = self.max_x().min(other.max_x());
        let bottom = self.max_y().min(other.max_y());

        if left < right && top < bottom {
            Some(Rect::new(left, top, right - left, bottom - top))
        } else {
            None
        }
    }

    /// Smallest rectangle with integral edges that encloses this one.
    ///
    /// Origin is floored and the far edges are ceiled, so the result never
    /// loses a partially covered pixel.
    pub fn integral(&self) -> Self {
        let left = self.min_x().floor();
        let top = self.min_y().floor();
        let right = self.max_x().ceil();
        let bottom = self.max_y().ceil();
        Self::new(left, top, right - left, bottom - top)
    }

    /// Bounding box of the four transformed corners.
    pub fn apply(&self, transform: &AffineTransform) -> Self {
        let corners = [
            Point::new(self.min_x(), self.min_y()),
            Point::new(self.max_x(), self.min_y()),
            Point::new(self.min_x(), self.max_y()),
            Point::new(self.max_x(), self.max_y()),
        ]
        .map(|p| transform.apply_point(p));

        let (mut left, mut top) = (f64::INFINITY, f64::INFINITY);
        let (mut right, mut bottom) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in corners {
            left = left.min(p.x);
            top = top.min(p.y);
            right = right.max(p.x);
            bottom = bottom.max(p.y);
        }

        Self::new(left, top, right - left, bottom - top)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.origin, self.size)
    }
}

/// 2D affine transform mapping `(x, y)` to
/// `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    pub fn translate(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    /// Transform that applies `self` first and `next` second.
    pub fn then(&self, next: &AffineTransform) -> Self {
        Self {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            tx: self.tx * next.a + self.ty * next.c + next.tx,
            ty: self.tx * next.b + self.ty * next.d + next.ty,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, or `None` if this one is singular.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Self {
            a,
            b,
            c,
            d,
            tx: -(self.tx * a + self.ty * c),
            ty: -(self.tx * b + self.ty * d),
        })
    }

    pub fn apply_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}
