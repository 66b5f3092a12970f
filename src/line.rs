// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lines.

use core::fmt;
use core::ops::{Add, Sub};

use crate::common::is_zero;
use crate::{BoundingBox, ParamCurve, ParamCurveBounds, PathEl, Point, Vec2, GEOM_EPSILON};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    /// The line's start point.
    pub p0: Point,
    /// The line's end point.
    pub p1: Point,
}

impl Line {
    /// Create a new line.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// Returns a copy of this `Line` with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline(always)]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    /// The vector from the start point to the end point.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The length of the line.
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().hypot()
    }

    /// The midpoint of the line.
    #[must_use]
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// Is the line shorter than [`GEOM_EPSILON`] on both axes?
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction().is_zero(GEOM_EPSILON)
    }

    /// Is the line vertical, within [`GEOM_EPSILON`]?
    #[inline]
    pub fn is_vertical(&self) -> bool {
        is_zero(self.p1.x - self.p0.x, GEOM_EPSILON)
    }

    /// Is the line horizontal, within [`GEOM_EPSILON`]?
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        is_zero(self.p1.y - self.p0.y, GEOM_EPSILON)
    }

    /// The slope `m` and intercept `c` of the carrier line `y = m x + c`.
    ///
    /// Returns `None` for vertical lines.
    pub fn slope_intercept(&self) -> Option<(f64, f64)> {
        if self.is_vertical() {
            return None;
        }
        let d = self.direction();
        let m = d.y / d.x;
        Some((m, self.p0.y - m * self.p0.x))
    }

    /// The parameter of a point lying on this line.
    ///
    /// The parameter is read off the coordinate with the larger extent, so
    /// it is well conditioned for axis-aligned lines. Degenerate lines map
    /// every point to `0`.
    pub fn param_of(&self, pt: Point) -> f64 {
        let d = self.direction();
        if d.x.abs() >= d.y.abs() {
            if is_zero(d.x, GEOM_EPSILON) {
                return 0.0;
            }
            (pt.x - self.p0.x) / d.x
        } else {
            (pt.y - self.p0.y) / d.y
        }
    }

    /// The line as a path description: a move to the start point and a
    /// line to the end point.
    pub fn path_elements(&self) -> [PathEl; 2] {
        [PathEl::MoveTo(self.p0), PathEl::LineTo(self.p1)]
    }

    /// Is this line [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite()
    }
}

impl ParamCurve for Line {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.p0.lerp(self.p1, t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p1
    }
}

impl ParamCurveBounds for Line {
    #[inline]
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points([self.p0, self.p1])
    }
}

impl Add<Vec2> for Line {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2) -> Self {
        Self::new(self.p0 + v, self.p1 + v)
    }
}

impl Sub<Vec2> for Line {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2) -> Self {
        Self::new(self.p0 - v, self.p1 - v)
    }
}

/// Prints the equation of the carrier line: `x = k`, `y = k` or
/// `y = m x + c`.
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_vertical() {
            write!(f, "x = ")?;
            return fmt::Display::fmt(&self.p0.x, f);
        }
        if self.is_horizontal() {
            write!(f, "y = ")?;
            return fmt::Display::fmt(&self.p0.y, f);
        }
        let d = self.direction();
        let m = d.y / d.x;
        let c = self.p0.y - m * self.p0.x;
        write!(f, "y = ")?;
        fmt::Display::fmt(&m, f)?;
        write!(f, " x + ")?;
        fmt::Display::fmt(&c, f)
    }
}
