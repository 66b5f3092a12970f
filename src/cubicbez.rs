// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use core::fmt;
use core::ops::{Add, Sub};

use arrayvec::ArrayVec;

use crate::common::solve_quadratic;
use crate::{
    BoundingBox, ParamCurve, ParamCurveBounds, PathEl, Point, Vec2, COARSE_SAMPLES,
    MAX_BISECTION_ITERS,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// The four control points, in order.
    #[inline]
    pub fn control_points(&self) -> [Point; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Returns a cubic Bézier segment with the end points swapped so that it
    /// points in the opposite direction.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
        }
    }

    /// Split the curve at `t` with De Casteljau's algorithm.
    ///
    /// The first half covers `[0, t]` and the second `[t, 1]` of the original
    /// parameter range; they share the split point.
    #[inline]
    pub fn split(&self, t: f64) -> (Self, Self) {
        let p01 = self.p0.lerp(self.p1, t);
        let p12 = self.p1.lerp(self.p2, t);
        let p23 = self.p2.lerp(self.p3, t);
        let p012 = p01.lerp(p12, t);
        let p123 = p12.lerp(p23, t);
        let p0123 = p012.lerp(p123, t);
        (
            Self::new(self.p0, p01, p012, p0123),
            Self::new(p0123, p123, p23, self.p3),
        )
    }

    /// Parameters in `(0, 1)` where the derivative of one coordinate
    /// vanishes.
    ///
    /// `c0..c3` are that coordinate of the control points. The derivative is
    /// the quadratic `a t² + b t + c`; when `a` vanishes the linear root is
    /// used, and when there are no real roots nothing is returned.
    fn axis_extrema(c0: f64, c1: f64, c2: f64, c3: f64) -> ArrayVec<f64, 2> {
        let a = 3.0 * (-c0 + 3.0 * c1 - 3.0 * c2 + c3);
        let b = 6.0 * (c0 - 2.0 * c1 + c2);
        let c = 3.0 * (c1 - c0);
        solve_quadratic(c, b, a)
            .into_iter()
            .filter(|t| *t > 0.0 && *t < 1.0)
            .collect()
    }

    /// Parameters of the interior extrema on both axes.
    pub fn extrema(&self) -> ArrayVec<f64, 4> {
        let mut result = ArrayVec::new();
        result.extend(Self::axis_extrema(
            self.p0.x, self.p1.x, self.p2.x, self.p3.x,
        ));
        result.extend(Self::axis_extrema(
            self.p0.y, self.p1.y, self.p2.y, self.p3.y,
        ));
        result
    }

    /// Approximate the parameter of the point on the curve closest to `pt`.
    ///
    /// This is a bounded heuristic rather than an exact solve. The curve is
    /// sampled at `COARSE_SAMPLES + 1` evenly spaced parameters; the bracket
    /// around the nearest sample is then narrowed for at most
    /// [`MAX_BISECTION_ITERS`] steps. The search stops early once one end of
    /// the bracket is within a squared distance of 1 of the midpoint, and
    /// returns that end, so the precision is about one unit of the
    /// coordinate system.
    pub fn project_param(&self, pt: Point) -> f64 {
        let n = COARSE_SAMPLES;
        let param = |i: usize| i as f64 / n as f64;
        let dist = |t: f64| self.eval(t).distance_squared(pt);

        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for i in 0..=n {
            let d = dist(param(i));
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }

        let mut t_left = param(best.saturating_sub(1));
        let mut t_right = param((best + 1).min(n));
        let mut d_left = dist(t_left);
        let mut d_right = dist(t_right);
        let mut t_mid = param(best);
        for _ in 0..MAX_BISECTION_ITERS {
            t_mid = 0.5 * (t_left + t_right);
            let d_mid = dist(t_mid);
            let gap_left = (d_left - d_mid).abs();
            let gap_right = (d_right - d_mid).abs();
            if gap_left < 1.0 {
                return t_left;
            }
            if gap_right < 1.0 {
                return t_right;
            }
            if gap_left < gap_right {
                t_right = t_mid;
                d_right = d_mid;
            } else {
                t_left = t_mid;
                d_left = d_mid;
            }
        }
        t_mid
    }

    /// The point on the curve at [`project_param`](Self::project_param).
    #[inline]
    pub fn project(&self, pt: Point) -> Point {
        self.eval(self.project_param(pt))
    }

    /// The curve as a path description: a move to the start point and a
    /// cubic to the end point.
    pub fn path_elements(&self) -> [PathEl; 2] {
        [
            PathEl::MoveTo(self.p0),
            PathEl::CurveTo(self.p1, self.p2, self.p3),
        ]
    }

    /// Is this curve [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.control_points().iter().all(|p| p.is_finite())
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = self.p0.to_vec2() * (mt * mt * mt)
            + (self.p1.to_vec2() * (mt * mt * 3.0)
                + (self.p2.to_vec2() * (mt * 3.0) + self.p3.to_vec2() * t) * t)
                * t;
        v.to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveBounds for CubicBez {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(
            [self.p0, self.p3]
                .into_iter()
                .chain(self.extrema().into_iter().map(|t| self.eval(t))),
        )
    }
}

impl Add<Vec2> for CubicBez {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2) -> Self {
        Self::new(self.p0 + v, self.p1 + v, self.p2 + v, self.p3 + v)
    }
}

impl Sub<Vec2> for CubicBez {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2) -> Self {
        Self::new(self.p0 - v, self.p1 - v, self.p2 - v, self.p3 - v)
    }
}

impl fmt::Display for CubicBez {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CubicBez [")?;
        fmt::Display::fmt(&self.p0, f)?;
        for p in [self.p1, self.p2, self.p3] {
            write!(f, ", ")?;
            fmt::Display::fmt(&p, f)?;
        }
        write!(f, "]")
    }
}
