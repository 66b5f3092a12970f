// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use crate::{BoundingBox, Point};

/// Tolerance for geometric degeneracy tests.
///
/// Divisions by quantities smaller than this (determinants, slope
/// differences, leading coefficients) are treated as singular, and
/// parameters within this distance of a range bound are treated as lying
/// on that bound.
pub const GEOM_EPSILON: f64 = 1e-6;

/// Tolerance on surface parameters for a point to count as interior.
///
/// A surface parameter is interior when it lies in
/// `(PARAM_EPSILON, 1 - PARAM_EPSILON)`.
pub const PARAM_EPSILON: f64 = 1e-3;

/// Number of intervals of the coarse scan in closest-point searches.
pub const COARSE_SAMPLES: usize = 8;

/// Upper bound on the iterations of every bisection search.
pub const MAX_BISECTION_ITERS: usize = 15;

/// A curve parametrized by a scalar.
///
/// For lines and Béziers the parameter runs over `[0, 1]`. For elliptical
/// arcs it is the angle in radians, and the valid range is the swept range
/// between the start and end angles.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    fn eval(&self, t: f64) -> Point;

    /// The parameter at the start of the curve.
    #[inline]
    fn start_param(&self) -> f64 {
        0.0
    }

    /// The parameter at the end of the curve.
    #[inline]
    fn end_param(&self) -> f64 {
        1.0
    }

    /// The start point.
    #[inline]
    fn start(&self) -> Point {
        self.eval(self.start_param())
    }

    /// The end point.
    #[inline]
    fn end(&self) -> Point {
        self.eval(self.end_param())
    }

    /// Is `t` a valid parameter of this curve, end points included?
    ///
    /// The bounds are widened by [`GEOM_EPSILON`].
    #[inline]
    fn contains_param(&self, t: f64) -> bool {
        (-GEOM_EPSILON..=1.0 + GEOM_EPSILON).contains(&t)
    }

    /// Is `t` a parameter strictly inside this curve, away from both end points?
    ///
    /// The bounds are narrowed by [`GEOM_EPSILON`].
    #[inline]
    fn contains_param_exclusive(&self, t: f64) -> bool {
        t > GEOM_EPSILON && t < 1.0 - GEOM_EPSILON
    }
}

/// A parametrized curve that reports its axis-aligned bounding box.
pub trait ParamCurveBounds: ParamCurve {
    /// The tight axis-aligned bounding box of the curve.
    fn bounding_box(&self) -> BoundingBox;
}
