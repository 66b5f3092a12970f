// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

use core::f64::consts::{PI, TAU};

use arrayvec::ArrayVec;

use crate::GEOM_EPSILON;

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("patchkit requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn acos(self) -> Self => acos;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cbrt(self) -> Self => cbrt;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn cos(self) -> Self => cos;
    fn sin(self) -> Self => sin;
    fn sqrt(self) -> Self => sqrt;
}

/// Is `x` zero within `tolerance`?
#[inline]
pub fn is_zero(x: f64, tolerance: f64) -> bool {
    x.abs() < tolerance
}

/// Are `a` and `b` equal within `tolerance`?
#[inline]
pub fn is_equal_float(a: f64, b: f64, tolerance: f64) -> bool {
    is_zero(a - b, tolerance)
}

/// Wrap an angle in radians into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle % TAU;
    let wrapped = if wrapped < 0.0 { wrapped + TAU } else { wrapped };
    // Adding TAU to a tiny negative remainder rounds up to TAU itself.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// The angle of the vector `(x, y)` measured from the +X axis towards +Y,
/// in `[0, 2π)`.
///
/// The quadrant is taken from the signs of the components, so the result is
/// well defined on the axes as well.
pub fn quadrant_angle(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    let th = y.atan2(x);
    if th < 0.0 {
        wrap_angle(th + TAU)
    } else {
        wrap_angle(th)
    }
}

/// Find real roots of quadratic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² = 0.
///
/// This function tries to be quite numerically robust. If the equation
/// is nearly linear, it will return the root ignoring the quadratic term;
/// the other root might be out of representable range. In the degenerate
/// case where all coefficients are zero, so that all values of x satisfy
/// the equation, a single `0.0` is returned.
pub fn solve_quadratic(c0: f64, c1: f64, c2: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let sc0 = c0 * c2.recip();
    let sc1 = c1 * c2.recip();
    if !sc0.is_finite() || !sc1.is_finite() {
        // c2 is zero or very small, treat as linear eqn
        let root = -c0 / c1;
        if root.is_finite() {
            result.push(root);
        } else if c0 == 0.0 && c1 == 0.0 {
            // Degenerate case
            result.push(0.0);
        }
        return result;
    }
    let arg = sc1 * sc1 - 4. * sc0;
    let root1 = if !arg.is_finite() {
        // Likely, calculation of sc1 * sc1 overflowed. Find one root
        // using sc1 x + x² = 0, other root as sc0 / root1.
        -sc1
    } else {
        if arg < 0.0 {
            return result;
        } else if arg == 0.0 {
            result.push(-0.5 * sc1);
            return result;
        }
        // See https://math.stackexchange.com/questions/866331
        -0.5 * (sc1 + arg.sqrt().copysign(sc1))
    };
    let root2 = sc0 / root1;
    if root2.is_finite() {
        // Sort just to be friendly and make results deterministic.
        if root2 > root1 {
            result.push(root1);
            result.push(root2);
        } else {
            result.push(root2);
            result.push(root1);
        }
    } else {
        result.push(root1);
    }
    result
}

/// Find real roots of cubic equation.
///
/// Return values of x for which c0 + c1 x + c2 x² + c3 x³ = 0.
///
/// When `c3` vanishes (below [`GEOM_EPSILON`]) the equation is solved as a
/// quadratic. Otherwise it is normalized and reduced to the depressed form
/// `s³ + p s + q = 0` with `x = s - c2 / (3 c3)`, and the sign of the
/// discriminant `(q/2)² + (p/3)³` picks the closed form:
///
/// * positive: one real root, by Cardano's formula;
/// * negative: three distinct real roots, by the trigonometric method;
/// * zero (within [`GEOM_EPSILON`] relative to its two terms): a double
///   root and a simple root, or a triple root when they coincide.
///
/// Roots are not sorted, and a repeated root is reported once per distinct
/// value.
pub fn solve_cubic(c0: f64, c1: f64, c2: f64, c3: f64) -> ArrayVec<f64, 3> {
    let mut result = ArrayVec::new();
    if is_zero(c3, GEOM_EPSILON) {
        result.extend(solve_quadratic(c0, c1, c2));
        return result;
    }
    const ONETHIRD: f64 = 1. / 3.;
    let a = c2 / c3;
    let b = c1 / c3;
    let c = c0 / c3;
    let shift = a * ONETHIRD;
    let p = b - a * a * ONETHIRD;
    let q = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) * (1.0 / 27.0);
    let half_q = 0.5 * q;
    let third_p = p * ONETHIRD;
    let half_q2 = half_q * half_q;
    let third_p3 = third_p * third_p * third_p;
    let disc = half_q2 + third_p3;
    // The discriminant is compared against its own terms, which scale with
    // the sixth power of the root spacing.
    if disc.abs() <= GEOM_EPSILON * half_q2.max(third_p3.abs()) {
        let u = (-half_q).cbrt();
        if is_zero(u, GEOM_EPSILON) {
            result.push(-shift);
        } else {
            result.push(2.0 * u - shift);
            result.push(-u - shift);
        }
    } else if disc > 0.0 {
        let sq = disc.sqrt();
        let s = (-half_q + sq).cbrt() + (-half_q - sq).cbrt();
        result.push(s - shift);
    } else {
        // p < 0 here, since the discriminant is negative.
        let r = 2.0 * (-third_p).sqrt();
        let arg = (3.0 * q / (2.0 * p)) * (-3.0 / p).sqrt();
        let phi = arg.clamp(-1.0, 1.0).acos() * ONETHIRD;
        for k in 0..3 {
            let s = r * (phi - 2.0 * PI * f64::from(k) * ONETHIRD).cos();
            result.push(s - shift);
        }
    }
    result
}
