// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersections between pairs of curves.
//!
//! Every function reports the intersection parameters on both curves. A
//! parameter is listed for one curve only if it lies strictly inside that
//! curve and within the range (end points included) of the other one, so an
//! intersection at the end point of one curve is reported once, on the
//! curve it crosses.

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::common::{is_zero, quadrant_angle, solve_cubic};
use crate::{CubicBez, Curve, EllipseArc, Line, ParamCurve, Point, GEOM_EPSILON};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The parameters where two curves intersect.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersections {
    /// Parameters on the first curve.
    pub a: SmallVec<[f64; 3]>,
    /// Parameters on the second curve.
    pub b: SmallVec<[f64; 3]>,
}

impl Intersections {
    /// No intersections.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Are both lists empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    /// The same intersections with the roles of the two curves exchanged.
    #[must_use]
    #[inline]
    pub fn swapped(self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    /// Record an intersection at `ta` on `a` and `tb` on `b`, keeping each
    /// parameter only where it is interior to its own curve and inside the
    /// other.
    fn record(&mut self, a: &impl ParamCurve, ta: f64, b: &impl ParamCurve, tb: f64) {
        if a.contains_param_exclusive(ta) && b.contains_param(tb) {
            self.a.push(ta);
        }
        if b.contains_param_exclusive(tb) && a.contains_param(ta) {
            self.b.push(tb);
        }
    }
}

/// Intersect two line segments.
///
/// Parallel lines, lines lying on the same axis direction and zero-length
/// lines have no intersection, even where they overlap.
pub fn line_line(a: &Line, b: &Line) -> Intersections {
    let mut result = Intersections::new();
    if a.is_degenerate() || b.is_degenerate() {
        return result;
    }
    let Some(pt) = carrier_crossing(a, b) else {
        return result;
    };
    result.record(a, a.param_of(pt), b, b.param_of(pt));
    result
}

/// The point where the infinite lines through `a` and `b` cross.
fn carrier_crossing(a: &Line, b: &Line) -> Option<Point> {
    if (a.is_vertical() && b.is_vertical()) || (a.is_horizontal() && b.is_horizontal()) {
        return None;
    }
    if a.is_vertical() {
        let x = a.p0.x;
        let y = if b.is_horizontal() {
            b.p0.y
        } else {
            let (m, c) = b.slope_intercept()?;
            m * x + c
        };
        return Some(Point::new(x, y));
    }
    if b.is_vertical() {
        let x = b.p0.x;
        let y = if a.is_horizontal() {
            a.p0.y
        } else {
            let (m, c) = a.slope_intercept()?;
            m * x + c
        };
        return Some(Point::new(x, y));
    }
    let (ma, ca) = a.slope_intercept()?;
    let (mb, cb) = b.slope_intercept()?;
    if is_zero(ma - mb, GEOM_EPSILON) {
        return None;
    }
    let x = (cb - ca) / (ma - mb);
    let y = if a.is_horizontal() {
        a.p0.y
    } else if b.is_horizontal() {
        b.p0.y
    } else {
        ma * x + ca
    };
    Some(Point::new(x, y))
}

/// Intersect a line segment with an elliptical arc.
///
/// The parameters on the arc are angles. A line touching the ellipse gives
/// a single intersection.
pub fn line_ellipse_arc(line: &Line, arc: &EllipseArc) -> Intersections {
    let mut result = Intersections::new();
    if line.is_degenerate() {
        return result;
    }
    // Work relative to the center, so the ellipse is x²/rx² + y²/ry² = 1.
    let local = *line - arc.center.to_vec2();
    let (rx, ry) = (arc.radii.x, arc.radii.y);
    let mut hits = ArrayVec::<Point, 2>::new();
    if local.is_vertical() {
        let x = local.p0.x;
        let disc = 1.0 - x * x / (rx * rx);
        if is_zero(disc, GEOM_EPSILON) {
            hits.push(Point::new(x, 0.0));
        } else if disc > 0.0 {
            let y = ry * disc.sqrt();
            hits.push(Point::new(x, -y));
            hits.push(Point::new(x, y));
        }
    } else {
        let Some((m, c)) = local.slope_intercept() else {
            return result;
        };
        // Substituting y = m x + c gives a x² + b x + c = 0, normalized by a.
        let qa = ry * ry + rx * rx * m * m;
        let qb = 2.0 * rx * rx * m * c / qa;
        let qc = rx * rx * (c * c - ry * ry) / qa;
        let disc = qb * qb - 4.0 * qc;
        if is_zero(disc, GEOM_EPSILON) {
            let x = -0.5 * qb;
            hits.push(Point::new(x, m * x + c));
        } else if disc > 0.0 {
            let sq = disc.sqrt();
            for x in [0.5 * (-qb - sq), 0.5 * (-qb + sq)] {
                hits.push(Point::new(x, m * x + c));
            }
        }
    }
    for p in hits {
        let angle = quadrant_angle(p.x / rx, p.y / ry);
        result.record(line, local.param_of(p), arc, angle);
    }
    result
}

/// Intersect a line segment with a cubic Bézier.
///
/// A cubic lying entirely on the line has no intersection.
pub fn line_cubic(line: &Line, cubic: &CubicBez) -> Intersections {
    let mut result = Intersections::new();
    let Some(dir) = line.direction().normalize(GEOM_EPSILON) else {
        return result;
    };
    // Signed distances of the control points from the line: the curve
    // crosses the line where this cubic polynomial in t vanishes.
    let dist = cubic.control_points().map(|p| dir.cross(p - line.p0));
    if dist.iter().all(|d| is_zero(*d, GEOM_EPSILON)) {
        return result;
    }
    let [y0, y1, y2, y3] = dist;
    let c3 = -y0 + 3.0 * y1 - 3.0 * y2 + y3;
    let c2 = 3.0 * y0 - 6.0 * y1 + 3.0 * y2;
    let c1 = -3.0 * y0 + 3.0 * y1;
    let c0 = y0;
    for t in solve_cubic(c0, c1, c2, c3) {
        if !cubic.contains_param(t) {
            continue;
        }
        let s = line.param_of(cubic.eval(t));
        result.record(line, s, cubic, t);
    }
    result
}

/// Intersect two curves of any shape.
///
/// Returns `None` for pairs of shapes with no intersection routine: two
/// cubics, two arcs, or a cubic and an arc.
pub fn intersect(a: &Curve, b: &Curve) -> Option<Intersections> {
    match (a, b) {
        (Curve::Line(first), Curve::Line(second)) => Some(line_line(first, second)),
        (Curve::Line(line), Curve::EllipseArc(arc)) => Some(line_ellipse_arc(line, arc)),
        (Curve::EllipseArc(arc), Curve::Line(line)) => {
            Some(line_ellipse_arc(line, arc).swapped())
        }
        (Curve::Line(line), Curve::CubicBez(cubic)) => Some(line_cubic(line, cubic)),
        (Curve::CubicBez(cubic), Curve::Line(line)) => Some(line_cubic(line, cubic).swapped()),
        (Curve::CubicBez(_), Curve::CubicBez(_))
        | (Curve::EllipseArc(_), Curve::EllipseArc(_))
        | (Curve::CubicBez(_), Curve::EllipseArc(_))
        | (Curve::EllipseArc(_), Curve::CubicBez(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::{FRAC_PI_2, PI};

    use crate::intersect::{intersect, line_cubic, line_ellipse_arc, line_line, Intersections};
    use crate::{CubicBez, Curve, EllipseArc, Line, ParamCurve};

    fn assert_params(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        let mut sorted = actual.to_vec();
        sorted.sort_by(f64::total_cmp);
        for (a, e) in sorted.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn line_line_crossing() {
        let horizontal = Line::new((0.0, 50.0), (100.0, 50.0));
        let hits = line_line(&horizontal, &Line::new((50.0, 0.0), (50.0, 100.0)));
        assert_params(&hits.a, &[0.5]);
        assert_params(&hits.b, &[0.5]);
    }

    #[test]
    fn line_line_endpoint() {
        let horizontal = Line::new((0.0, 50.0), (100.0, 50.0));
        // Touching the end of the first line counts on the second line only.
        let hits = line_line(&horizontal, &Line::new((100.0, 0.0), (100.0, 100.0)));
        assert_params(&hits.a, &[]);
        assert_params(&hits.b, &[0.5]);
        let hits = line_line(&horizontal, &Line::new((101.0, 0.0), (101.0, 100.0)));
        assert!(hits.is_empty());
    }

    #[test]
    fn line_line_oblique() {
        let a = Line::new((0.0, 0.0), (10.0, 10.0));
        let b = Line::new((0.0, 10.0), (10.0, 0.0));
        let hits = line_line(&a, &b);
        assert_params(&hits.a, &[0.5]);
        assert_params(&hits.b, &[0.5]);

        let c = Line::new((0.0, 4.0), (8.0, 4.0));
        let hits = line_line(&a, &c);
        assert_params(&hits.a, &[0.4]);
        assert_params(&hits.b, &[0.5]);

        let v = Line::new((2.0, -10.0), (2.0, 10.0));
        let hits = line_line(&v, &a);
        assert_params(&hits.a, &[0.6]);
        assert_params(&hits.b, &[0.2]);
    }

    #[test]
    fn line_line_degenerate() {
        let a = Line::new((0.0, 0.0), (10.0, 10.0));
        assert!(line_line(&a, &Line::new((0.0, 1.0), (10.0, 11.0))).is_empty());
        assert!(line_line(&a, &Line::new((5.0, 5.0), (5.0, 5.0))).is_empty());
        let v = Line::new((1.0, 0.0), (1.0, 10.0));
        assert!(line_line(&v, &Line::new((1.0, 5.0), (1.0, 20.0))).is_empty());
        let h = Line::new((0.0, 1.0), (10.0, 1.0));
        assert!(line_line(&h, &Line::new((5.0, 1.0), (20.0, 1.0))).is_empty());
    }

    #[test]
    fn line_circle() {
        let circle = EllipseArc::new((0.0, 0.0), (5.0, 5.0), 0.0, 0.0, false);
        let line = Line::new((-10.0, 3.0), (10.0, 3.0));
        let hits = line_ellipse_arc(&line, &circle);
        assert_params(&hits.a, &[0.3, 0.7]);
        let theta = 0.6f64.atan2(0.8);
        assert_params(&hits.b, &[theta, PI - theta]);
        for (ta, tb) in hits.a.iter().zip(&hits.b) {
            // Both lists come from the same points, in the same order.
            assert!(line.eval(*ta).is_near(circle.eval(*tb), 1e-9));
        }
    }

    #[test]
    fn line_circle_vertical() {
        let circle = EllipseArc::new((0.0, 0.0), (5.0, 5.0), 0.0, 0.0, false);
        let line = Line::new((3.0, -10.0), (3.0, 10.0));
        let hits = line_ellipse_arc(&line, &circle);
        assert_params(&hits.a, &[0.3, 0.7]);
        let theta = 0.8f64.atan2(0.6);
        assert_params(&hits.b, &[theta, 2.0 * PI - theta]);
    }

    #[test]
    fn line_circle_tangent() {
        let circle = EllipseArc::new((0.0, 0.0), (5.0, 5.0), 1.0, 1.0, false);
        let hits = line_ellipse_arc(&Line::new((-10.0, 5.0), (10.0, 5.0)), &circle);
        assert_params(&hits.a, &[0.5]);
        assert_params(&hits.b, &[FRAC_PI_2]);
        let hits = line_ellipse_arc(&Line::new((5.0, -10.0), (5.0, 10.0)), &circle);
        assert_params(&hits.a, &[0.5]);
        assert_params(&hits.b, &[0.0]);
    }

    #[test]
    fn line_arc_range() {
        // The half of the circle with positive y.
        let arc = EllipseArc::new((0.0, 0.0), (5.0, 5.0), 0.0, PI, false);
        let below = line_ellipse_arc(&Line::new((-10.0, -3.0), (10.0, -3.0)), &arc);
        assert!(below.is_empty());
        let above = line_ellipse_arc(&Line::new((-10.0, 3.0), (10.0, 3.0)), &arc);
        assert_eq!(above.a.len(), 2);
        assert_eq!(above.b.len(), 2);
    }

    #[test]
    fn line_arc_through_zero() {
        // Counterclockwise from π/2 down through 0 to 3π/2: the right half.
        let right = EllipseArc::new((0.0, 0.0), (5.0, 5.0), FRAC_PI_2, 3.0 * FRAC_PI_2, true);
        let line = Line::new((3.0, -10.0), (3.0, 10.0));
        let hits = line_ellipse_arc(&line, &right);
        let theta = 0.8f64.atan2(0.6);
        assert_params(&hits.a, &[0.3, 0.7]);
        assert_params(&hits.b, &[theta, 2.0 * PI - theta]);
        let mirrored = Line::new((-3.0, -10.0), (-3.0, 10.0));
        assert!(line_ellipse_arc(&mirrored, &right).is_empty());

        // The same angles swept clockwise give the left half.
        let left = EllipseArc { ccw: false, ..right };
        assert!(line_ellipse_arc(&line, &left).is_empty());
        let hits = line_ellipse_arc(&mirrored, &left);
        assert_params(&hits.b, &[PI - theta, PI + theta]);
    }

    #[test]
    fn line_ellipse_start_point() {
        let ellipse = EllipseArc::new((10.0, 10.0), (2.0, 1.0), 0.0, 0.0, false);
        let line = Line::new((0.0, 10.0), (20.0, 10.0));
        let hits = line_ellipse_arc(&line, &ellipse);
        // The crossing at angle 0 is the start point of the arc.
        assert_params(&hits.a, &[0.4, 0.6]);
        assert_params(&hits.b, &[PI]);
    }

    #[test]
    fn line_cubic_arch() {
        let arch = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        let line = Line::new((-10.0, 50.0), (110.0, 50.0));
        let hits = line_cubic(&line, &arch);
        let r = (1.0 - 4.0f64 / 6.0).sqrt();
        assert_params(&hits.b, &[0.5 * (1.0 - r), 0.5 * (1.0 + r)]);
        assert_eq!(hits.a.len(), 2);
        for (ta, tb) in hits.a.iter().zip(&hits.b) {
            assert!(line.eval(*ta).is_near(arch.eval(*tb), 1e-6));
        }
    }

    #[test]
    fn line_cubic_three_crossings() {
        let wave = CubicBez::new(
            (0.0, -50.0),
            (100.0 / 3.0, 150.0),
            (200.0 / 3.0, -150.0),
            (100.0, 50.0),
        );
        let line = Line::new((-10.0, 0.0), (110.0, 0.0));
        let hits = line_cubic(&line, &wave);
        assert_eq!(hits.a.len(), 3);
        assert_eq!(hits.b.len(), 3);
        assert!(hits.b.iter().any(|t| (t - 0.5).abs() < 1e-9));
        for (ta, tb) in hits.a.iter().zip(&hits.b) {
            assert!(line.eval(*ta).is_near(wave.eval(*tb), 1e-6));
        }
        let miss = Line::new((-10.0, 200.0), (110.0, 200.0));
        assert!(line_cubic(&miss, &wave).is_empty());
    }

    #[test]
    fn line_cubic_close_crossings() {
        // y(t) = 1000 (t - 0.1)(t - 0.2)(t - 0.3) and x(t) = 100 t.
        let c = CubicBez::new(
            (0.0, -6.0),
            (100.0 / 3.0, -6.0 + 110.0 / 3.0),
            (200.0 / 3.0, -6.0 + 220.0 / 3.0 - 200.0),
            (100.0, 504.0),
        );
        let line = Line::new((-10.0, 0.0), (110.0, 0.0));
        let hits = line_cubic(&line, &c);
        assert_params(&hits.b, &[0.1, 0.2, 0.3]);
        assert_params(&hits.a, &[1.0 / 6.0, 0.25, 1.0 / 3.0]);
    }

    #[test]
    fn line_cubic_end_point() {
        let arch = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        // The arch ends on the line, inside it, and starts before the line begins.
        let line = Line::new((50.0, 0.0), (150.0, 0.0));
        let hits = line_cubic(&line, &arch);
        assert_params(&hits.a, &[0.5]);
        assert_params(&hits.b, &[]);
    }

    #[test]
    fn line_cubic_short_line() {
        let arch = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        // Only reaches the left crossing.
        let line = Line::new((-10.0, 50.0), (50.0, 50.0));
        let hits = line_cubic(&line, &arch);
        assert_eq!(hits.a.len(), 1);
        assert_eq!(hits.b.len(), 1);
        assert!(hits.b[0] < 0.5);
    }

    #[test]
    fn dispatch() {
        let line = Line::new((-10.0, 3.0), (10.0, 3.0));
        let circle = EllipseArc::new((0.0, 0.0), (5.0, 5.0), 0.0, 0.0, false);
        let cubic = CubicBez::new((0.0, 0.0), (1.0, 1.0), (2.0, 1.0), (3.0, 0.0));
        assert_eq!(
            intersect(&Curve::from(circle), &Curve::from(line)),
            Some(line_ellipse_arc(&line, &circle).swapped())
        );
        assert_eq!(
            intersect(&Curve::from(line), &Curve::from(cubic)),
            Some(line_cubic(&line, &cubic))
        );
        assert_eq!(
            intersect(&Curve::from(cubic), &Curve::from(line)).map(Intersections::swapped),
            Some(line_cubic(&line, &cubic))
        );
        assert_eq!(intersect(&Curve::from(cubic), &Curve::from(cubic)), None);
        assert_eq!(intersect(&Curve::from(circle), &Curve::from(circle)), None);
        assert_eq!(intersect(&Curve::from(cubic), &Curve::from(circle)), None);
    }
}
