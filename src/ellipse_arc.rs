// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned elliptical arcs.

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::fmt;
use core::ops::{Add, Sub};

use crate::common::{is_zero, wrap_angle};
use crate::{BoundingBox, ParamCurve, ParamCurveBounds, PathEl, Point, Vec2, GEOM_EPSILON};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An arc of an axis-aligned ellipse.
///
/// The parameter of the arc is the angle in radians: the point at angle `t`
/// is `center + (rx cos t, ry sin t)`. The arc runs from `start_angle` to
/// `end_angle`, with increasing angle when `ccw` is false and decreasing
/// angle when it is true. Angles are interpreted modulo 2π, and equal start
/// and end angles describe a full turn.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EllipseArc {
    /// The center of the ellipse.
    pub center: Point,
    /// The radii along the x and y axes, both positive.
    pub radii: Vec2,
    /// The angle of the start point, in radians.
    pub start_angle: f64,
    /// The angle of the end point, in radians.
    pub end_angle: f64,
    /// Whether the arc sweeps with decreasing angle.
    pub ccw: bool,
}

impl EllipseArc {
    /// Create a new arc.
    #[inline]
    pub fn new(
        center: impl Into<Point>,
        radii: impl Into<Vec2>,
        start_angle: f64,
        end_angle: f64,
        ccw: bool,
    ) -> Self {
        Self {
            center: center.into(),
            radii: radii.into(),
            start_angle,
            end_angle,
            ccw,
        }
    }

    /// The point at `angle` on the ellipse with the given center and radii.
    #[inline]
    pub(crate) fn sample(center: Point, radii: Vec2, angle: f64) -> Point {
        center + Vec2::new(radii.x * angle.cos(), radii.y * angle.sin())
    }

    /// The circular arc through three points, from `a` through `b` to `c`.
    ///
    /// Returns `None` when the points are collinear (or coincide), since no
    /// circle passes through them.
    pub fn from_three_points(a: Point, b: Point, c: Point) -> Option<Self> {
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if is_zero(d, GEOM_EPSILON) {
            log::trace!("no circle through collinear points {a}, {b}, {c}");
            return None;
        }
        let a2 = a.to_vec2().hypot2();
        let b2 = b.to_vec2().hypot2();
        let c2 = c.to_vec2().hypot2();
        let center = Point::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        );
        let radius = a.distance(center);

        let angle_of = |p: Point| (p - center).atan2();
        let theta_a = angle_of(a);
        let theta_b = angle_of(b);
        let theta_c = angle_of(c);
        // The arc from `a` to `c` either stays inside the angular interval
        // between them, or leaves it through 0.
        let inside = theta_b >= theta_a.min(theta_c) && theta_b <= theta_a.max(theta_c);
        let ccw = if inside {
            theta_a > theta_c
        } else {
            theta_a < theta_c
        };
        Some(Self {
            center,
            radii: Vec2::new(radius, radius),
            start_angle: theta_a,
            end_angle: theta_c,
            ccw,
        })
    }

    /// The swept angle, in `(0, 2π]`.
    pub fn sweep(&self) -> f64 {
        let start = wrap_angle(self.start_angle);
        let end = wrap_angle(self.end_angle);
        if self.ccw {
            if start > end {
                start - end
            } else {
                TAU - (end - start)
            }
        } else if start < end {
            end - start
        } else {
            TAU - (start - end)
        }
    }

    /// How far `angle` lies from the start angle, along the sweep direction,
    /// in `[0, 2π)`.
    #[inline]
    fn offset_from_start(&self, angle: f64) -> f64 {
        if self.ccw {
            wrap_angle(self.start_angle - angle)
        } else {
            wrap_angle(angle - self.start_angle)
        }
    }

    /// Is this a circular arc?
    #[inline]
    pub fn is_circular(&self) -> bool {
        is_zero(self.radii.x - self.radii.y, GEOM_EPSILON)
    }

    /// The bounding box of the whole ellipse.
    #[inline]
    pub fn full_bounding_box(&self) -> BoundingBox {
        BoundingBox::new(self.center - self.radii, self.center + self.radii)
    }

    /// The arc as a path description: a move to the start point and the arc
    /// itself.
    pub fn path_elements(&self) -> [PathEl; 2] {
        [
            PathEl::MoveTo(self.start()),
            PathEl::EllipticalArc {
                center: self.center,
                radii: self.radii,
                start_angle: self.start_angle,
                end_angle: self.end_angle,
                ccw: self.ccw,
            },
        ]
    }
}

impl ParamCurve for EllipseArc {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        Self::sample(self.center, self.radii, t)
    }

    #[inline]
    fn start_param(&self) -> f64 {
        self.start_angle
    }

    #[inline]
    fn end_param(&self) -> f64 {
        self.end_angle
    }

    /// Is `angle` within the swept range, end angles included?
    ///
    /// The test works modulo 2π, in the sweep direction, with a tolerance of
    /// [`GEOM_EPSILON`].
    fn contains_param(&self, angle: f64) -> bool {
        let offset = self.offset_from_start(angle);
        offset <= self.sweep() + GEOM_EPSILON || offset >= TAU - GEOM_EPSILON
    }

    /// Is `angle` strictly inside the swept range, away from both end angles?
    fn contains_param_exclusive(&self, angle: f64) -> bool {
        let offset = self.offset_from_start(angle);
        offset > GEOM_EPSILON && offset < self.sweep() - GEOM_EPSILON
    }
}

impl ParamCurveBounds for EllipseArc {
    /// The bounding box of the arc.
    ///
    /// Arcs sweeping at least 3π/2 get the box of the full ellipse, and arcs
    /// sweeping less than π/2 the box of their end points. Otherwise the box
    /// covers the end points and every axis extreme (at angles 0, π/2, π and
    /// 3π/2) that the arc passes through.
    fn bounding_box(&self) -> BoundingBox {
        let sweep = self.sweep();
        if sweep >= 3.0 * FRAC_PI_2 {
            return self.full_bounding_box();
        }
        let ends = BoundingBox::from_points([self.start(), self.end()]);
        if sweep < FRAC_PI_2 {
            return ends;
        }
        [0.0, FRAC_PI_2, PI, 3.0 * FRAC_PI_2]
            .into_iter()
            .filter(|angle| self.contains_param(*angle))
            .fold(ends, |bbox, angle| bbox.union_pt(self.eval(angle)))
    }
}

impl Add<Vec2> for EllipseArc {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2) -> Self {
        Self {
            center: self.center + v,
            ..self
        }
    }
}

impl Sub<Vec2> for EllipseArc {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2) -> Self {
        Self {
            center: self.center - v,
            ..self
        }
    }
}

impl fmt::Display for EllipseArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EllipseArc center ")?;
        fmt::Display::fmt(&self.center, f)?;
        write!(f, " radii (")?;
        fmt::Display::fmt(&self.radii.x, f)?;
        write!(f, ", ")?;
        fmt::Display::fmt(&self.radii.y, f)?;
        write!(f, ") from ")?;
        fmt::Display::fmt(&self.start_angle, f)?;
        write!(f, " to ")?;
        fmt::Display::fmt(&self.end_angle, f)?;
        write!(f, "{}", if self.ccw { " ccw" } else { " cw" })
    }
}
