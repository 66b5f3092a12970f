// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of curve shapes.

use core::fmt;
use core::ops::{Add, Sub};

use crate::{
    BoundingBox, CubicBez, EllipseArc, Line, ParamCurve, ParamCurveBounds, PathEl, Point, Vec2,
};

/// A curve of one of the supported shapes.
///
/// The parameter of each variant follows its own type: `[0, 1]` for lines
/// and cubics, the angle for arcs.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// A line segment.
    Line(Line),
    /// A cubic Bézier segment.
    CubicBez(CubicBez),
    /// An elliptical arc.
    EllipseArc(EllipseArc),
}

impl Curve {
    /// The curve as a path description.
    pub fn path_elements(&self) -> [PathEl; 2] {
        match self {
            Self::Line(line) => line.path_elements(),
            Self::CubicBez(c) => c.path_elements(),
            Self::EllipseArc(arc) => arc.path_elements(),
        }
    }
}

impl ParamCurve for Curve {
    fn eval(&self, t: f64) -> Point {
        match self {
            Self::Line(line) => line.eval(t),
            Self::CubicBez(c) => c.eval(t),
            Self::EllipseArc(arc) => arc.eval(t),
        }
    }

    fn start_param(&self) -> f64 {
        match self {
            Self::EllipseArc(arc) => arc.start_param(),
            Self::Line(_) | Self::CubicBez(_) => 0.0,
        }
    }

    fn end_param(&self) -> f64 {
        match self {
            Self::EllipseArc(arc) => arc.end_param(),
            Self::Line(_) | Self::CubicBez(_) => 1.0,
        }
    }

    fn contains_param(&self, t: f64) -> bool {
        match self {
            Self::Line(line) => line.contains_param(t),
            Self::CubicBez(c) => c.contains_param(t),
            Self::EllipseArc(arc) => arc.contains_param(t),
        }
    }

    fn contains_param_exclusive(&self, t: f64) -> bool {
        match self {
            Self::Line(line) => line.contains_param_exclusive(t),
            Self::CubicBez(c) => c.contains_param_exclusive(t),
            Self::EllipseArc(arc) => arc.contains_param_exclusive(t),
        }
    }
}

impl ParamCurveBounds for Curve {
    fn bounding_box(&self) -> BoundingBox {
        match self {
            Self::Line(line) => line.bounding_box(),
            Self::CubicBez(c) => c.bounding_box(),
            Self::EllipseArc(arc) => arc.bounding_box(),
        }
    }
}

impl From<Line> for Curve {
    #[inline]
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<CubicBez> for Curve {
    #[inline]
    fn from(c: CubicBez) -> Self {
        Self::CubicBez(c)
    }
}

impl From<EllipseArc> for Curve {
    #[inline]
    fn from(arc: EllipseArc) -> Self {
        Self::EllipseArc(arc)
    }
}

impl Add<Vec2> for Curve {
    type Output = Self;

    fn add(self, v: Vec2) -> Self {
        match self {
            Self::Line(line) => Self::Line(line + v),
            Self::CubicBez(c) => Self::CubicBez(c + v),
            Self::EllipseArc(arc) => Self::EllipseArc(arc + v),
        }
    }
}

impl Sub<Vec2> for Curve {
    type Output = Self;

    fn sub(self, v: Vec2) -> Self {
        match self {
            Self::Line(line) => Self::Line(line - v),
            Self::CubicBez(c) => Self::CubicBez(c - v),
            Self::EllipseArc(arc) => Self::EllipseArc(arc - v),
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(line) => fmt::Display::fmt(line, f),
            Self::CubicBez(c) => fmt::Display::fmt(c, f),
            Self::EllipseArc(arc) => fmt::Display::fmt(arc, f),
        }
    }
}
