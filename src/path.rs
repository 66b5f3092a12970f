// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-agnostic path descriptions.

use crate::{Point, Vec2};

/// The element of a path description, in absolute coordinates.
///
/// Curves and surface patches describe their outline as a short sequence of
/// these; turning the sequence into SVG path data, canvas calls or display
/// lists is left to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a cubic bezier using the two control points, ending at the third point.
    CurveTo(Point, Point, Point),
    /// Draw an axis-aligned elliptical arc, starting at the point at
    /// `start_angle` (which must be the current location).
    EllipticalArc {
        /// Center of the ellipse.
        center: Point,
        /// Radii along the x and y axes.
        radii: Vec2,
        /// Angle of the start point, in radians.
        start_angle: f64,
        /// Angle of the end point, in radians.
        end_angle: f64,
        /// Whether the arc sweeps with decreasing angle.
        ccw: bool,
    },
    /// Close off the path.
    ClosePath,
}

impl PathEl {
    /// The point this element ends at, if it has one.
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::CurveTo(_, _, p) => Some(p),
            Self::EllipticalArc {
                center,
                radii,
                end_angle,
                ..
            } => Some(crate::EllipseArc::sample(center, radii, end_angle)),
            Self::ClosePath => None,
        }
    }
}
