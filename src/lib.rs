// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D curves, curve intersections and bicubic surface patches.
//!
//! Patchkit models three kinds of curve (line segments, cubic Béziers and
//! axis-aligned elliptical arcs), intersects lines with each of them, and
//! builds bicubic Bézier patches that can be located under a point and split
//! there. It is meant as the geometric core of vector graphics and meshing
//! tools; rendering is left to the caller, who gets renderer-agnostic
//! [`PathEl`] descriptions.
//!
//! # Examples
//!
//! Intersecting a line with a circle:
//! ```
//! use patchkit::intersect::line_ellipse_arc;
//! use patchkit::{EllipseArc, Line, ParamCurve, Point};
//!
//! let circle = EllipseArc::new((0.0, 0.0), (5.0, 5.0), 1.0, 1.0, false);
//! let line = Line::new((-10.0, 3.0), (10.0, 3.0));
//! let hits = line_ellipse_arc(&line, &circle);
//! assert_eq!(hits.a.len(), 2);
//! for (t, angle) in hits.a.iter().zip(&hits.b) {
//!     assert!(line.eval(*t).is_near(circle.eval(*angle), 1e-9));
//! }
//! ```
//!
//! Refining a grid of patches at a point:
//!
//! ```
//! use patchkit::{CubicBezSurface, Point, SurfacePatchGrid};
//!
//! let patch = CubicBezSurface::from_boundary([
//!     Point::new(0.0, 0.0),
//!     Point::new(30.0, -10.0),
//!     Point::new(70.0, -10.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(110.0, 30.0),
//!     Point::new(110.0, 70.0),
//!     Point::new(100.0, 100.0),
//!     Point::new(70.0, 110.0),
//!     Point::new(30.0, 110.0),
//!     Point::new(0.0, 100.0),
//!     Point::new(-10.0, 70.0),
//!     Point::new(-10.0, 30.0),
//! ]);
//! let mut grid = SurfacePatchGrid::from_surface(patch);
//! assert_eq!(grid.subdivide(Point::new(40.0, 60.0)), Some((0, 0)));
//! assert_eq!((grid.rows(), grid.cols()), (2, 2));
//! // Points off the surface leave the grid as it is.
//! assert_eq!(grid.subdivide(Point::new(500.0, 500.0)), None);
//! ```
//!
//! # Features
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [`Vec2`] with [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on all value types.
//! - `schemars`: Add support for using patchkit types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Patchkit requires that an allocator is available (i.e. it uses [alloc]).
//!
//! Diagnostics go through the [log][] facade; no logger is installed.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [log]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![cfg_attr(
    test,
    expect(
        clippy::missing_assert_message,
        reason = "unit test names describe their assertions"
    )
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("patchkit requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod bounding_box;
pub mod common;
mod cubicbez;
mod curve;
mod ellipse_arc;
mod error;
pub mod intersect;
mod line;
mod param_curve;
mod path;
mod point;
mod surface;
mod surface_grid;
mod vec2;

pub use crate::bounding_box::BoundingBox;
pub use crate::cubicbez::CubicBez;
pub use crate::curve::Curve;
pub use crate::ellipse_arc::EllipseArc;
pub use crate::error::SurfaceError;
pub use crate::intersect::Intersections;
pub use crate::line::Line;
pub use crate::param_curve::{
    ParamCurve, ParamCurveBounds, COARSE_SAMPLES, GEOM_EPSILON, MAX_BISECTION_ITERS,
    PARAM_EPSILON,
};
pub use crate::path::PathEl;
pub use crate::point::Point;
pub use crate::surface::CubicBezSurface;
pub use crate::surface_grid::SurfacePatchGrid;
pub use crate::vec2::Vec2;
