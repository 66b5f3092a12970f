// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bicubic Bézier surface patches.

use core::ops::{Add, Sub};

use crate::{
    BoundingBox, CubicBez, ParamCurve, PathEl, Point, SurfaceError, Vec2, MAX_BISECTION_ITERS,
    PARAM_EPSILON,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A bicubic Bézier surface patch.
///
/// The patch has a 4×4 grid of control points `P[i][j]`. The row index `i`
/// runs in the `v` direction, from the top edge (`v = 0`) to the bottom edge
/// (`v = 1`); the column index `j` runs in the `u` direction, from the left
/// edge (`u = 0`) to the right edge (`u = 1`).
///
/// Patches are usually built from their boundary alone, with
/// [`from_boundary`](Self::from_boundary), which fills in the four interior
/// control points as a Coons patch. Splitting a patch rebuilds the pieces
/// the same way, so the interior of a split piece follows its new boundary
/// rather than the exact sub-surface of the original.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezSurface {
    points: [[Point; 4]; 4],
}

/// Blending weight of the start tangent in the cubic Hermite basis.
#[inline]
fn hermite_start(t: f64) -> f64 {
    2.0 * t * t * t - 3.0 * t * t + 1.0
}

impl CubicBezSurface {
    /// Create a patch from its 16 control points, indexed `[row][column]`.
    #[inline]
    pub fn new(points: [[Point; 4]; 4]) -> Self {
        Self { points }
    }

    /// Create a Coons patch from the 12 boundary control points.
    ///
    /// The points go clockwise around the patch from the top-left corner:
    /// `P00 P01 P02 P03 P13 P23 P33 P32 P31 P30 P20 P10`.
    pub fn from_boundary(boundary: [Point; 12]) -> Self {
        let [p00, p01, p02, p03, p13, p23, p33, p32, p31, p30, p20, p10] = boundary;
        let mut points = [
            [p00, p01, p02, p03],
            [p10, Point::ZERO, Point::ZERO, p13],
            [p20, Point::ZERO, Point::ZERO, p23],
            [p30, p31, p32, p33],
        ];
        for i in 1..3 {
            for j in 1..3 {
                let s = i as f64 / 3.0;
                let t = j as f64 / 3.0;
                let v = points[0][j].to_vec2() * (1.0 - s)
                    + points[3][j].to_vec2() * s
                    + points[i][0].to_vec2() * (1.0 - t)
                    + points[i][3].to_vec2() * t
                    - p00.to_vec2() * ((1.0 - t) * (1.0 - s))
                    - p03.to_vec2() * (t * (1.0 - s))
                    - p30.to_vec2() * ((1.0 - t) * s)
                    - p33.to_vec2() * (t * s);
                points[i][j] = v.to_point();
            }
        }
        Self { points }
    }

    /// Create a Coons patch from a slice of boundary points.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::BoundaryLength`] unless the slice holds
    /// exactly 12 points.
    pub fn try_from_boundary(boundary: &[Point]) -> Result<Self, SurfaceError> {
        let boundary = <[Point; 12]>::try_from(boundary).map_err(|_| {
            SurfaceError::BoundaryLength {
                found: boundary.len(),
            }
        })?;
        Ok(Self::from_boundary(boundary))
    }

    /// Create a Coons patch bounded by four cubics.
    ///
    /// `top` and `bottom` run left to right, `left` and `right` top to
    /// bottom. The curves are expected to meet at the corners; where they
    /// don't, the top corners come from `top`, the bottom-right corner from
    /// `right` and the bottom-left corner from `bottom`.
    pub fn from_boundary_curves(
        top: &CubicBez,
        right: &CubicBez,
        bottom: &CubicBez,
        left: &CubicBez,
    ) -> Self {
        Self::from_boundary([
            top.p0, top.p1, top.p2, top.p3, right.p1, right.p2, right.p3, bottom.p2, bottom.p1,
            bottom.p0, left.p2, left.p1,
        ])
    }

    /// The control points, indexed `[row][column]`.
    #[inline]
    pub fn control_points(&self) -> &[[Point; 4]; 4] {
        &self.points
    }

    /// The 12 boundary control points, clockwise from the top-left corner.
    pub fn boundary_points(&self) -> [Point; 12] {
        let p = &self.points;
        [
            p[0][0], p[0][1], p[0][2], p[0][3], p[1][3], p[2][3], p[3][3], p[3][2], p[3][1],
            p[3][0], p[2][0], p[1][0],
        ]
    }

    /// The top edge (`v = 0`), left to right.
    #[inline]
    pub fn top_curve(&self) -> CubicBez {
        let [p0, p1, p2, p3] = self.points[0];
        CubicBez { p0, p1, p2, p3 }
    }

    /// The bottom edge (`v = 1`), left to right.
    #[inline]
    pub fn bottom_curve(&self) -> CubicBez {
        let [p0, p1, p2, p3] = self.points[3];
        CubicBez { p0, p1, p2, p3 }
    }

    /// The left edge (`u = 0`), top to bottom.
    #[inline]
    pub fn left_curve(&self) -> CubicBez {
        self.column(0)
    }

    /// The right edge (`u = 1`), top to bottom.
    #[inline]
    pub fn right_curve(&self) -> CubicBez {
        self.column(3)
    }

    #[inline]
    fn column(&self, j: usize) -> CubicBez {
        let p = &self.points;
        CubicBez::new(p[0][j], p[1][j], p[2][j], p[3][j])
    }

    /// The four edges clockwise: top, right, bottom, left.
    ///
    /// Each edge keeps the direction of its accessor, so the bottom and left
    /// edges run against the clockwise order.
    pub fn boundary_curves(&self) -> [CubicBez; 4] {
        [
            self.top_curve(),
            self.right_curve(),
            self.bottom_curve(),
            self.left_curve(),
        ]
    }

    /// The cross-boundary curve at `u`, from the top edge to the bottom edge.
    ///
    /// Its end points lie on the top and bottom edges at `u`. Its inner
    /// control points are offset from them by the end tangents of the left
    /// and right edges, blended with the cubic Hermite basis, so the curve is
    /// the left edge at `u = 0` and the right edge at `u = 1`.
    pub fn v_curve(&self, u: f64) -> CubicBez {
        let p = &self.points;
        let f1 = hermite_start(u);
        let f2 = 1.0 - f1;
        let start_tangent = (p[1][0] - p[0][0]) * f1 + (p[1][3] - p[0][3]) * f2;
        let end_tangent = (p[3][0] - p[2][0]) * f1 + (p[3][3] - p[2][3]) * f2;
        let start = self.top_curve().eval(u);
        let end = self.bottom_curve().eval(u);
        CubicBez::new(start, start + start_tangent, end - end_tangent, end)
    }

    /// The cross-boundary curve at `v`, from the left edge to the right edge.
    ///
    /// This is [`v_curve`](Self::v_curve) with the roles of rows and columns
    /// exchanged: the top edge at `v = 0`, the bottom edge at `v = 1`.
    pub fn u_curve(&self, v: f64) -> CubicBez {
        let p = &self.points;
        let f1 = hermite_start(v);
        let f2 = 1.0 - f1;
        let start_tangent = (p[0][1] - p[0][0]) * f1 + (p[3][1] - p[3][0]) * f2;
        let end_tangent = (p[0][3] - p[0][2]) * f1 + (p[3][3] - p[3][2]) * f2;
        let start = self.left_curve().eval(v);
        let end = self.right_curve().eval(v);
        CubicBez::new(start, start + start_tangent, end - end_tangent, end)
    }

    /// Estimate the surface parameters `(u, v)` of the point nearest to `pt`.
    ///
    /// Each parameter is found by its own bisection: the bracket starts as
    /// the two opposite edges, and at every step the side whose curve is
    /// farther from `pt` is replaced by the cross-boundary curve at the
    /// midpoint. A search ends when both sides are about equally far (their
    /// squared distances differ by less than 1) or after
    /// [`MAX_BISECTION_ITERS`] steps, and yields the last midpoint.
    ///
    /// Points outside the patch give parameters close to 0 or 1.
    pub fn project_param(&self, pt: Point) -> (f64, f64) {
        let u = Self::bisect(pt, self.left_curve(), self.right_curve(), |u| {
            self.v_curve(u)
        });
        let v = Self::bisect(pt, self.top_curve(), self.bottom_curve(), |v| {
            self.u_curve(v)
        });
        (u, v)
    }

    fn bisect(
        pt: Point,
        mut low_curve: CubicBez,
        mut high_curve: CubicBez,
        cross_curve: impl Fn(f64) -> CubicBez,
    ) -> f64 {
        let mut low = 0.0;
        let mut high = 1.0;
        let mut mid = 0.5;
        for _ in 0..MAX_BISECTION_ITERS {
            mid = 0.5 * (low + high);
            let d_low = low_curve.project(pt).distance_squared(pt);
            let d_high = high_curve.project(pt).distance_squared(pt);
            if (d_low - d_high).abs() < 1.0 {
                return mid;
            }
            if d_low < d_high {
                high = mid;
                high_curve = cross_curve(mid);
            } else {
                low = mid;
                low_curve = cross_curve(mid);
            }
        }
        log::trace!("surface projection of {pt} stopped at {mid} without converging");
        mid
    }

    /// Is `pt` inside the patch?
    ///
    /// The point is inside when its projection onto each of the four edges
    /// falls strictly inside `(PARAM_EPSILON, 1 - PARAM_EPSILON)`.
    pub fn contains_point(&self, pt: Point) -> bool {
        self.boundary_curves().iter().all(|curve| {
            let t = curve.project_param(pt);
            t > PARAM_EPSILON && t < 1.0 - PARAM_EPSILON
        })
    }

    /// Split the patch at `u` into a left and a right patch.
    pub fn split_u(&self, u: f64) -> (Self, Self) {
        let (top_left, top_right) = self.top_curve().split(u);
        let (bottom_left, bottom_right) = self.bottom_curve().split(u);
        let mid = self.v_curve(u);
        (
            Self::from_boundary_curves(&top_left, &mid, &bottom_left, &self.left_curve()),
            Self::from_boundary_curves(&top_right, &self.right_curve(), &bottom_right, &mid),
        )
    }

    /// Split the patch at `v` into a top and a bottom patch.
    pub fn split_v(&self, v: f64) -> (Self, Self) {
        let (left_top, left_bottom) = self.left_curve().split(v);
        let (right_top, right_bottom) = self.right_curve().split(v);
        let mid = self.u_curve(v);
        (
            Self::from_boundary_curves(&self.top_curve(), &right_top, &mid, &left_top),
            Self::from_boundary_curves(&mid, &right_bottom, &self.bottom_curve(), &left_bottom),
        )
    }

    /// Split the patch at `(u, v)` into four patches, indexed
    /// `[row][column]` like the control points: `[[top left, top right],
    /// [bottom left, bottom right]]`.
    pub fn split_uv(&self, u: f64, v: f64) -> [[Self; 2]; 2] {
        let (top_left, top_right) = self.top_curve().split(u);
        let (mid_left, mid_right) = self.u_curve(v).split(u);
        let (bottom_left, bottom_right) = self.bottom_curve().split(u);
        let (left_top, left_bottom) = self.left_curve().split(v);
        let (center_top, center_bottom) = self.v_curve(u).split(v);
        let (right_top, right_bottom) = self.right_curve().split(v);
        [
            [
                Self::from_boundary_curves(&top_left, &center_top, &mid_left, &left_top),
                Self::from_boundary_curves(&top_right, &right_top, &mid_right, &center_top),
            ],
            [
                Self::from_boundary_curves(&mid_left, &center_bottom, &bottom_left, &left_bottom),
                Self::from_boundary_curves(
                    &mid_right,
                    &right_bottom,
                    &bottom_right,
                    &center_bottom,
                ),
            ],
        ]
    }

    /// Evaluate the tensor-product surface at `(u, v)`.
    pub fn eval(&self, u: f64, v: f64) -> Point {
        let [a, b, c, d] = self.points.map(|[p0, p1, p2, p3]| CubicBez { p0, p1, p2, p3 }.eval(u));
        CubicBez::new(a, b, c, d).eval(v)
    }

    /// The bounding box of the control points.
    ///
    /// The patch lies inside the convex hull of its control points, so the
    /// box contains the whole patch, though it need not be tight.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(self.points.iter().flatten().copied())
    }

    /// The outline of the patch as a closed path, clockwise from the
    /// top-left corner.
    pub fn path_elements(&self) -> [PathEl; 6] {
        let p = &self.points;
        [
            PathEl::MoveTo(p[0][0]),
            PathEl::CurveTo(p[0][1], p[0][2], p[0][3]),
            PathEl::CurveTo(p[1][3], p[2][3], p[3][3]),
            PathEl::CurveTo(p[3][2], p[3][1], p[3][0]),
            PathEl::CurveTo(p[2][0], p[1][0], p[0][0]),
            PathEl::ClosePath,
        ]
    }
}

impl Add<Vec2> for CubicBezSurface {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2) -> Self {
        Self::new(self.points.map(|row| row.map(|p| p + v)))
    }
}

impl Sub<Vec2> for CubicBezSurface {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2) -> Self {
        Self::new(self.points.map(|row| row.map(|p| p - v)))
    }
}

#[cfg(test)]
mod tests {
    use crate::{CubicBez, CubicBezSurface, ParamCurve, PathEl, Point, SurfaceError, Vec2};

    /// The flat patch covering `origin + [0, w] × [0, h]` with evenly spaced
    /// control points, so that `eval(u, v) = origin + (u w, v h)`.
    fn rect_patch(origin: Point, w: f64, h: f64) -> CubicBezSurface {
        let mut points = [[Point::ZERO; 4]; 4];
        for (i, row) in points.iter_mut().enumerate() {
            for (j, p) in row.iter_mut().enumerate() {
                *p = origin + Vec2::new(w * j as f64 / 3.0, h * i as f64 / 3.0);
            }
        }
        CubicBezSurface::new(points)
    }

    /// A patch with bulging edges.
    fn pillow() -> CubicBezSurface {
        CubicBezSurface::from_boundary([
            Point::new(0.0, 0.0),
            Point::new(30.0, -10.0),
            Point::new(70.0, -10.0),
            Point::new(100.0, 0.0),
            Point::new(110.0, 30.0),
            Point::new(110.0, 70.0),
            Point::new(100.0, 100.0),
            Point::new(70.0, 110.0),
            Point::new(30.0, 110.0),
            Point::new(0.0, 100.0),
            Point::new(-10.0, 70.0),
            Point::new(-10.0, 30.0),
        ])
    }

    fn assert_same_curve(a: &CubicBez, b: &CubicBez) {
        for (pa, pb) in a.control_points().iter().zip(b.control_points()) {
            assert!(pa.is_near(pb, 1e-9), "{a} vs {b}");
        }
    }

    fn assert_same_patch(a: &CubicBezSurface, b: &CubicBezSurface) {
        for (row_a, row_b) in a.control_points().iter().zip(b.control_points()) {
            for (pa, pb) in row_a.iter().zip(row_b) {
                assert!(pa.is_near(*pb, 1e-9), "{pa} vs {pb}");
            }
        }
    }

    #[test]
    fn coons_reproduces_flat_patch() {
        let flat = rect_patch(Point::new(10.0, 20.0), 90.0, 60.0);
        let rebuilt = CubicBezSurface::from_boundary(flat.boundary_points());
        assert_same_patch(&flat, &rebuilt);
    }

    #[test]
    fn boundary_round_trip() {
        let patch = pillow();
        let rebuilt = CubicBezSurface::from_boundary(patch.boundary_points());
        assert_eq!(patch, rebuilt);
        let [top, right, bottom, left] = patch.boundary_curves();
        let from_curves = CubicBezSurface::from_boundary_curves(&top, &right, &bottom, &left);
        assert_eq!(patch, from_curves);
    }

    #[test]
    fn try_from_boundary() {
        let patch = pillow();
        let boundary = patch.boundary_points();
        assert_eq!(CubicBezSurface::try_from_boundary(&boundary), Ok(patch));
        assert_eq!(
            CubicBezSurface::try_from_boundary(&boundary[..11]),
            Err(SurfaceError::BoundaryLength { found: 11 })
        );
        assert_eq!(
            CubicBezSurface::try_from_boundary(&[]),
            Err(SurfaceError::BoundaryLength { found: 0 })
        );
    }

    #[test]
    fn boundary_curves() {
        let patch = pillow();
        assert_eq!(patch.top_curve().p0, Point::new(0.0, 0.0));
        assert_eq!(patch.top_curve().p3, Point::new(100.0, 0.0));
        assert_eq!(patch.right_curve().p3, Point::new(100.0, 100.0));
        assert_eq!(patch.bottom_curve().p0, Point::new(0.0, 100.0));
        assert_eq!(patch.left_curve().p1, Point::new(-10.0, 30.0));
        // Edges agree with the surface.
        assert!(patch.eval(0.3, 0.0).is_near(patch.top_curve().eval(0.3), 1e-9));
        assert!(patch.eval(1.0, 0.6).is_near(patch.right_curve().eval(0.6), 1e-9));
        assert!(patch.eval(0.0, 0.2).is_near(patch.left_curve().eval(0.2), 1e-9));
    }

    #[test]
    fn cross_curves() {
        let patch = pillow();
        assert_same_curve(&patch.v_curve(0.0), &patch.left_curve());
        assert_same_curve(&patch.v_curve(1.0), &patch.right_curve());
        assert_same_curve(&patch.u_curve(0.0), &patch.top_curve());
        assert_same_curve(&patch.u_curve(1.0), &patch.bottom_curve());
        let mid = patch.v_curve(0.4);
        assert!(mid.p0.is_near(patch.top_curve().eval(0.4), 1e-12));
        assert!(mid.p3.is_near(patch.bottom_curve().eval(0.4), 1e-12));

        let flat = rect_patch(Point::ZERO, 100.0, 100.0);
        let expected = CubicBez::new(
            (25.0, 0.0),
            (25.0, 100.0 / 3.0),
            (25.0, 200.0 / 3.0),
            (25.0, 100.0),
        );
        assert_same_curve(&flat.v_curve(0.25), &expected);
    }

    #[test]
    fn project_flat() {
        let square = rect_patch(Point::ZERO, 100.0, 100.0);
        assert_eq!(square.project_param(Point::new(25.0, 75.0)), (0.25, 0.75));
        assert_eq!(square.project_param(Point::new(50.0, 50.0)), (0.5, 0.5));

        let rect = rect_patch(Point::new(10.0, 20.0), 200.0, 100.0);
        assert_eq!(rect.project_param(Point::new(60.0, 45.0)), (0.25, 0.25));
    }

    #[test]
    fn project_curved() {
        let patch = pillow();
        // Symmetric about both center lines, so the center is found exactly.
        assert_eq!(patch.project_param(Point::new(50.0, 50.0)), (0.5, 0.5));
        for i in 1..10 {
            for j in 1..10 {
                let pt = Point::new(10.0 * i as f64, 10.0 * j as f64);
                let (u, v) = patch.project_param(pt);
                let found = patch.eval(u, v);
                assert!(found.distance(pt) < 2.5, "{pt} projects to ({u}, {v}) at {found}");
            }
        }
    }

    #[test]
    fn project_outside() {
        let square = rect_patch(Point::ZERO, 100.0, 100.0);
        let (u, v) = square.project_param(Point::new(1000.0, 1000.0));
        assert!(u > 0.999 && v > 0.999, "({u}, {v})");
        let (u, v) = square.project_param(Point::new(-500.0, 50.0));
        assert!(u < 0.001, "{u}");
        assert!((v - 0.5).abs() < 0.01, "{v}");
    }

    #[test]
    fn contains() {
        let square = rect_patch(Point::ZERO, 100.0, 100.0);
        assert!(square.contains_point(Point::new(25.0, 75.0)));
        assert!(square.contains_point(Point::new(50.0, 50.0)));
        assert!(!square.contains_point(Point::new(150.0, 50.0)));
        assert!(!square.contains_point(Point::new(-20.0, -20.0)));
        assert!(pillow().contains_point(Point::new(50.0, 50.0)));
        assert!(!pillow().contains_point(Point::new(50.0, 200.0)));
    }

    #[test]
    fn split_flat() {
        let square = rect_patch(Point::ZERO, 100.0, 100.0);
        let (left, right) = square.split_u(0.3);
        assert_same_patch(&left, &rect_patch(Point::ZERO, 30.0, 100.0));
        assert_same_patch(&right, &rect_patch(Point::new(30.0, 0.0), 70.0, 100.0));

        let (top, bottom) = square.split_v(0.6);
        assert_same_patch(&top, &rect_patch(Point::ZERO, 100.0, 60.0));
        assert_same_patch(&bottom, &rect_patch(Point::new(0.0, 60.0), 100.0, 40.0));

        let [[tl, tr], [bl, br]] = square.split_uv(0.5, 0.25);
        assert_same_patch(&tl, &rect_patch(Point::ZERO, 50.0, 25.0));
        assert_same_patch(&tr, &rect_patch(Point::new(50.0, 0.0), 50.0, 25.0));
        assert_same_patch(&bl, &rect_patch(Point::new(0.0, 25.0), 50.0, 75.0));
        assert_same_patch(&br, &rect_patch(Point::new(50.0, 25.0), 50.0, 75.0));
    }

    #[test]
    fn split_keeps_boundary() {
        let patch = pillow();
        let (left, right) = patch.split_u(0.4);
        let (top_left, top_right) = patch.top_curve().split(0.4);
        assert_eq!(left.top_curve(), top_left);
        assert_eq!(right.top_curve(), top_right);
        assert_eq!(left.left_curve(), patch.left_curve());
        assert_eq!(right.right_curve(), patch.right_curve());
        assert_same_curve(&left.right_curve(), &patch.v_curve(0.4));
        assert_same_curve(&right.left_curve(), &patch.v_curve(0.4));

        let (top, bottom) = patch.split_v(0.7);
        assert_same_curve(&top.bottom_curve(), &patch.u_curve(0.7));
        assert_same_curve(&bottom.top_curve(), &patch.u_curve(0.7));
        assert_eq!(top.top_curve(), patch.top_curve());
        assert_eq!(bottom.bottom_curve(), patch.bottom_curve());

        let [[tl, tr], [bl, br]] = patch.split_uv(0.4, 0.7);
        assert_eq!(tl.control_points()[0][0], patch.control_points()[0][0]);
        assert_eq!(tr.control_points()[0][3], patch.control_points()[0][3]);
        assert_eq!(bl.control_points()[3][0], patch.control_points()[3][0]);
        assert_eq!(br.control_points()[3][3], patch.control_points()[3][3]);
        // Neighbors share the inner control points of their common edge.
        assert_eq!(tl.control_points()[1][3], tr.control_points()[1][0]);
        assert_eq!(tl.control_points()[3][1], bl.control_points()[0][1]);
        // The four pieces meet at one point.
        let center = tl.control_points()[3][3];
        assert!(center.is_near(tr.control_points()[3][0], 1e-9));
        assert!(center.is_near(bl.control_points()[0][3], 1e-9));
        assert!(center.is_near(br.control_points()[0][0], 1e-9));
    }

    #[test]
    fn eval_flat() {
        let rect = rect_patch(Point::new(10.0, 20.0), 200.0, 100.0);
        assert!(rect.eval(0.25, 0.5).is_near(Point::new(60.0, 70.0), 1e-9));
        assert_eq!(rect.eval(0.0, 0.0), Point::new(10.0, 20.0));
    }

    #[test]
    fn bbox_and_path() {
        let patch = pillow();
        let bb = patch.bounding_box();
        assert_eq!(bb.min, Point::new(-10.0, -10.0));
        assert_eq!(bb.max, Point::new(110.0, 110.0));

        let path = patch.path_elements();
        assert_eq!(path[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(path[2].end_point(), Some(Point::new(100.0, 100.0)));
        assert_eq!(path[4].end_point(), Some(Point::new(0.0, 0.0)));
        assert_eq!(path[5], PathEl::ClosePath);
    }

    #[test]
    fn translate() {
        let patch = pillow();
        let v = Vec2::new(5.0, -5.0);
        let moved = patch + v;
        assert_eq!(moved.control_points()[1][1], patch.control_points()[1][1] + v);
        assert_same_patch(&(moved - v), &patch);
    }
}
