// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes.

use core::fmt;
use core::ops::{Add, Sub};

use crate::{Point, Vec2};

/// An axis-aligned bounding box.
///
/// Once non-empty, `min <= max` holds componentwise. The canonical empty box,
/// [`BoundingBox::EMPTY`], has `min = (+∞, +∞)` and `max = (−∞, −∞)`, which
/// makes it the identity for [`union`](BoundingBox::union).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// The minimum corner.
    pub min: Point,
    /// The maximum corner.
    pub max: Point,
}

impl Default for BoundingBox {
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl BoundingBox {
    /// The empty box, containing nothing.
    pub const EMPTY: Self = Self {
        min: Point::new(f64::INFINITY, f64::INFINITY),
        max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    };

    /// A new box from its minimum and maximum corners.
    #[inline]
    pub fn new(min: impl Into<Point>, max: impl Into<Point>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// The smallest box containing all of `points`.
    ///
    /// Returns [`BoundingBox::EMPTY`] for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        points
            .into_iter()
            .fold(Self::EMPTY, Self::union_pt)
    }

    /// Does this box contain nothing?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// The width of the box.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// The height of the box.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// The length of the diagonal from `min` to `max`.
    #[inline]
    pub fn size(&self) -> f64 {
        self.min.distance(self.max)
    }

    /// The center point of the box.
    #[inline]
    pub fn center(&self) -> Point {
        self.min.midpoint(self.max)
    }

    /// Half of the width and height.
    #[inline]
    fn half_extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// The smallest box enclosing both boxes.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow this box in place to enclose `other`.
    #[inline]
    pub fn merge(&mut self, other: Self) {
        *self = self.union(other);
    }

    /// The smallest box enclosing this box and one point.
    #[inline]
    #[must_use]
    pub fn union_pt(self, pt: Point) -> Self {
        Self {
            min: self.min.min(pt),
            max: self.max.max(pt),
        }
    }

    /// Grow this box in place to enclose `pt`.
    #[inline]
    pub fn add_point(&mut self, pt: Point) {
        *self = self.union_pt(pt);
    }

    /// Is `pt` inside the box, boundary included?
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min.x && pt.x <= self.max.x && pt.y >= self.min.y && pt.y <= self.max.y
    }

    /// Do the two boxes overlap?
    ///
    /// This is a separating-axis test: the boxes overlap when, on both axes,
    /// the distance between their centers is no more than the sum of their
    /// half-extents. Boxes that merely touch overlap. An empty box overlaps
    /// nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let dist = (self.center() - other.center()).abs();
        let separation = self.half_extents() + other.half_extents();
        dist.x <= separation.x && dist.y <= separation.y
    }
}

impl Add<Vec2> for BoundingBox {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2) -> Self {
        Self::new(self.min + v, self.max + v)
    }
}

impl Sub<Vec2> for BoundingBox {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2) -> Self {
        Self::new(self.min - v, self.max - v)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Center {} [min: {} -> max: {}]", self.center(), self.min, self.max)
    }
}
