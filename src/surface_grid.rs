// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangular grids of surface patches.

use alloc::vec::Vec;
use core::slice;

use crate::{CubicBezSurface, Point, SurfaceError, PARAM_EPSILON};

/// A rectangular grid of surface patches, stored row-major.
///
/// The grid is refined one point at a time with
/// [`subdivide`](Self::subdivide), which splits the patch under the point
/// and the rows and columns crossing it, so the grid stays rectangular.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfacePatchGrid {
    rows: usize,
    cols: usize,
    cells: Vec<CubicBezSurface>,
}

#[inline]
fn is_interior(t: f64) -> bool {
    t > PARAM_EPSILON && t < 1.0 - PARAM_EPSILON
}

impl SurfacePatchGrid {
    /// Create a grid from its patches in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::EmptyGrid`] if either dimension is zero, and
    /// [`SurfaceError::GridShape`] if there are not exactly `rows * cols`
    /// patches.
    pub fn new(
        rows: usize,
        cols: usize,
        cells: Vec<CubicBezSurface>,
    ) -> Result<Self, SurfaceError> {
        if rows == 0 || cols == 0 {
            return Err(SurfaceError::EmptyGrid);
        }
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(SurfaceError::GridShape {
                rows,
                cols,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Create a grid from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::EmptyGrid`] if there are no rows or the first
    /// row is empty, and [`SurfaceError::RaggedRows`] if the rows differ in
    /// length.
    pub fn from_rows(rows: Vec<Vec<CubicBezSurface>>) -> Result<Self, SurfaceError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(SurfaceError::EmptyGrid);
        }
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SurfaceError::RaggedRows {
                row,
                expected: cols,
                found: bad.len(),
            });
        }
        let n_rows = rows.len();
        Self::new(n_rows, cols, rows.into_iter().flatten().collect())
    }

    /// A grid holding a single patch.
    pub fn from_surface(surface: CubicBezSurface) -> Self {
        Self {
            rows: 1,
            cols: 1,
            cells: alloc::vec![surface],
        }
    }

    /// The number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The patch at `row`, `col`, if both are in range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&CubicBezSurface> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterate over the patches in row-major order.
    #[inline]
    pub fn surfaces(&self) -> slice::Iter<'_, CubicBezSurface> {
        self.cells.iter()
    }

    /// Iterate over the patches in row-major order, with their
    /// `(row, column)` indices.
    pub fn cells_indexed(&self) -> impl Iterator<Item = ((usize, usize), &CubicBezSurface)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(k, cell)| ((k / cols, k % cols), cell))
    }

    /// Does any patch of the grid contain `pt`?
    ///
    /// See [`CubicBezSurface::contains_point`].
    pub fn contains_point(&self, pt: Point) -> bool {
        self.cells.iter().any(|cell| cell.contains_point(pt))
    }

    /// Refine the grid at `pt`.
    ///
    /// The first patch, in row-major order, whose projected parameters for
    /// `pt` are both strictly inside `(PARAM_EPSILON, 1 - PARAM_EPSILON)` is
    /// split into four at those parameters. The other patches of its row are
    /// split at the same `v` and those of its column at the same `u`, which
    /// grows the grid by one row and one column. All other patches are kept
    /// as they are.
    ///
    /// Returns the row and column of the split patch before the split, or
    /// `None`, leaving the grid unchanged, if no patch lies under `pt`.
    pub fn subdivide(&mut self, pt: Point) -> Option<(usize, usize)> {
        let Some((split_row, split_col, u, v)) = self.cells_indexed().find_map(|((i, j), cell)| {
            let (u, v) = cell.project_param(pt);
            (is_interior(u) && is_interior(v)).then_some((i, j, u, v))
        }) else {
            log::trace!("no patch of the {}x{} grid under {pt}", self.rows, self.cols);
            return None;
        };

        let cols = self.cols + 1;
        let mut cells = Vec::with_capacity((self.rows + 1) * cols);
        for (i, row) in self.cells.chunks_exact(self.cols).enumerate() {
            if i == split_row {
                let mut upper = Vec::with_capacity(cols);
                let mut lower = Vec::with_capacity(cols);
                for (j, cell) in row.iter().enumerate() {
                    if j == split_col {
                        let [[top_left, top_right], [bottom_left, bottom_right]] =
                            cell.split_uv(u, v);
                        upper.extend([top_left, top_right]);
                        lower.extend([bottom_left, bottom_right]);
                    } else {
                        let (top, bottom) = cell.split_v(v);
                        upper.push(top);
                        lower.push(bottom);
                    }
                }
                cells.append(&mut upper);
                cells.append(&mut lower);
            } else {
                for (j, cell) in row.iter().enumerate() {
                    if j == split_col {
                        let (left, right) = cell.split_u(u);
                        cells.extend([left, right]);
                    } else {
                        cells.push(*cell);
                    }
                }
            }
        }
        log::debug!(
            "split patch ({split_row}, {split_col}) at ({u}, {v}), grid is now {}x{}",
            self.rows + 1,
            cols
        );
        self.rows += 1;
        self.cols = cols;
        self.cells = cells;
        Some((split_row, split_col))
    }
}

impl<'a> IntoIterator for &'a SurfacePatchGrid {
    type Item = &'a CubicBezSurface;
    type IntoIter = slice::Iter<'a, CubicBezSurface>;

    fn into_iter(self) -> Self::IntoIter {
        self.surfaces()
    }
}
