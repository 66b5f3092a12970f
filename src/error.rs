// Copyright 2024 the Patchkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from constructing surface patches and grids.

/// A surface patch or patch grid could not be built from its inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SurfaceError {
    /// A Coons patch boundary needs exactly twelve points.
    #[error("boundary requires exactly 12 points, found {found}")]
    BoundaryLength {
        /// The number of points supplied.
        found: usize,
    },
    /// A grid needs at least one row and one column.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    /// The number of patches does not match the grid dimensions.
    #[error("a {rows}x{cols} grid cannot hold {found} patches")]
    GridShape {
        /// The requested number of rows.
        rows: usize,
        /// The requested number of columns.
        cols: usize,
        /// The number of patches supplied.
        found: usize,
    },
    /// A row of the grid has a different length from the first row.
    #[error("row {row} has {found} patches, expected {expected}")]
    RaggedRows {
        /// The index of the offending row.
        row: usize,
        /// The length of the first row.
        expected: usize,
        /// The length of the offending row.
        found: usize,
    },
}
