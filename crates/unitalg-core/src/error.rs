// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error type shared by the fallible constructors in this crate.

use thiserror::Error;

/// Failures surfaced by component and matrix constructors.
///
/// Every variant describes bad caller input; nothing here is transient and
/// nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A component slice had the wrong number of elements.
    #[error("size mismatch: expected {expected} components, got {got}")]
    SizeMismatch {
        /// Number of components the constructor requires.
        expected: usize,
        /// Number of components that were supplied.
        got: usize,
    },
    /// A nested row list was neither 3x3 nor 4x4 (or was ragged).
    #[error("shape mismatch: expected a 3x3 or 4x4 matrix, got {rows}x{cols}")]
    ShapeMismatch {
        /// Number of rows supplied.
        rows: usize,
        /// Length of the first row that broke the square shape.
        cols: usize,
    },
    /// A 4x4 matrix whose bottom row is not `[0, 0, 0, 1]`.
    #[error("matrix is not affine: bottom row must be [0, 0, 0, 1]")]
    NonAffine,
    /// A rotation axis with (near) zero magnitude.
    #[error("degenerate rotation axis: magnitude must exceed EPSILON")]
    DegenerateAxis,
}
