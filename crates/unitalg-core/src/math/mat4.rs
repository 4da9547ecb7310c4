// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Mul;

use tracing::debug;

use crate::math::{Mat3, Tolerance, Vector3, EPSILON};

/// Column‑major 4×4 matrix backing [`crate::Transform`].
///
/// - Acts on homogeneous column vectors: `(A * B) · v = A · (B · v)`.
/// - Translation occupies the last column; the bottom row of an affine
///   matrix is `[0, 0, 0, 1]`.
///
/// # Examples
/// ```
/// use unitalg_core::math::{Mat4, Vector3};
/// let t = Mat4::translation(5.0, -3.0, 2.0);
/// let p = Vector3::new(2.0, 4.0, -1.0);
/// assert_eq!(t.transform_point(&p).to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Mat4 {
    data: [f64; 16],
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Builds a translation matrix.
    pub const fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                tx, ty, tz, 1.0, // col 3 (translation)
            ],
        }
    }

    /// Builds a non-uniform scale matrix.
    pub const fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // col 0
                0.0, sy, 0.0, 0.0, // col 1
                0.0, 0.0, sz, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major nested arrays.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let mut out = Self::new([0.0; 16]);
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                out.set(r, c, *value);
            }
        }
        out
    }

    /// Creates a matrix from four homogeneous columns.
    pub const fn from_cols(c0: [f64; 4], c1: [f64; 4], c2: [f64; 4], c3: [f64; 4]) -> Self {
        Self::new([
            c0[0], c0[1], c0[2], c0[3], // col 0
            c1[0], c1[1], c1[2], c1[3], // col 1
            c2[0], c2[1], c2[2], c2[3], // col 2
            c3[0], c3[1], c3[2], c3[3], // col 3
        ])
    }

    /// Embeds a 3×3 block into the upper-left corner of the identity.
    pub fn from_mat3(m: &Mat3) -> Self {
        let mut out = Self::identity();
        out.set_upper_left(m);
        out
    }

    /// Returns the matrix as a column‑major array.
    pub const fn to_array(self) -> [f64; 16] {
        self.data
    }

    /// Returns the matrix as row-major nested arrays.
    pub fn to_rows(self) -> [[f64; 4]; 4] {
        let mut rows = [[0.0; 4]; 4];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.at(r, c);
            }
        }
        rows
    }

    /// Element at `(row, col)`.
    pub const fn at(&self, row: usize, col: usize) -> f64 {
        self.data[col * 4 + row]
    }

    /// Overwrites the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[col * 4 + row] = value;
    }

    /// Column `i` as a homogeneous 4-vector.
    pub const fn column(&self, i: usize) -> [f64; 4] {
        [
            self.data[i * 4],
            self.data[i * 4 + 1],
            self.data[i * 4 + 2],
            self.data[i * 4 + 3],
        ]
    }

    /// Upper-left 3×3 block (rotation and scale for affine matrices).
    pub fn upper_left(&self) -> Mat3 {
        let mut out = Mat3::identity();
        for row in 0..3 {
            for col in 0..3 {
                out.set(row, col, self.at(row, col));
            }
        }
        out
    }

    /// Overwrites the upper-left 3×3 block, leaving the rest untouched.
    pub fn set_upper_left(&mut self, m: &Mat3) {
        for row in 0..3 {
            for col in 0..3 {
                self.set(row, col, m.at(row, col));
            }
        }
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Transforms a point (assumes `w = 1`, no perspective divide).
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        let [x, y, z] = point.to_array();
        let w = 1.0;

        let nx = self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z + self.at(0, 3) * w;
        let ny = self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z + self.at(1, 3) * w;
        let nz = self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z + self.at(2, 3) * w;

        Vector3::new(nx, ny, nz)
    }

    /// Transforms a direction vector (ignores translation, `w = 0`).
    pub fn transform_direction(&self, direction: &Vector3) -> Vector3 {
        self.upper_left().transform(direction)
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                out[row * 4 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Determinant via 2×2 sub-determinant expansion.
    pub fn determinant(&self) -> f64 {
        let (s, c) = self.minors();
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// General inverse.
    ///
    /// No validation is performed: a singular matrix yields NaN or infinite
    /// entries. Avoiding singular transforms is the caller's responsibility;
    /// use [`Mat4::try_inverse`] to detect them.
    pub fn inverse(&self) -> Self {
        let a = |r: usize, c: usize| self.at(r, c);
        let (s, c) = self.minors();
        let det = s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0];
        let inv_det = 1.0 / det;

        let rows = [
            [
                a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
                -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
                a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
                -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
            ],
            [
                -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
                a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
                -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
                a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
            ],
            [
                a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
                -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
                a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
                -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
            ],
            [
                -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
                a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
                -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
                a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
            ],
        ];

        let mut out = Self::from_rows(rows);
        for value in &mut out.data {
            *value *= inv_det;
        }
        out
    }

    /// Inverse, or `None` when `|det| <= EPSILON`.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() <= EPSILON || !det.is_finite() {
            debug!(det, "matrix is singular; no inverse");
            return None;
        }
        Some(self.inverse())
    }

    /// Approximate equality under an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.all_close(&self.data, &other.data)
    }

    // 2×2 minors of the top two rows (`s`) and bottom two rows (`c`).
    fn minors(&self) -> ([f64; 6], [f64; 6]) {
        let a = |r: usize, c: usize| self.at(r, c);
        let s = [
            a(0, 0) * a(1, 1) - a(1, 0) * a(0, 1),
            a(0, 0) * a(1, 2) - a(1, 0) * a(0, 2),
            a(0, 0) * a(1, 3) - a(1, 0) * a(0, 3),
            a(0, 1) * a(1, 2) - a(1, 1) * a(0, 2),
            a(0, 1) * a(1, 3) - a(1, 1) * a(0, 3),
            a(0, 2) * a(1, 3) - a(1, 2) * a(0, 3),
        ];
        let c = [
            a(2, 0) * a(3, 1) - a(3, 0) * a(2, 1),
            a(2, 0) * a(3, 2) - a(3, 0) * a(2, 2),
            a(2, 0) * a(3, 3) - a(3, 0) * a(2, 3),
            a(2, 1) * a(3, 2) - a(3, 1) * a(2, 2),
            a(2, 1) * a(3, 3) - a(3, 1) * a(2, 3),
            a(2, 2) * a(3, 3) - a(3, 2) * a(2, 3),
        ];
        (s, c)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 16]> for Mat4 {
    fn from(value: [f64; 16]) -> Self {
        Self { data: value }
    }
}

impl From<Mat3> for Mat4 {
    fn from(value: Mat3) -> Self {
        Self::from_mat3(&value)
    }
}

impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::active())
    }
}

impl Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_round_trip() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(m.column(3), [4.0, 8.0, 12.0, 1.0]);
        let rebuilt = Mat4::from_cols(m.column(0), m.column(1), m.column(2), m.column(3));
        assert_eq!(rebuilt.to_array(), m.to_array());
    }

    #[test]
    fn determinant_of_scale_is_product() {
        assert_eq!(Mat4::scale(2.0, 3.0, -0.5).determinant(), -3.0);
        assert_eq!(Mat4::translation(4.0, 5.0, 6.0).determinant(), 1.0);
    }

    #[test]
    fn singular_matrix_has_no_checked_inverse() {
        assert!(Mat4::scale(1.0, 0.0, 1.0).try_inverse().is_none());
        let t = Mat4::translation(1.0, -2.0, 3.0);
        assert_eq!(t.try_inverse(), Some(Mat4::translation(-1.0, 2.0, -3.0)));
    }
}
