// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Mul;

use crate::math::{Tolerance, Vector3};

/// Column‑major 3×3 matrix used for rotation and basis-change blocks.
///
/// Acts on column vectors: `m.transform(v)` computes `M · v`.
#[derive(Debug, Copy, Clone)]
pub struct Mat3 {
    data: [f64; 9],
}

impl Mat3 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, // col 1
                0.0, 0.0, 1.0, // col 2
            ],
        }
    }

    /// Creates a matrix from column-major array data.
    pub const fn new(data: [f64; 9]) -> Self {
        Self { data }
    }

    /// Creates a matrix from row-major nested arrays.
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self::new([
            rows[0][0], rows[1][0], rows[2][0], // col 0
            rows[0][1], rows[1][1], rows[2][1], // col 1
            rows[0][2], rows[1][2], rows[2][2], // col 2
        ])
    }

    /// Creates a matrix whose columns are the given vectors.
    pub const fn from_cols(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self::new([
            c0.x(), c0.y(), c0.z(), // col 0
            c1.x(), c1.y(), c1.z(), // col 1
            c2.x(), c2.y(), c2.z(), // col 2
        ])
    }

    /// Diagonal matrix with `v` on the diagonal.
    pub const fn diagonal(v: Vector3) -> Self {
        Self::new([
            v.x(), 0.0, 0.0, // col 0
            0.0, v.y(), 0.0, // col 1
            0.0, 0.0, v.z(), // col 2
        ])
    }

    /// Returns the matrix as a column‑major array.
    pub const fn to_array(self) -> [f64; 9] {
        self.data
    }

    /// Returns the matrix as row-major nested arrays.
    pub fn to_rows(self) -> [[f64; 3]; 3] {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, value) in row.iter_mut().enumerate() {
                *value = self.at(r, c);
            }
        }
        rows
    }

    /// Element at `(row, col)`.
    pub const fn at(&self, row: usize, col: usize) -> f64 {
        self.data[col * 3 + row]
    }

    /// Overwrites the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[col * 3 + row] = value;
    }

    /// Column `i` as a vector.
    pub const fn column(&self, i: usize) -> Vector3 {
        Vector3::new(self.data[i * 3], self.data[i * 3 + 1], self.data[i * 3 + 2])
    }

    /// Multiplies with another matrix (`self * rhs`).
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                let mut sum = 0.0;
                for k in 0..3 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 3 + row] = sum;
            }
        }
        Self::new(out)
    }

    /// Computes `M · v`.
    pub fn transform(&self, v: &Vector3) -> Vector3 {
        let [x, y, z] = v.to_array();
        Vector3::new(
            self.at(0, 0) * x + self.at(0, 1) * y + self.at(0, 2) * z,
            self.at(1, 0) * x + self.at(1, 1) * y + self.at(1, 2) * z,
            self.at(2, 0) * x + self.at(2, 1) * y + self.at(2, 2) * z,
        )
    }

    /// Computes `M · diag(s)`: column `i` is multiplied by `s[i]`.
    pub fn scale_columns(&self, s: &Vector3) -> Self {
        let mut out = self.data;
        for col in 0..3 {
            for row in 0..3 {
                out[col * 3 + row] *= s[col];
            }
        }
        Self::new(out)
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = self.at(row, col);
            }
        }
        Self::new(out)
    }

    /// Determinant.
    pub fn determinant(&self) -> f64 {
        let c0 = self.column(0);
        let c1 = self.column(1);
        let c2 = self.column(2);
        c0.dot(&c1.cross(&c2))
    }

    /// Approximate equality under an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.all_close(&self.data, &other.data)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f64; 3]; 3]> for Mat3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl PartialEq for Mat3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::active())
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vector3> for Mat3 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.transform(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_is_row_major() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.at(0, 1), 2.0);
        assert_eq!(m.at(1, 0), 4.0);
        assert_eq!(m.column(2).to_array(), [3.0, 6.0, 9.0]);
        assert_eq!(m.to_rows()[2], [7.0, 8.0, 9.0]);
    }

    #[test]
    fn determinant_of_permutation_is_signed() {
        let swap_yz = Mat3::from_cols(Vector3::UNIT_X, Vector3::UNIT_Z, Vector3::UNIT_Y);
        assert_eq!(swap_yz.determinant(), -1.0);
        assert_eq!(Mat3::identity().determinant(), 1.0);
    }

    #[test]
    fn scale_columns_matches_diagonal_product() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        let s = Vector3::new(2.0, -1.0, 0.5);
        assert_eq!(
            m.scale_columns(&s).to_array(),
            m.multiply(&Mat3::diagonal(s)).to_array()
        );
    }
}
