// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::Mul;

use tracing::trace;

use crate::error::MathError;
use crate::frame::CoordinateFrame;
use crate::math::{Mat3, Mat4, Quaternion, Tolerance, Vector3};

/// Affine transform backed by a column-major 4×4 matrix.
///
/// Conventions:
/// - Logically `T = Translate(t) * Rotate(q) * Scale(s)` acting on column
///   vectors, so `(A * B) * v == A * (B * v)`: `B` applies first.
/// - The bottom row is always `[0, 0, 0, 1]`.
/// - `translation`, `rotation` and `local_scale` each read and write only
///   their own block; setting one preserves the others.
///
/// Limitations:
/// - [`Transform::local_scale`] is always non-negative. A mirrored (negative)
///   scale cannot be told apart from an extra 180° rotation, so
///   [`Transform::rotation`] of a mirrored transform is not a proper rotation
///   and should not be trusted. [`Transform::trs`] still builds the exact
///   matrix for negative scales.
#[derive(Debug, Copy, Clone, Default)]
pub struct Transform {
    mat: Mat4,
}

impl Transform {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        mat: Mat4::identity(),
    };

    /// Returns the identity transform.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wraps a 4×4 matrix after checking its bottom row.
    ///
    /// # Errors
    /// [`MathError::NonAffine`] when the bottom row is not `[0, 0, 0, 1]`
    /// under the active tolerance.
    pub fn from_mat4(mat: Mat4) -> Result<Self, MathError> {
        let bottom = [mat.at(3, 0), mat.at(3, 1), mat.at(3, 2), mat.at(3, 3)];
        if !Tolerance::active().all_close(&bottom, &[0.0, 0.0, 0.0, 1.0]) {
            return Err(MathError::NonAffine);
        }
        Ok(Self { mat })
    }

    /// Builds a transform from row-major nested rows.
    ///
    /// Accepts a 4×4 matrix, or a 3×3 matrix which is embedded into the
    /// upper-left block of the identity.
    ///
    /// # Errors
    /// [`MathError::ShapeMismatch`] for any other (or a ragged) shape, and
    /// [`MathError::NonAffine`] for a 4×4 matrix with a bad bottom row.
    ///
    /// # Examples
    /// ```
    /// use unitalg_core::{Transform, Vector3};
    /// # fn main() -> Result<(), unitalg_core::MathError> {
    /// let t = Transform::from_rows(&[
    ///     [1.0, 0.0, 0.0, 2.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ])?;
    /// assert_eq!(t * Vector3::ZERO, Vector3::new(2.0, 0.0, 0.0));
    /// assert!(Transform::from_rows(&[[1.0, 0.0], [0.0, 1.0]]).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MathError> {
        let n = rows.len();
        let first_cols = rows.first().map_or(0, |r| r.as_ref().len());
        if n != 3 && n != 4 {
            return Err(MathError::ShapeMismatch {
                rows: n,
                cols: first_cols,
            });
        }
        if let Some(bad) = rows.iter().map(|r| r.as_ref().len()).find(|len| *len != n) {
            return Err(MathError::ShapeMismatch { rows: n, cols: bad });
        }

        if n == 3 {
            let mut m = Mat3::identity();
            for (r, row) in rows.iter().enumerate() {
                for (c, value) in row.as_ref().iter().enumerate() {
                    m.set(r, c, *value);
                }
            }
            return Ok(Self::from(m));
        }

        let mut m = Mat4::identity();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.as_ref().iter().enumerate() {
                m.set(r, c, *value);
            }
        }
        Self::from_mat4(m)
    }

    /// Underlying matrix.
    pub const fn mat(&self) -> Mat4 {
        self.mat
    }

    /// Replaces the whole matrix.
    ///
    /// # Errors
    /// [`MathError::NonAffine`] when the bottom row is not `[0, 0, 0, 1]`;
    /// `self` is left unchanged.
    pub fn set_mat(&mut self, mat: Mat4) -> Result<(), MathError> {
        *self = Self::from_mat4(mat)?;
        Ok(())
    }

    /// Replaces the matrix with `m` embedded into the identity.
    pub fn set_mat3(&mut self, m: Mat3) {
        self.mat = Mat4::from_mat3(&m);
    }

    /// Replaces the matrix from nested rows (see [`Transform::from_rows`]).
    ///
    /// # Errors
    /// As [`Transform::from_rows`]; `self` is left unchanged.
    pub fn set_mat_rows<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> Result<(), MathError> {
        *self = Self::from_rows(rows)?;
        Ok(())
    }

    /// Translation (last column).
    pub const fn translation(&self) -> Vector3 {
        Vector3::new(self.mat.at(0, 3), self.mat.at(1, 3), self.mat.at(2, 3))
    }

    /// Overwrites the translation, preserving rotation and scale.
    pub fn set_translation(&mut self, translation: Vector3) {
        self.mat.set(0, 3, translation.x());
        self.mat.set(1, 3, translation.y());
        self.mat.set(2, 3, translation.z());
    }

    /// Per-axis scale: the length of each column of the upper-left 3×3
    /// block. Never negative.
    pub fn local_scale(&self) -> Vector3 {
        let m = self.mat.upper_left();
        Vector3::new(
            m.column(0).magnitude(),
            m.column(1).magnitude(),
            m.column(2).magnitude(),
        )
    }

    /// Rescales each column of the upper-left block to the new magnitude,
    /// keeping its direction (a negative value flips the column).
    ///
    /// A column that currently has zero length becomes NaN.
    pub fn set_local_scale(&mut self, scale: Vector3) {
        let current = self.local_scale();
        let ratio = Vector3::new(
            scale.x() / current.x(),
            scale.y() / current.y(),
            scale.z() / current.z(),
        );
        let m = self.mat.upper_left().scale_columns(&ratio);
        self.mat.set_upper_left(&m);
    }

    /// Upper-left 3×3 block with the local scale divided out.
    pub fn rotation_matrix(&self) -> Mat3 {
        let s = self.local_scale();
        let inv = Vector3::new(1.0 / s.x(), 1.0 / s.y(), 1.0 / s.z());
        self.mat.upper_left().scale_columns(&inv)
    }

    /// Rotation, extracted from [`Transform::rotation_matrix`] and
    /// normalized to absorb residual scale error.
    pub fn rotation(&self) -> Quaternion {
        Quaternion::from_rotation_matrix(&self.rotation_matrix()).normalized()
    }

    /// Overwrites the rotation, preserving translation and local scale.
    ///
    /// The block becomes `R(q.normalized()) · diag(local_scale)`.
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        let scale = self.local_scale();
        let m = rotation
            .normalized()
            .to_rotation_matrix()
            .scale_columns(&scale);
        self.mat.set_upper_left(&m);
    }

    /// Pure translation.
    pub fn translate(translation: Vector3) -> Self {
        let mut t = Self::IDENTITY;
        t.set_translation(translation);
        t
    }

    /// Pure rotation.
    pub fn rotate(rotation: Quaternion) -> Self {
        let mut t = Self::IDENTITY;
        t.set_rotation(rotation);
        t
    }

    /// Pure (possibly non-uniform or mirrored) scale.
    pub fn scale(scale: Vector3) -> Self {
        let mut t = Self::IDENTITY;
        t.set_local_scale(scale);
        t
    }

    /// `Translate(translation) * Rotate(rotation) * Scale(scale)`.
    ///
    /// # Examples
    /// ```
    /// use unitalg_core::{Quaternion, Transform, Vector3};
    /// let t = Vector3::new(1.0, -6.2, 9.6);
    /// let q = Quaternion::new(2.0, 4.0, 1.0, 0.5).normalized();
    /// let s = Vector3::new(3.0, 1.0, -7.0);
    /// let v = Vector3::new(3.0, 6.0, 2.0);
    /// assert_eq!(Transform::trs(t, q, s) * v, q * (v * s) + t);
    /// ```
    pub fn trs(translation: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        // Rotation first: set_local_scale keeps the sign of `scale`,
        // set_rotation would not.
        let mut t = Self::rotate(rotation);
        t.set_local_scale(scale);
        t.set_translation(translation);
        t
    }

    /// `Translate(translation) * Rotate(rotation)`.
    pub fn tr(translation: Vector3, rotation: Quaternion) -> Self {
        let mut t = Self::rotate(rotation);
        t.set_translation(translation);
        t
    }

    /// Rotation by `rotation` about the fixed point `origin`:
    /// `Translate(origin) * Rotate(rotation) * Translate(-origin)`.
    pub fn rotate_about(rotation: Quaternion, origin: Vector3) -> Self {
        Self::translate(origin) * Self::rotate(rotation) * Self::translate(-origin)
    }

    /// Re-expresses vectors written in `from`'s axis convention in `to`'s:
    /// `basis(to) * basis(from)⁻¹`.
    ///
    /// Conventions of opposite handedness produce a reflection, which is why
    /// the bases are written as raw matrices rather than quaternions.
    pub fn conversion_from_to(from: CoordinateFrame, to: CoordinateFrame) -> Self {
        trace!(%from, %to, "building frame conversion");
        Self::from(to.rotation_matrix()) * Self::from(from.rotation_matrix()).inverse()
    }

    /// General 4×4 inverse.
    ///
    /// A singular transform (for example a zero scale) yields NaN or infinite
    /// entries; use [`Transform::try_inverse`] to detect that case.
    pub fn inverse(&self) -> Self {
        Self {
            mat: self.mat.inverse(),
        }
    }

    /// Inverse, or `None` for a singular transform.
    pub fn try_inverse(&self) -> Option<Self> {
        self.mat.try_inverse().map(|mat| Self { mat })
    }

    /// Transposed matrix.
    ///
    /// Returned as a raw [`Mat4`]: the transpose of a transform with a
    /// translation is not affine.
    pub fn transpose(&self) -> Mat4 {
        self.mat.transpose()
    }

    /// Transforms a point (same as `self * point`).
    pub fn transform_point(&self, point: &Vector3) -> Vector3 {
        self.mat.transform_point(point)
    }

    /// Transforms a direction: rotation and scale only, no translation.
    pub fn transform_direction(&self, direction: &Vector3) -> Vector3 {
        self.mat.transform_direction(direction)
    }

    /// Approximate equality under an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.mat.approx_eq_with(&other.mat, tolerance)
    }
}

impl From<Mat3> for Transform {
    fn from(m: Mat3) -> Self {
        Self {
            mat: Mat4::from_mat3(&m),
        }
    }
}

impl TryFrom<Mat4> for Transform {
    type Error = MathError;
    fn try_from(mat: Mat4) -> Result<Self, MathError> {
        Self::from_mat4(mat)
    }
}

impl PartialEq for Transform {
    fn eq(&self, other: &Self) -> bool {
        self.mat == other.mat
    }
}

impl Mul for Transform {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self {
            mat: self.mat.multiply(&rhs.mat),
        }
    }
}

/// Homogeneous point transform (`w = 1`).
impl Mul<Vector3> for Transform {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.mat.transform_point(&rhs)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.mat.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}
