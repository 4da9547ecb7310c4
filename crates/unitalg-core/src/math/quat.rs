// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, Neg};

use tracing::{debug, trace};

use crate::error::MathError;
use crate::math::{clamp, Mat3, Tolerance, Vector3, EPSILON};

/// Quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * All angles are expressed in radians.
/// * A unit quaternion represents a rotation of `angle = 2·acos(w)` about
///   the axis `(x, y, z) / sin(angle / 2)`. Construction helpers return unit
///   quaternions; the component setters do not renormalize.
/// * `q` and `-q` represent the same rotation, and `(angle, axis)` and
///   `(-angle, -axis)` describe the same rotation. Use
///   [`Quaternion::same_rotation`] when either sign is acceptable.
/// * `==` compares components approximately under [`Tolerance::active`].
#[derive(Debug, Copy, Clone)]
pub struct Quaternion {
    data: [f64; 4],
}

impl Quaternion {
    /// `(0, 0, 0, 1)`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components, verbatim.
    ///
    /// No normalization is performed; use [`Quaternion::normalized`] when
    /// the components do not already have unit length.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Creates a quaternion from a slice of exactly four components
    /// `(x, y, z, w)`.
    ///
    /// # Errors
    /// [`MathError::SizeMismatch`] when `values.len() != 4`.
    pub fn from_slice(values: &[f64]) -> Result<Self, MathError> {
        match values {
            [x, y, z, w] => Ok(Self::new(*x, *y, *z, *w)),
            _ => Err(MathError::SizeMismatch {
                expected: 4,
                got: values.len(),
            }),
        }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first. The result is
    /// `(axis · sin(angle/2), cos(angle/2))`.
    ///
    /// # Errors
    /// [`MathError::DegenerateAxis`] when `axis` has magnitude ≤
    /// [`EPSILON`] or is not finite.
    ///
    /// # Examples
    /// ```
    /// use core::f64::consts::FRAC_PI_2;
    /// use unitalg_core::{Quaternion, Vector3};
    /// # fn main() -> Result<(), unitalg_core::MathError> {
    /// let q = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::UNIT_Z)?;
    /// assert_eq!(q * Vector3::UNIT_X, Vector3::UNIT_Y);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_angle_axis(angle: f64, axis: Vector3) -> Result<Self, MathError> {
        let len = axis.magnitude();
        if !len.is_finite() || len <= EPSILON {
            debug!(%axis, "rejecting degenerate rotation axis");
            return Err(MathError::DegenerateAxis);
        }
        let unit = axis.scale(1.0 / len);
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        Ok(Self::new(
            unit.x() * sin_half,
            unit.y() * sin_half,
            unit.z() * sin_half,
            cos_half,
        ))
    }

    /// Rotation from Euler angles in radians.
    ///
    /// The half-angle product composes yaw about +Y, then pitch about +Z, then
    /// roll about +X:
    /// `from_euler(x, y, z) == from_angle_axis(y, +Y) * from_angle_axis(z, +Z) * from_angle_axis(x, +X)`.
    /// [`Quaternion::eulers`] is the inverse.
    pub fn from_euler(x: f64, y: f64, z: f64) -> Self {
        let (s1, c1) = (y * 0.5).sin_cos();
        let (s2, c2) = (z * 0.5).sin_cos();
        let (s3, c3) = (x * 0.5).sin_cos();

        Self::new(
            s1 * s2 * c3 + c1 * c2 * s3,
            s1 * c2 * c3 + c1 * s2 * s3,
            c1 * s2 * c3 - s1 * c2 * s3,
            c1 * c2 * c3 - s1 * s2 * s3,
        )
    }

    /// Extracts the rotation of a proper 3×3 rotation matrix.
    ///
    /// Branches on the trace and on the largest diagonal element so the
    /// divisor is always the largest quaternion component. The dominant
    /// component of the result is positive. Inverse of
    /// [`Quaternion::to_rotation_matrix`] for every unit quaternion, up to the
    /// `q`/`-q` sign.
    pub fn from_rotation_matrix(m: &Mat3) -> Self {
        let trace = m.at(0, 0) + m.at(1, 1) + m.at(2, 2);

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0; // 4w
            Self::new(
                (m.at(2, 1) - m.at(1, 2)) / s,
                (m.at(0, 2) - m.at(2, 0)) / s,
                (m.at(1, 0) - m.at(0, 1)) / s,
                0.25 * s,
            )
        } else if m.at(0, 0) > m.at(1, 1) && m.at(0, 0) > m.at(2, 2) {
            let s = (1.0 + m.at(0, 0) - m.at(1, 1) - m.at(2, 2)).sqrt() * 2.0; // 4x
            Self::new(
                0.25 * s,
                (m.at(0, 1) + m.at(1, 0)) / s,
                (m.at(0, 2) + m.at(2, 0)) / s,
                (m.at(2, 1) - m.at(1, 2)) / s,
            )
        } else if m.at(1, 1) > m.at(2, 2) {
            let s = (1.0 + m.at(1, 1) - m.at(0, 0) - m.at(2, 2)).sqrt() * 2.0; // 4y
            Self::new(
                (m.at(0, 1) + m.at(1, 0)) / s,
                0.25 * s,
                (m.at(1, 2) + m.at(2, 1)) / s,
                (m.at(0, 2) - m.at(2, 0)) / s,
            )
        } else {
            let s = (1.0 + m.at(2, 2) - m.at(0, 0) - m.at(1, 1)).sqrt() * 2.0; // 4z
            Self::new(
                (m.at(0, 2) + m.at(2, 0)) / s,
                (m.at(1, 2) + m.at(2, 1)) / s,
                0.25 * s,
                (m.at(1, 0) - m.at(0, 1)) / s,
            )
        }
    }

    /// Returns the quaternion as an array `(x, y, z, w)`.
    pub const fn to_array(self) -> [f64; 4] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Scalar component.
    pub const fn w(&self) -> f64 {
        self.data[3]
    }

    /// Sets the X component (may denormalize).
    pub fn set_x(&mut self, x: f64) {
        self.data[0] = x;
    }

    /// Sets the Y component (may denormalize).
    pub fn set_y(&mut self, y: f64) {
        self.data[1] = y;
    }

    /// Sets the Z component (may denormalize).
    pub fn set_z(&mut self, z: f64) {
        self.data[2] = z;
    }

    /// Sets the scalar component (may denormalize).
    pub fn set_w(&mut self, w: f64) {
        self.data[3] = w;
    }

    /// Vector part `(x, y, z)`.
    pub const fn vector(&self) -> Vector3 {
        Vector3::new(self.data[0], self.data[1], self.data[2])
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// `x² + y² + z² + w²`.
    pub fn sq_magnitude(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm of the four components.
    pub fn magnitude(&self) -> f64 {
        self.sq_magnitude().sqrt()
    }

    /// Returns `true` when the magnitude is 1 under the active tolerance.
    pub fn is_normalized(&self) -> bool {
        Tolerance::active().is_close(self.magnitude(), 1.0)
    }

    /// Returns the unit quaternion with the same direction.
    ///
    /// Magnitudes below [`EPSILON`] (`4 · f64::EPSILON`) yield the identity
    /// instead of dividing by a near-zero value.
    pub fn normalized(&self) -> Self {
        let len = self.magnitude();
        if len < EPSILON {
            debug!(len, "normalizing degenerate quaternion; using identity");
            return Self::IDENTITY;
        }
        let inv = 1.0 / len;
        Self::new(
            self.data[0] * inv,
            self.data[1] * inv,
            self.data[2] * inv,
            self.data[3] * inv,
        )
    }

    /// Normalizes in place (see [`Quaternion::normalized`]).
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Rotation angle in `[0, 2π]`: `2 · acos(clamp(w, -1, 1))`.
    pub fn angle(&self) -> f64 {
        2.0 * clamp(self.w(), -1.0, 1.0).acos()
    }

    /// Rotation axis: `(x, y, z) / sin(angle / 2)`.
    ///
    /// When `sin(angle / 2)` is below [`EPSILON`] the rotation is (close to)
    /// identity and the axis is undefined; the raw `(x, y, z)` is returned and
    /// callers must not rely on its direction.
    pub fn axis(&self) -> Vector3 {
        self.angle_axis().1
    }

    /// `(angle, axis)` in one call. See [`Quaternion::angle`] and
    /// [`Quaternion::axis`].
    pub fn angle_axis(&self) -> (f64, Vector3) {
        let angle = self.angle();
        let sin_half = (angle * 0.5).sin();
        let v = self.vector();
        if sin_half < EPSILON {
            return (angle, v);
        }
        (angle, v.scale(1.0 / sin_half))
    }

    /// `(-x, -y, -z, w)`.
    pub const fn conjugate(&self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2], self.data[3])
    }

    /// Multiplicative inverse: `conjugate / |q|²`.
    ///
    /// Valid for non-unit quaternions; equals the conjugate for unit ones.
    pub fn inverse(&self) -> Self {
        let inv = 1.0 / self.sq_magnitude();
        let c = self.conjugate();
        Self::new(c.data[0] * inv, c.data[1] * inv, c.data[2] * inv, c.data[3] * inv)
    }

    /// Euler angles `(x, y, z)` such that
    /// `from_euler(x, y, z)` is the same rotation as `self`.
    ///
    /// Works on the normalized quaternion. At gimbal lock (`x·y + z·w` within
    /// [`EPSILON`] of `±0.5`, i.e. a pitch of `±π/2` about Z) the roll
    /// component is forced to `0` and the whole remaining rotation is reported
    /// as yaw about Y, instead of producing NaN.
    pub fn eulers(&self) -> Vector3 {
        let q = self.normalized();
        let [x, y, z, w] = q.data;
        let test = x * y + z * w;

        if test >= 0.5 - EPSILON {
            trace!(test, "gimbal lock at +pi/2");
            let yaw = 2.0 * x.atan2(w);
            return Vector3::new(0.0, yaw, core::f64::consts::FRAC_PI_2);
        }
        if test <= -0.5 + EPSILON {
            trace!(test, "gimbal lock at -pi/2");
            let yaw = -2.0 * x.atan2(w);
            return Vector3::new(0.0, yaw, -core::f64::consts::FRAC_PI_2);
        }

        let yaw = (2.0 * y * w - 2.0 * x * z).atan2(1.0 - 2.0 * y * y - 2.0 * z * z);
        let pitch = clamp(2.0 * test, -1.0, 1.0).asin();
        let roll = (2.0 * x * w - 2.0 * y * z).atan2(1.0 - 2.0 * x * x - 2.0 * z * z);
        Vector3::new(roll, yaw, pitch)
    }

    /// Hamilton product (`self * other`).
    ///
    /// Applying the product to a vector applies `other` first, then `self`.
    /// Non‑commutative. When both operands are unit quaternions the result is
    /// a unit quaternion up to floating‑point error.
    pub fn multiply(&self, other: &Self) -> Self {
        let [x1, y1, z1, w1] = self.data;
        let [x2, y2, z2, w2] = other.data;

        Self::new(
            x1 * w2 + y1 * z2 - z1 * y2 + w1 * x2,
            -x1 * z2 + y1 * w2 + z1 * x2 + w1 * y2,
            x1 * y2 - y1 * x2 + z1 * w2 + w1 * z2,
            -x1 * x2 - y1 * y2 - z1 * z2 + w1 * w2,
        )
    }

    /// Rotates `v` by this quaternion.
    ///
    /// Expands the sandwich product `q v q*` into rotation-matrix
    /// coefficients instead of performing two quaternion products. Matches
    /// `self.to_rotation_matrix() * v`.
    pub fn rotate(&self, v: &Vector3) -> Vector3 {
        let [x, y, z, w] = self.data;
        let x2 = x * 2.0;
        let y2 = y * 2.0;
        let z2 = z * 2.0;
        let xx = x * x2;
        let yy = y * y2;
        let zz = z * z2;
        let xy = x * y2;
        let xz = x * z2;
        let yz = y * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        let [vx, vy, vz] = v.to_array();
        Vector3::new(
            (1.0 - (yy + zz)) * vx + (xy - wz) * vy + (xz + wy) * vz,
            (xy + wz) * vx + (1.0 - (xx + zz)) * vy + (yz - wx) * vz,
            (xz - wy) * vx + (yz + wx) * vy + (1.0 - (xx + yy)) * vz,
        )
    }

    /// Rotation matrix whose columns are the images of the basis vectors.
    ///
    /// Uses the components as given; normalize first for non-unit input.
    pub fn to_rotation_matrix(&self) -> Mat3 {
        let [x, y, z, w] = self.data;
        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Mat3::from_rows([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    /// Interpolates from `self` towards `other` along their relative
    /// rotation.
    ///
    /// With `rel = self⁻¹ * other`, returns
    /// `self * from_angle_axis(rel.angle() * t, rel.axis())`, so `t = 0`
    /// gives `self` and `t = 1` gives `other`. This is not textbook slerp:
    /// `rel.angle()` lies in `[0, 2π]`, so when it exceeds `π` the path takes
    /// the long way round, and `t` outside `[0, 1]` extrapolates. When the
    /// relative rotation has no usable axis, `self` is returned.
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let rel = self.inverse() * *other;
        let (angle, axis) = rel.angle_axis();
        match Self::from_angle_axis(angle * t, axis) {
            Ok(step) => *self * step,
            Err(_) => *self,
        }
    }

    /// Returns `true` when `self ≈ other` or `self ≈ -other`.
    pub fn same_rotation(&self, other: &Self) -> bool {
        let tol = Tolerance::active();
        self.approx_eq_with(other, tol) || self.approx_eq_with(&-*other, tol)
    }

    /// Approximate component-wise equality under an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.all_close(&self.data, &other.data)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Converts a 4‑element array `(x, y, z, w)` verbatim.
impl From<[f64; 4]> for Quaternion {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::active())
    }
}

impl Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<Vector3> for Quaternion {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        self.rotate(&rhs)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(
            self.data[0] * rhs,
            self.data[1] * rhs,
            self.data[2] * rhs,
            self.data[3] * rhs,
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        self * -1.0
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.data[0], self.data[1], self.data[2], self.data[3]
        )
    }
}
