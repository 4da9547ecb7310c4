// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};

use crate::error::MathError;
use crate::frame::{CoordinateFrame, Direction};
use crate::math::{clamp, Tolerance, EPSILON};

/// 3D vector of `f64` components.
///
/// * Components may represent either points or directions depending on the
///   calling context; [`crate::Transform`] treats a `Vector3` operand as a
///   point (homogeneous `w = 1`).
/// * `==` is approximate under [`Tolerance::active`].
/// * Named directions (`up`, `forward`, ...) depend on a coordinate-frame
///   convention, which is always passed explicitly.
#[derive(Debug, Copy, Clone, Default)]
pub struct Vector3 {
    data: [f64; 3],
}

impl Vector3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// All components `+inf`.
    pub const POSITIVE_INFINITY: Self = Self::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);

    /// All components `-inf`.
    pub const NEGATIVE_INFINITY: Self =
        Self::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector from a slice of exactly three components.
    ///
    /// # Errors
    /// [`MathError::SizeMismatch`] when `values.len() != 3`; no truncation or
    /// padding is performed.
    pub fn from_slice(values: &[f64]) -> Result<Self, MathError> {
        match values {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(MathError::SizeMismatch {
                expected: 3,
                got: values.len(),
            }),
        }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
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

    /// Sets the X component.
    pub fn set_x(&mut self, x: f64) {
        self.data[0] = x;
    }

    /// Sets the Y component.
    pub fn set_y(&mut self, y: f64) {
        self.data[1] = y;
    }

    /// Sets the Z component.
    pub fn set_z(&mut self, z: f64) {
        self.data[2] = z;
    }

    /// Named direction in the given coordinate-frame convention.
    pub fn direction(frame: CoordinateFrame, direction: Direction) -> Self {
        frame.directions().get(direction)
    }

    /// "Up" in `frame`.
    pub fn up(frame: CoordinateFrame) -> Self {
        Self::direction(frame, Direction::Up)
    }

    /// "Down" in `frame`.
    pub fn down(frame: CoordinateFrame) -> Self {
        Self::direction(frame, Direction::Down)
    }

    /// "Left" in `frame`.
    pub fn left(frame: CoordinateFrame) -> Self {
        Self::direction(frame, Direction::Left)
    }

    /// "Right" in `frame`.
    pub fn right(frame: CoordinateFrame) -> Self {
        Self::direction(frame, Direction::Right)
    }

    /// "Forward" in `frame`.
    pub fn forward(frame: CoordinateFrame) -> Self {
        Self::direction(frame, Direction::Forward)
    }

    /// "Back" in `frame`.
    pub fn back(frame: CoordinateFrame) -> Self {
        Self::direction(frame, Direction::Back)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared length.
    pub fn sq_magnitude(&self) -> f64 {
        self.dot(self)
    }

    /// Vector length.
    pub fn magnitude(&self) -> f64 {
        self.sq_magnitude().sqrt()
    }

    /// Returns the unit vector with the same direction.
    ///
    /// Vectors with length ≤ [`EPSILON`] are degenerate and normalize to the
    /// zero vector so callers can detect them.
    pub fn normalized(&self) -> Self {
        let len = self.magnitude();
        if len <= EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / len)
    }

    /// Normalizes in place (see [`Vector3::normalized`]).
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(
            self.data[0] * scalar,
            self.data[1] * scalar,
            self.data[2] * scalar,
        )
    }

    /// Component-wise product.
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] * other.data[0],
            self.data[1] * other.data[1],
            self.data[2] * other.data[2],
        )
    }

    /// Component-wise minimum.
    pub fn component_min(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].min(other.data[0]),
            self.data[1].min(other.data[1]),
            self.data[2].min(other.data[2]),
        )
    }

    /// Component-wise maximum.
    pub fn component_max(&self, other: &Self) -> Self {
        Self::new(
            self.data[0].max(other.data[0]),
            self.data[1].max(other.data[1]),
            self.data[2].max(other.data[2]),
        )
    }

    /// Distance between two points.
    pub fn distance(a: &Self, b: &Self) -> f64 {
        (*a - *b).magnitude()
    }

    /// Squared distance between two points.
    pub fn sq_distance(a: &Self, b: &Self) -> f64 {
        (*a - *b).sq_magnitude()
    }

    /// Unsigned angle between two vectors in radians, in `[0, π]`.
    ///
    /// Returns NaN when either vector has zero length.
    pub fn angle(from: &Self, to: &Self) -> f64 {
        let denom = from.magnitude() * to.magnitude();
        clamp(from.dot(to) / denom, -1.0, 1.0).acos()
    }

    /// Linear interpolation `a + (b - a) * t`.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        *a + (*b - *a) * t
    }

    /// Steps `distance` units from `from` towards `to`.
    ///
    /// The step is not clamped: a distance larger than the gap overshoots.
    /// Returns `from` when the two points coincide.
    pub fn move_towards(from: &Self, to: &Self, distance: f64) -> Self {
        let dir = (*to - *from).normalized();
        *from + dir * distance
    }

    /// Arithmetic mean of `points`, or `None` for an empty slice.
    pub fn average(points: &[Self]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let sum = points.iter().fold(Self::ZERO, |acc, p| acc + *p);
        #[allow(clippy::cast_precision_loss)]
        let count = points.len() as f64;
        Some(sum / count)
    }

    /// Approximate equality under an explicit tolerance.
    pub fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.all_close(&self.data, &other.data)
    }

    /// Returns `true` when any component is NaN.
    pub fn is_nan(&self) -> bool {
        self.data.iter().any(|c| c.is_nan())
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(value: Vector3) -> Self {
        value.data
    }
}

impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::active())
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Add for Vector3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        )
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Vector3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2])
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

/// Component-wise product, used to apply per-axis scale.
impl Mul for Vector3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.component_mul(&rhs)
    }
}

/// Division by exactly zero yields a NaN vector rather than infinities.
impl Div<f64> for Vector3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        if rhs == 0.0 {
            return Self::new(f64::NAN, f64::NAN, f64::NAN);
        }
        self.scale(1.0 / rhs)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.data[0], self.data[1], self.data[2])
    }
}
