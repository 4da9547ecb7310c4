// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use tracing::debug;
use unitalg_core::{Transform, Vector3};

/// Squared cross-product magnitude below which two rays count as parallel.
const PARALLEL_SQ: f64 = 1e-6;

/// Ray starting at `origin` and pointing along `direction`.
///
/// The direction is stored as given; [`Ray::at`] scales with its length,
/// while the projection queries normalize it first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {
    /// Creates a ray.
    pub const fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Start point.
    pub const fn origin(&self) -> Vector3 {
        self.origin
    }

    /// Direction, as given at construction.
    pub const fn direction(&self) -> Vector3 {
        self.direction
    }

    /// `origin + direction * t`.
    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Closest point to `point` on the line through the ray.
    ///
    /// The projection parameter is not clamped, so points behind the origin
    /// project behind it too.
    pub fn closest_point(&self, point: &Vector3) -> Vector3 {
        let dir = self.direction.normalized();
        let along = (*point - self.origin).dot(&dir);
        self.origin + dir * along
    }

    /// Closest point on this ray's line to the line of `other`.
    ///
    /// Returns `origin` when the two directions are nearly parallel.
    pub fn skew_point(&self, other: &Self) -> Vector3 {
        let n = self.direction.cross(&other.direction);
        if n.sq_magnitude() < PARALLEL_SQ {
            debug!(%n, "rays nearly parallel; using origin");
            return self.origin;
        }
        let n2 = other.direction.cross(&n);
        let diff = other.origin - self.origin;
        self.origin + self.direction * (diff.dot(&n2) / self.direction.dot(&n2))
    }

    /// Refracted direction when crossing from index `n1` into index `n2`
    /// through a surface with the given `normal`.
    ///
    /// Uses the vector form of Snell's law on the normalized direction and
    /// normal. The normal may face either side of the surface. Returns
    /// `None` on total internal reflection.
    pub fn refract(&self, normal: &Vector3, n1: f64, n2: f64) -> Option<Vector3> {
        let d = self.direction.normalized();
        let mut n = normal.normalized();
        let mut cos_i = -n.dot(&d);
        if cos_i < 0.0 {
            n = -n;
            cos_i = -cos_i;
        }
        let eta = n1 / n2;
        let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
        if k < 0.0 {
            debug!(eta, cos_i, "total internal reflection");
            return None;
        }
        Some(d * eta + n * (eta * cos_i - k.sqrt()))
    }

    /// Ray with its origin mapped as a point and its direction mapped
    /// without translation.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self {
            origin: transform.transform_point(&self.origin),
            direction: transform.transform_direction(&self.direction),
        }
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray(origin: {}, direction: {})", self.origin, self.direction)
    }
}
