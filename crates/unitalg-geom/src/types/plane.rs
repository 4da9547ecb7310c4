// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use tracing::debug;
use unitalg_core::{Transform, Vector3, EPSILON};

use crate::types::ray::Ray;

/// Infinite plane through `point` with unit `normal`.
///
/// Invariant: `normal` has unit length (or is zero when built from a zero
/// vector, in which case every distance is zero).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    point: Vector3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane; `normal` is normalized.
    pub fn new(point: Vector3, normal: Vector3) -> Self {
        Self {
            point,
            normal: normal.normalized(),
        }
    }

    /// Plane through three points, with the normal following the
    /// right-hand rule `(b - a) × (c - a)`.
    ///
    /// Returns `None` when the points are collinear.
    pub fn from_points(a: Vector3, b: Vector3, c: Vector3) -> Option<Self> {
        let normal = (b - a).cross(&(c - a));
        if normal.magnitude() <= EPSILON {
            debug!(%a, %b, %c, "collinear points do not define a plane");
            return None;
        }
        Some(Self::new(a, normal))
    }

    /// A point on the plane.
    pub const fn point(&self) -> Vector3 {
        self.point
    }

    /// Unit normal.
    pub const fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Distance to `p`, positive on the side the normal points to.
    pub fn signed_distance(&self, p: &Vector3) -> f64 {
        self.normal.dot(&(*p - self.point))
    }

    /// Unsigned distance to `p`.
    pub fn distance_to_point(&self, p: &Vector3) -> f64 {
        self.signed_distance(p).abs()
    }

    /// Orthogonal projection of `p` onto the plane.
    pub fn project_point(&self, p: &Vector3) -> Vector3 {
        *p - self.normal * self.signed_distance(p)
    }

    /// Ray parameter `t >= 0` where `ray.at(t)` lies on the plane.
    ///
    /// `None` when the ray is parallel to the plane or points away from it.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let denom = self.normal.dot(&ray.direction());
        if denom.abs() <= EPSILON {
            return None;
        }
        let t = self.normal.dot(&(self.point - ray.origin())) / denom;
        (t >= 0.0).then_some(t)
    }

    /// Image of the plane under `transform`.
    ///
    /// Normals map through the inverse transpose of the linear block, so
    /// non-uniform scale is handled. `None` when `transform` is singular.
    pub fn transformed(&self, transform: &Transform) -> Option<Self> {
        let inverse = transform.try_inverse()?;
        let normal = inverse.mat().upper_left().transpose().transform(&self.normal);
        Some(Self::new(transform.transform_point(&self.point), normal))
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane(point: {}, normal: {})", self.point, self.normal)
    }
}
