// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use unitalg_core::Vector3;

use crate::types::aabb::BoundingBox;
use crate::types::plane::Plane;
use crate::types::ray::Ray;

/// Sphere with a center and a non-negative radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    center: Vector3,
    radius: f64,
}

impl Sphere {
    /// Creates a sphere. A negative radius is stored as its absolute value.
    pub fn new(center: Vector3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Sphere around the centroid of `points` reaching the farthest point.
    ///
    /// Encloses every point but is not the minimal enclosing sphere.
    /// `None` for an empty slice.
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let center = Vector3::average(points)?;
        let radius = points
            .iter()
            .map(|p| Vector3::distance(p, &center))
            .fold(0.0, f64::max);
        Some(Self { center, radius })
    }

    /// Sphere around the centroid of `points` with the mean distance as
    /// radius. `None` for an empty slice.
    pub fn best_fit(points: &[Vector3]) -> Option<Self> {
        let center = Vector3::average(points)?;
        let total: f64 = points.iter().map(|p| Vector3::distance(p, &center)).sum();
        #[allow(clippy::cast_precision_loss)]
        let radius = total / points.len() as f64;
        Some(Self { center, radius })
    }

    /// Smallest sphere containing `bbox`.
    pub fn from_bounding_box(bbox: &BoundingBox) -> Self {
        Self {
            center: bbox.center(),
            radius: bbox.size().magnitude() / 2.0,
        }
    }

    /// Center.
    pub const fn center(&self) -> Vector3 {
        self.center
    }

    /// Radius.
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// `true` when `point` lies inside or on the surface.
    pub fn contains_point(&self, point: &Vector3) -> bool {
        Vector3::distance(point, &self.center) <= self.radius
    }

    /// `true` when `other` lies entirely inside this sphere.
    pub fn contains_sphere(&self, other: &Self) -> bool {
        Vector3::distance(&other.center, &self.center) + other.radius <= self.radius
    }

    /// `true` when the spheres touch or overlap.
    pub fn intersects_sphere(&self, other: &Self) -> bool {
        Vector3::distance(&other.center, &self.center) <= other.radius + self.radius
    }

    /// `true` when the line through `ray` passes within the radius.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        let closest = ray.closest_point(&self.center);
        Vector3::distance(&closest, &self.center) <= self.radius
    }

    /// `true` when the plane cuts or touches the sphere.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        plane.distance_to_point(&self.center) <= self.radius
    }
}
