// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use tracing::debug;
use unitalg_core::{Transform, Vector3};

use crate::types::sphere::Sphere;

/// Axis-aligned bounding box.
///
/// Invariant: every component of `min` is less than or equal to its
/// counterpart in `max`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox {
    min: Vector3,
    max: Vector3,
}

impl BoundingBox {
    /// Box spanned by two opposite corners, in any order.
    pub fn new(a: Vector3, b: Vector3) -> Self {
        Self {
            min: a.component_min(&b),
            max: a.component_max(&b),
        }
    }

    /// Returns the minimum corner.
    pub const fn min(&self) -> Vector3 {
        self.min
    }

    /// Returns the maximum corner.
    pub const fn max(&self) -> Vector3 {
        self.max
    }

    /// Box centered at `center`; the sign of each half-extent is ignored.
    pub fn from_center_half_extents(center: Vector3, half_extents: Vector3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Minimal box containing all `points`, or `None` for an empty slice.
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let Some((first, rest)) = points.split_first() else {
            debug!("bounding box of zero points");
            return None;
        };
        let mut out = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            out.min = out.min.component_min(p);
            out.max = out.max.component_max(p);
        }
        Some(out)
    }

    /// Minimal box containing all `spheres`, or `None` for an empty slice.
    pub fn from_spheres(spheres: &[Sphere]) -> Option<Self> {
        spheres
            .iter()
            .map(|s| {
                let r = s.radius();
                Self::from_center_half_extents(s.center(), Vector3::new(r, r, r))
            })
            .reduce(|acc, b| acc.union(&b))
    }

    /// Midpoint of the box.
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths `max - min`.
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Half of [`BoundingBox::size`].
    pub fn half_extents(&self) -> Vector3 {
        self.size() * 0.5
    }

    /// Returns `true` if `p` lies inside or on the surface.
    pub fn contains_point(&self, p: &Vector3) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }

    /// Returns `true` if this box overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        (0..3).all(|i| self.min[i] <= other.max[i] && other.min[i] <= self.max[i])
    }

    /// Returns the union of two boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.component_min(&other.min),
            max: self.max.component_max(&other.max),
        }
    }

    /// Grows the box by margin `m` on every side. A negative margin shrinks
    /// it, collapsing axes that would invert.
    pub fn inflate(&self, m: f64) -> Self {
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for i in 0..3 {
            let lo = self.min[i] - m;
            let hi = self.max[i] + m;
            if lo > hi {
                let mid = (self.min[i] + self.max[i]) * 0.5;
                min[i] = mid;
                max[i] = mid;
            } else {
                min[i] = lo;
                max[i] = hi;
            }
        }
        Self {
            min: Vector3::from(min),
            max: Vector3::from(max),
        }
    }

    /// Box bounding this one after `transform`, built from the eight
    /// transformed corners.
    pub fn transformed(&self, transform: &Transform) -> Self {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vector3::new(minx, miny, minz),
            Vector3::new(minx, miny, maxz),
            Vector3::new(minx, maxy, minz),
            Vector3::new(minx, maxy, maxz),
            Vector3::new(maxx, miny, minz),
            Vector3::new(maxx, miny, maxz),
            Vector3::new(maxx, maxy, minz),
            Vector3::new(maxx, maxy, maxz),
        ];
        let first = transform.transform_point(&corners[0]);
        corners[1..].iter().fold(
            Self {
                min: first,
                max: first,
            },
            |acc, c| {
                let p = transform.transform_point(c);
                Self {
                    min: acc.min.component_min(&p),
                    max: acc.max.component_max(&p),
                }
            },
        )
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundingBox(min: {}, max: {})", self.min, self.max)
    }
}
