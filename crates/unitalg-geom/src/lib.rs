// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::must_use_candidate, clippy::return_self_not_must_use)]
#![doc = r"Geometry primitives built on `unitalg-core`.

This crate provides:
- Rays with projection, skew-line and refraction queries (`Ray`).
- Planes with signed distances and ray intersection (`Plane`).
- Spheres with containment and intersection tests (`Sphere`).
- Axis-aligned bounding boxes (`BoundingBox`).
- Closed scalar intervals (`Range`).

Design notes:
- `f64` throughout, same as `unitalg-core`.
- Constructors that need at least one input take a slice and return `None`
  when it is empty.
- Overlap and containment tests are inclusive on the boundary.
"]

/// Foundational geometric types.
pub mod types;

pub use types::aabb::BoundingBox;
pub use types::plane::Plane;
pub use types::range::Range;
pub use types::ray::Ray;
pub use types::sphere::Sphere;
