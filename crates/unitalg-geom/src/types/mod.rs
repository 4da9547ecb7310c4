// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types (ray, plane, sphere, bounding box, range).
//!
//! Boundary notes:
//! - Containment and overlap are inclusive: touching counts.
//! - Transforming a shape maps points with `Transform * point` and
//!   directions with `Transform::transform_direction`.

#[doc = "Axis-aligned bounding boxes."]
pub mod aabb;
#[doc = "Infinite planes given by a point and a unit normal."]
pub mod plane;
#[doc = "Closed intervals on the real line."]
pub mod range;
#[doc = "Half-lines with an origin and a direction."]
pub mod ray;
#[doc = "Spheres and their fitting helpers."]
pub mod sphere;
