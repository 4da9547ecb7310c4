// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Linear algebra primitives: scalar tolerance policy, 3-vectors, 3×3 and
//! 4×4 matrices, and quaternions.
//!
//! All arithmetic is `f64`. Matrices are column-major and act on column
//! vectors.

mod mat3;
mod mat4;
mod quat;
mod scalar;
mod vec3;

pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quaternion;
pub use scalar::{clamp, deg_to_rad, rad_to_deg, Tolerance, DEFAULT_ATOL, DEFAULT_RTOL, EPSILON};
pub use vec3::Vector3;
