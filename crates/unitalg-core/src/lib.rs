// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! unitalg-core: quaternions and affine transforms for 3D robotics and
//! graphics code.
//!
//! [`Quaternion`] and [`Transform`] are the center of the crate; [`Vector3`],
//! the matrix types in [`math`] and the frame conventions in [`frame`] support
//! them. Equality on every value type is approximate and governed by
//! [`Tolerance`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::similar_names
)]

/// Vector, matrix and quaternion primitives plus the tolerance policy.
pub mod math;

/// JSON-backed numeric settings.
pub mod config;
mod error;
pub mod frame;
mod transform;

pub use config::{ConfigError, MathConfig};
pub use error::MathError;
pub use frame::{CoordinateFrame, Direction, DirectionMap};
pub use math::{Mat3, Mat4, Quaternion, Tolerance, Vector3, EPSILON};
pub use transform::Transform;
