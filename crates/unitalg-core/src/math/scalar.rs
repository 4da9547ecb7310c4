// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar helpers and the approximate-equality policy used by every type in
//! this crate.
//!
//! Equality on vectors, quaternions, matrices and transforms is approximate:
//! two components `a` and `b` are close when `|a - b| <= atol + rtol * |b|`.
//! The tolerance consulted by `==` is process-wide (see
//! [`Tolerance::active`]); code that needs a specific tolerance should call
//! the `approx_eq_with` methods instead of relying on the global.

use std::f64::consts::TAU;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Degeneracy threshold: four machine epsilons.
///
/// Magnitudes at or below this value are treated as zero when normalizing,
/// extracting an axis, or detecting gimbal lock.
pub const EPSILON: f64 = 4.0 * f64::EPSILON;

/// Default relative tolerance for approximate equality.
pub const DEFAULT_RTOL: f64 = 1e-12;

/// Default absolute tolerance for approximate equality.
pub const DEFAULT_ATOL: f64 = 1e-11;

static ACTIVE: RwLock<Tolerance> = RwLock::new(Tolerance::DEFAULT);

/// Relative/absolute tolerance pair for approximate float comparison.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the magnitude of the reference value.
    pub rtol: f64,
    /// Absolute tolerance floor.
    pub atol: f64,
}

impl Tolerance {
    /// `rtol = 1e-12`, `atol = 1e-11`.
    pub const DEFAULT: Self = Self::new(DEFAULT_RTOL, DEFAULT_ATOL);

    /// Creates a tolerance pair.
    pub const fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Returns the process-wide tolerance used by `==` and `!=`.
    pub fn active() -> Self {
        match ACTIVE.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Replaces the process-wide tolerance and returns the previous one.
    ///
    /// Comparisons running concurrently on other threads may observe either
    /// value; callers that need a stable tolerance should use the
    /// `approx_eq_with` methods.
    pub fn set_active(tolerance: Self) -> Self {
        let mut guard = match ACTIVE.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, tolerance)
    }

    /// Both tolerances are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.rtol.is_finite() && self.atol.is_finite() && self.rtol >= 0.0 && self.atol >= 0.0
    }

    /// Returns `true` when `|a - b| <= atol + rtol * |b|`.
    ///
    /// Like numpy's `isclose`, the test is asymmetric: `b` is the reference.
    /// Equal infinities compare close; NaN never does.
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// Returns `true` when the slices have equal length and every pair of
    /// components is close.
    pub fn all_close(&self, a: &[f64], b: &[f64]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| self.is_close(*x, *y))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Clamps `value` to the inclusive `[min, max]` range. NaN passes through.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    if value.is_nan() {
        return value;
    }
    value.max(min).min(max)
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}
