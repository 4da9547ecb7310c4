// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Div, Mul};

/// Closed interval `[min, max]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    /// Interval between `a` and `b`, in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Degenerate interval containing only `point`.
    pub const fn from_point(point: f64) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// `[center - delta, center + delta]`.
    pub fn from_center_delta(center: f64, delta: f64) -> Self {
        Self::new(center - delta, center + delta)
    }

    /// Lower bound.
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// `true` when the intervals share at least one point.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && self.max >= other.min
    }

    /// Intersection with `other`.
    ///
    /// When the intervals are disjoint, returns the endpoint of `self`
    /// nearest to `other` as a single-point range.
    pub fn overlapping(&self, other: &Self) -> Self {
        if self.min > other.max {
            return Self::from_point(self.min);
        }
        if self.max < other.min {
            return Self::from_point(self.max);
        }
        Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        }
    }

    /// Nearest value to `value` inside the interval.
    pub fn clamp(&self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    /// `true` when `min <= value <= max`.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Mul<f64> for Range {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.min * rhs, self.max * rhs)
    }
}

impl Mul<Range> for f64 {
    type Output = Range;
    fn mul(self, rhs: Range) -> Range {
        rhs * self
    }
}

impl Div<f64> for Range {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.min / rhs, self.max / rhs)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_scale_keeps_order() {
        let r = Range::new(1.0, 3.0) * -2.0;
        assert_eq!((r.min(), r.max()), (-6.0, -2.0));
    }

    #[test]
    fn disjoint_overlap_picks_nearest_endpoint() {
        let a = Range::new(0.0, 1.0);
        assert_eq!(a.overlapping(&Range::new(5.0, 6.0)), Range::from_point(1.0));
        assert_eq!(a.overlapping(&Range::new(-6.0, -5.0)), Range::from_point(0.0));
        assert_eq!(a.overlapping(&Range::new(0.5, 6.0)), Range::new(0.5, 1.0));
    }
}
