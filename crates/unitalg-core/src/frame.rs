// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Coordinate-frame conventions.
//!
//! Ecosystems disagree about which signed world axis is "right", "forward"
//! and "up". A [`CoordinateFrame`] names one convention and
//! [`CoordinateFrame::directions`] resolves it to concrete unit vectors.
//! There is no process-wide "current" frame: every API that needs named
//! directions takes the frame as a parameter.

use core::fmt;
use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::math::{Mat3, Vector3};

/// Supported frame conventions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateFrame {
    /// Right-handed math convention: X right, Y forward, Z up.
    #[default]
    NormalMath,
    /// ROS body frame (REP 103): X forward, Y left, Z up.
    Ros,
    /// ROS IMU variant: X forward, Y left, Z down.
    RosImu,
    /// Unity: X right, Y up, Z forward (left-handed).
    Unity,
    /// OpenCV camera: X right, Y down, Z forward.
    OpenCv,
}

impl CoordinateFrame {
    /// Every supported convention.
    pub const ALL: [Self; 5] = [
        Self::NormalMath,
        Self::Ros,
        Self::RosImu,
        Self::Unity,
        Self::OpenCv,
    ];

    /// Direction lookup for this convention.
    pub fn directions(self) -> DirectionMap {
        let (right, forward, up) = match self {
            Self::NormalMath => (Vector3::UNIT_X, Vector3::UNIT_Y, Vector3::UNIT_Z),
            Self::Ros => (-Vector3::UNIT_Y, Vector3::UNIT_X, Vector3::UNIT_Z),
            Self::RosImu => (-Vector3::UNIT_Y, Vector3::UNIT_X, -Vector3::UNIT_Z),
            Self::Unity => (Vector3::UNIT_X, Vector3::UNIT_Z, Vector3::UNIT_Y),
            Self::OpenCv => (Vector3::UNIT_X, Vector3::UNIT_Z, -Vector3::UNIT_Y),
        };
        DirectionMap::new(right, forward, up)
    }

    /// Basis matrix whose columns are right, forward and up.
    pub fn rotation_matrix(self) -> Mat3 {
        self.directions().rotation_matrix()
    }
}

impl fmt::Display for CoordinateFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NormalMath => "normal_math",
            Self::Ros => "ros",
            Self::RosImu => "ros_imu",
            Self::Unity => "unity",
            Self::OpenCv => "open_cv",
        };
        f.write_str(name)
    }
}

/// Named directions relative to an observer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negation of [`Direction::Right`].
    Left,
    /// Observer's right.
    Right,
    /// Negation of [`Direction::Forward`].
    Back,
    /// Observer's forward.
    Forward,
    /// Negation of [`Direction::Up`].
    Down,
    /// Observer's up.
    Up,
}

impl Direction {
    /// Every direction, in lookup-table order.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Back,
        Self::Forward,
        Self::Down,
        Self::Up,
    ];

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Back => Self::Forward,
            Self::Forward => Self::Back,
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
            Self::Back => 2,
            Self::Forward => 3,
            Self::Down => 4,
            Self::Up => 5,
        }
    }
}

/// Resolved unit vectors for all six directions of one convention.
///
/// Built from right/forward/up; left/back/down are stored negated at
/// construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DirectionMap {
    vectors: [Vector3; 6],
}

impl DirectionMap {
    /// Builds the map from the three primary directions.
    pub fn new(right: Vector3, forward: Vector3, up: Vector3) -> Self {
        let mut vectors = [Vector3::ZERO; 6];
        vectors[Direction::Right.slot()] = right;
        vectors[Direction::Left.slot()] = -right;
        vectors[Direction::Forward.slot()] = forward;
        vectors[Direction::Back.slot()] = -forward;
        vectors[Direction::Up.slot()] = up;
        vectors[Direction::Down.slot()] = -up;
        Self { vectors }
    }

    /// Unit vector for `direction`.
    pub const fn get(&self, direction: Direction) -> Vector3 {
        self.vectors[direction.slot()]
    }

    /// 3×3 basis matrix with columns right, forward, up.
    pub fn rotation_matrix(&self) -> Mat3 {
        Mat3::from_cols(
            self.get(Direction::Right),
            self.get(Direction::Forward),
            self.get(Direction::Up),
        )
    }
}

impl Index<Direction> for DirectionMap {
    type Output = Vector3;
    fn index(&self, direction: Direction) -> &Vector3 {
        &self.vectors[direction.slot()]
    }
}
