// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use unitalg_core::{CoordinateFrame, Direction, Transform, Vector3};

const X: Vector3 = Vector3::UNIT_X;
const Y: Vector3 = Vector3::UNIT_Y;
const Z: Vector3 = Vector3::UNIT_Z;

fn assert_maps(from: CoordinateFrame, to: CoordinateFrame, cases: [(Vector3, Vector3); 3]) {
    let conv = Transform::conversion_from_to(from, to);
    for (input, expected) in cases {
        assert_eq!(conv * input, expected, "{from} -> {to}: {input}");
    }
}

#[test]
fn normal_math_to_unity_swaps_y_and_z() {
    assert_maps(
        CoordinateFrame::NormalMath,
        CoordinateFrame::Unity,
        [(X, X), (Y, Z), (Z, Y)],
    );
}

#[test]
fn normal_math_and_ros() {
    assert_maps(
        CoordinateFrame::NormalMath,
        CoordinateFrame::Ros,
        [(X, -Y), (Y, X), (Z, Z)],
    );
    assert_maps(
        CoordinateFrame::Ros,
        CoordinateFrame::NormalMath,
        [(X, Y), (Y, -X), (Z, Z)],
    );
}

#[test]
fn unity_and_ros() {
    assert_maps(
        CoordinateFrame::Unity,
        CoordinateFrame::Ros,
        [(X, -Y), (Y, Z), (Z, X)],
    );
    assert_maps(
        CoordinateFrame::Ros,
        CoordinateFrame::Unity,
        [(X, Z), (Y, -X), (Z, Y)],
    );
}

#[test]
fn open_cv_and_ros() {
    assert_maps(
        CoordinateFrame::OpenCv,
        CoordinateFrame::Ros,
        [(X, -Y), (Y, -Z), (Z, X)],
    );
    assert_maps(
        CoordinateFrame::Ros,
        CoordinateFrame::OpenCv,
        [(X, Z), (Y, -X), (Z, -Y)],
    );
}

#[test]
fn ros_imu_flips_up() {
    assert_maps(
        CoordinateFrame::Ros,
        CoordinateFrame::RosImu,
        [(X, X), (Y, Y), (Z, -Z)],
    );
}

#[test]
fn conversion_to_self_is_identity() {
    for frame in CoordinateFrame::ALL {
        assert_eq!(
            Transform::conversion_from_to(frame, frame),
            Transform::IDENTITY,
            "{frame}"
        );
    }
}

#[test]
fn conversions_round_trip() {
    let v = Vector3::new(3.0, 6.0, 2.0);
    for from in CoordinateFrame::ALL {
        for to in CoordinateFrame::ALL {
            let there = Transform::conversion_from_to(from, to);
            let back = Transform::conversion_from_to(to, from);
            assert_eq!(back * (there * v), v, "{from} <-> {to}");
        }
    }
}

#[test]
fn conversion_carries_named_directions() {
    for from in CoordinateFrame::ALL {
        for to in CoordinateFrame::ALL {
            let conv = Transform::conversion_from_to(from, to);
            for dir in Direction::ALL {
                assert_eq!(
                    conv * Vector3::direction(from, dir),
                    Vector3::direction(to, dir),
                    "{from} -> {to}: {dir:?}"
                );
            }
        }
    }
}

#[test]
fn named_directions_per_frame() {
    assert_eq!(Vector3::up(CoordinateFrame::NormalMath), Z);
    assert_eq!(Vector3::forward(CoordinateFrame::Ros), X);
    assert_eq!(Vector3::left(CoordinateFrame::Ros), Y);
    assert_eq!(Vector3::down(CoordinateFrame::RosImu), Z);
    assert_eq!(Vector3::up(CoordinateFrame::Unity), Y);
    assert_eq!(Vector3::forward(CoordinateFrame::OpenCv), Z);
    assert_eq!(Vector3::down(CoordinateFrame::OpenCv), Y);
    assert_eq!(Vector3::back(CoordinateFrame::Unity), -Z);
    assert_eq!(Vector3::right(CoordinateFrame::Ros), -Y);
}

#[test]
fn direction_map_indexing() {
    let map = CoordinateFrame::Unity.directions();
    assert_eq!(map[Direction::Forward], Z);
    assert_eq!(map.get(Direction::Left), -X);
    assert_eq!(CoordinateFrame::default(), CoordinateFrame::NormalMath);
    assert_eq!(CoordinateFrame::OpenCv.to_string(), "open_cv");
}
