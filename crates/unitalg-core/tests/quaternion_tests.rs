// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use unitalg_core::math::Mat3;
use unitalg_core::{MathError, Quaternion, Tolerance, Vector3};

fn approx_eq3(a: Vector3, b: [f64; 3]) {
    const TOL: f64 = 1e-9;
    for i in 0..3 {
        let diff = (a[i] - b[i]).abs();
        assert!(diff <= TOL, "index {i}: {a} vs {b:?}, diff={diff}");
    }
}

fn test_quats() -> Vec<Quaternion> {
    vec![
        Quaternion::IDENTITY,
        Quaternion::new(1.0, 0.0, 0.0, 0.0),
        Quaternion::new(0.0, 1.0, 0.0, 0.0),
        Quaternion::new(0.0, 0.0, 1.0, 0.0),
        Quaternion::new(2.0, 4.0, 1.0, 0.5).normalized(),
        Quaternion::new(-4.0, 1.0, 8.0, -0.35).normalized(),
        Quaternion::new(-1.0, 2.0, -9.0, 7.0).normalized(),
    ]
}

#[test]
fn from_slice_requires_four_components() {
    let q = Quaternion::from_slice(&[0.1, 0.2, 0.3, 0.4]).unwrap();
    assert_eq!(q.to_array(), [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(
        Quaternion::from_slice(&[1.0, 2.0, 3.0]),
        Err(MathError::SizeMismatch {
            expected: 4,
            got: 3
        })
    );
    assert!(Quaternion::from_slice(&[0.0; 5]).is_err());
}

#[test]
fn new_does_not_normalize() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(q.to_array(), [1.0, 2.0, 3.0, 4.0]);
    assert!(!q.is_normalized());
    assert!(q.normalized().is_normalized());
    assert_eq!(Quaternion::default().to_array(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn setters_write_single_components() {
    let mut q = Quaternion::IDENTITY;
    q.set_x(0.5);
    q.set_y(-0.5);
    q.set_z(0.25);
    q.set_w(2.0);
    assert_eq!(q.to_array(), [0.5, -0.5, 0.25, 2.0]);
    assert_eq!(q.vector().to_array(), [0.5, -0.5, 0.25]);
}

#[test]
fn angle_axis_quarter_turn_about_z() {
    let q = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::UNIT_Z).unwrap();
    approx_eq3(q * Vector3::UNIT_X, [0.0, 1.0, 0.0]);
    approx_eq3(q * Vector3::UNIT_Y, [-1.0, 0.0, 0.0]);
    approx_eq3(q * Vector3::UNIT_Z, [0.0, 0.0, 1.0]);
    assert!((q.angle() - FRAC_PI_2).abs() < 1e-12);
    approx_eq3(q.axis(), [0.0, 0.0, 1.0]);
}

#[test]
fn angle_axis_normalizes_axis() {
    let a = Quaternion::from_angle_axis(1.0, Vector3::new(0.0, 0.0, 5.0)).unwrap();
    let b = Quaternion::from_angle_axis(1.0, Vector3::UNIT_Z).unwrap();
    assert_eq!(a, b);
    assert!(a.is_normalized());
}

#[test]
fn degenerate_axis_is_rejected() {
    assert_eq!(
        Quaternion::from_angle_axis(1.0, Vector3::ZERO),
        Err(MathError::DegenerateAxis)
    );
    assert_eq!(
        Quaternion::from_angle_axis(1.0, Vector3::new(f64::NAN, 0.0, 1.0)),
        Err(MathError::DegenerateAxis)
    );
    assert!(Quaternion::from_angle_axis(1.0, Vector3::POSITIVE_INFINITY).is_err());
}

#[test]
fn negated_angle_and_axis_is_same_rotation() {
    let axis = Vector3::new(1.0, -2.0, 0.5);
    let a = Quaternion::from_angle_axis(0.8, axis).unwrap();
    let b = Quaternion::from_angle_axis(-0.8, -axis).unwrap();
    assert_eq!(a, b);
}

#[test]
fn negative_angle_extracts_as_flipped_axis() {
    let axis = Vector3::new(1.0, -2.0, 0.5);
    let q = Quaternion::from_angle_axis(-0.8, axis).unwrap();
    let (angle, got) = q.angle_axis();
    assert!((angle - 0.8).abs() < 1e-12);
    assert_eq!(got, -axis.normalized());

    let (angle, got) = Quaternion::from_angle_axis(-1.5 * PI, Vector3::UNIT_Y)
        .unwrap()
        .angle_axis();
    assert!((angle - 1.5 * PI).abs() < 1e-9);
    approx_eq3(got, [0.0, -1.0, 0.0]);
}

#[test]
fn angle_is_in_zero_to_two_pi() {
    let q = Quaternion::from_angle_axis(1.5 * PI, Vector3::UNIT_X).unwrap();
    assert!((q.angle() - 1.5 * PI).abs() < 1e-9);
    approx_eq3(q.axis(), [1.0, 0.0, 0.0]);
}

#[test]
fn product_applies_right_operand_first() {
    let rz = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::UNIT_Z).unwrap();
    let rx = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::UNIT_X).unwrap();
    // rx takes +Y to +Z, which rz leaves fixed.
    approx_eq3((rz * rx) * Vector3::UNIT_Y, [0.0, 0.0, 1.0]);
    // rz takes +Y to -X, which rx leaves fixed.
    approx_eq3((rx * rz) * Vector3::UNIT_Y, [-1.0, 0.0, 0.0]);
    for q in test_quats() {
        let v = Vector3::new(3.0, 6.0, 2.0);
        assert_eq!((q * rz) * v, q * (rz * v));
    }
}

#[test]
fn product_does_not_commute() {
    let a = Quaternion::new(2.0, 4.0, 1.0, 0.5).normalized();
    let b = Quaternion::new(-4.0, 1.0, 8.0, -0.35).normalized();
    assert_ne!(a * b, b * a);
    assert!(!(a * b).same_rotation(&(b * a)));
}

#[test]
fn identity_is_neutral() {
    for q in test_quats() {
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
    }
}

#[test]
fn inverse_cancels_for_non_unit_input() {
    let q = Quaternion::new(1.0, -2.0, 0.5, 3.0);
    assert_eq!(q * q.inverse(), Quaternion::IDENTITY);
    assert_eq!(q.inverse() * q, Quaternion::IDENTITY);
    let unit = q.normalized();
    assert_eq!(unit.inverse(), unit.conjugate());
    assert_eq!(q.conjugate().to_array(), [-1.0, 2.0, -0.5, 3.0]);
}

#[test]
fn rotation_preserves_length() {
    let v = Vector3::new(-4.0, 1.5, 9.0);
    for q in test_quats() {
        let r = q * v;
        assert!((r.magnitude() - v.magnitude()).abs() < 1e-9, "{q}");
    }
}

#[test]
fn euler_composes_yaw_pitch_roll() {
    let (x, y, z) = (0.3, -0.7, 1.1);
    let composed = Quaternion::from_angle_axis(y, Vector3::UNIT_Y).unwrap()
        * Quaternion::from_angle_axis(z, Vector3::UNIT_Z).unwrap()
        * Quaternion::from_angle_axis(x, Vector3::UNIT_X).unwrap();
    assert_eq!(Quaternion::from_euler(x, y, z), composed);
}

#[test]
fn eulers_round_trip() {
    let q = Quaternion::from_euler(0.3, -0.7, 1.1);
    approx_eq3(q.eulers(), [0.3, -0.7, 1.1]);
    for q in test_quats() {
        let e = q.eulers();
        assert!(Quaternion::from_euler(e.x(), e.y(), e.z()).same_rotation(&q), "{q}");
    }
}

#[test]
fn eulers_at_gimbal_lock_fold_roll_into_yaw() {
    let up = Quaternion::from_euler(0.25, 0.4, FRAC_PI_2);
    approx_eq3(up.eulers(), [0.0, 0.65, FRAC_PI_2]);

    let down = Quaternion::from_euler(0.25, 0.4, -FRAC_PI_2);
    approx_eq3(down.eulers(), [0.0, 0.15, -FRAC_PI_2]);

    for q in [up, down] {
        let e = q.eulers();
        assert!(!e.is_nan());
        assert!(Quaternion::from_euler(e.x(), e.y(), e.z()).same_rotation(&q));
    }
}

#[test]
fn rotation_matrix_round_trip() {
    for q in test_quats() {
        let m = q.to_rotation_matrix();
        assert_eq!(m.multiply(&m.transpose()), Mat3::identity(), "{q}");
        assert!((m.determinant() - 1.0).abs() < 1e-12);
        assert!(Quaternion::from_rotation_matrix(&m).same_rotation(&q), "{q}");
    }
}

#[test]
fn rotation_matrix_of_quarter_turn() {
    let q = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::UNIT_Z).unwrap();
    let expected = Mat3::from_rows([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(q.to_rotation_matrix(), expected);
}

#[test]
fn lerp_hits_both_endpoints_and_midpoint() {
    let a = Quaternion::IDENTITY;
    let b = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::UNIT_Z).unwrap();
    assert_eq!(a.lerp(&b, 0.0), a);
    assert!(a.lerp(&b, 1.0).same_rotation(&b));
    let mid = Quaternion::from_angle_axis(FRAC_PI_4, Vector3::UNIT_Z).unwrap();
    assert!(a.lerp(&b, 0.5).same_rotation(&mid));

    let c = Quaternion::new(-4.0, 1.0, 8.0, -0.35).normalized();
    let d = Quaternion::new(2.0, 4.0, 1.0, 0.5).normalized();
    assert!(c.lerp(&d, 1.0).same_rotation(&d));
    assert!(c.lerp(&d, 0.0).same_rotation(&c));
}

#[test]
fn lerp_between_equal_rotations_is_stationary() {
    let q = Quaternion::new(-1.0, 2.0, -9.0, 7.0).normalized();
    assert_eq!(q.lerp(&q, 0.7), q);
}

#[test]
fn negation_is_the_same_rotation() {
    for q in test_quats() {
        let v = Vector3::new(3.0, 6.0, 2.0);
        assert_eq!((-q) * v, q * v);
        assert!(q.same_rotation(&-q));
    }
}

#[test]
fn equality_is_approximate() {
    let q = Quaternion::new(0.1, 0.2, 0.3, 0.4);
    let near = Quaternion::new(0.1 + 1e-12, 0.2, 0.3, 0.4);
    let far = Quaternion::new(0.1 + 1e-10, 0.2, 0.3, 0.4);
    assert_eq!(q, near);
    assert_ne!(q, far);
    assert!(q.approx_eq_with(&far, Tolerance::new(0.0, 1e-9)));
}

#[test]
fn display_lists_components() {
    let q = Quaternion::new(1.0, 2.5, -3.0, 0.5);
    assert_eq!(q.to_string(), "(1, 2.5, -3, 0.5)");
}
