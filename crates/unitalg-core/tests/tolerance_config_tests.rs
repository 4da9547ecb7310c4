// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Mutates the process-wide tolerance, so everything lives in a single test
//! (test binaries run their tests on parallel threads).

use unitalg_core::{ConfigError, CoordinateFrame, MathConfig, Quaternion, Tolerance, Vector3};

#[test]
fn installed_config_governs_equality() {
    assert_eq!(Tolerance::active(), Tolerance::DEFAULT);

    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(1.0 + 1e-7, 2.0, 3.0);
    let q = Quaternion::new(0.1, 0.2, 0.3, 0.4);
    let q_near = Quaternion::new(0.1, 0.2 + 1e-7, 0.3, 0.4);
    assert_ne!(a, b);
    assert_ne!(q, q_near);

    let config = MathConfig::from_json_str(
        r#"{ "tolerance": { "rtol": 1e-9, "atol": 1e-6 }, "frame": "ros" }"#,
    )
    .unwrap();
    assert_eq!(config.frame, CoordinateFrame::Ros);

    let previous = config.install().unwrap();
    assert_eq!(previous, Tolerance::DEFAULT);
    assert_eq!(Tolerance::active(), Tolerance::new(1e-9, 1e-6));
    assert_eq!(a, b);
    assert_eq!(q, q_near);
    // Explicit tolerances ignore the global.
    assert!(!a.approx_eq_with(&b, Tolerance::DEFAULT));

    // A rejected config leaves the active tolerance alone.
    let bad = MathConfig {
        tolerance: Tolerance::new(f64::INFINITY, 0.0),
        frame: CoordinateFrame::Unity,
    };
    assert!(matches!(bad.install(), Err(ConfigError::Invalid(_))));
    assert_eq!(Tolerance::active(), Tolerance::new(1e-9, 1e-6));

    let restored = Tolerance::set_active(previous);
    assert_eq!(restored, Tolerance::new(1e-9, 1e-6));
    assert_ne!(a, b);

    // Serialized form parses back to the same config.
    let json = config.to_json_string().unwrap();
    assert_eq!(MathConfig::from_json_slice(json.as_bytes()).unwrap(), config);
}
