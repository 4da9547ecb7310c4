// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Library-wide numeric settings loaded from JSON.
//!
//! ```json
//! { "tolerance": { "rtol": 1e-9, "atol": 1e-9 }, "frame": "unity" }
//! ```
//!
//! Missing fields fall back to their defaults; unknown fields are rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::frame::CoordinateFrame;
use crate::math::Tolerance;

/// Error type for config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization/deserialization failure.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Parsed fine but holds unusable values.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Numeric settings for the library.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MathConfig {
    /// Tolerance used by `==` on vectors, quaternions and transforms.
    pub tolerance: Tolerance,
    /// Frame convention the caller wants for named directions.
    pub frame: CoordinateFrame,
}

impl MathConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    /// [`ConfigError::Serde`] for malformed JSON or unknown fields,
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Byte-slice variant of [`MathConfig::from_json_str`].
    ///
    /// # Errors
    /// As [`MathConfig::from_json_str`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    /// [`ConfigError::Serde`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that both tolerances are finite and non-negative.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] naming the offending values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tolerance.is_valid() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "tolerance must be finite and non-negative (rtol={}, atol={})",
                self.tolerance.rtol, self.tolerance.atol
            )))
        }
    }

    /// Makes `self.tolerance` the process-wide active tolerance and returns
    /// the one it replaced.
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] if validation fails; nothing is installed.
    pub fn install(&self) -> Result<Tolerance, ConfigError> {
        self.validate()?;
        let previous = Tolerance::set_active(self.tolerance);
        info!(
            rtol = self.tolerance.rtol,
            atol = self.tolerance.atol,
            frame = %self.frame,
            "installed math config"
        );
        Ok(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = MathConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MathConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = MathConfig::from_json_str(r#"{"frame":"ros","gravity":9.8}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Serde(_)));
    }

    #[test]
    fn negative_tolerance_is_invalid() {
        let err = MathConfig::from_json_slice(br#"{"tolerance":{"rtol":-1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn parses_frame_names() {
        let config =
            MathConfig::from_json_str(r#"{"frame":"open_cv","tolerance":{"atol":1e-6}}"#).unwrap();
        assert_eq!(config.frame, CoordinateFrame::OpenCv);
        assert_eq!(config.tolerance.atol, 1e-6);
        assert_eq!(config.tolerance.rtol, crate::math::DEFAULT_RTOL);
    }
}
