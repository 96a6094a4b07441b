//! # Enrollment configuration DTO
//!
//! Pure data: TOML → DTO mapping with the documented defaults. Loading the
//! file is the infrastructure layer's job.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Delay before the lift-finger hint shows after a successful partial scan.
pub const DEFAULT_HINT_DELAY_MS: u64 = 2000;

/// Enrollment configuration.
///
/// 录入配置。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrollmentConfig {
    /// Whether the user may enroll another finger after a completed attempt.
    pub allow_add_another_finger: bool,
    /// Debounce window for the lift-finger hint.
    pub hint_delay_ms: u64,
}

impl Default for EnrollmentConfig {
    fn default() -> Self {
        Self {
            allow_add_another_finger: true,
            hint_delay_ms: DEFAULT_HINT_DELAY_MS,
        }
    }
}

impl EnrollmentConfig {
    /// Create EnrollmentConfig from a TOML value.
    ///
    /// Reads the `[enrollment]` table; a missing table or key keeps the default.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        match toml_value.get("enrollment") {
            Some(section) => Ok(section.clone().try_into()?),
            None => Ok(Self::default()),
        }
    }

    pub fn hint_delay(&self) -> Duration {
        Duration::from_millis(self.hint_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_toml_reads_enrollment_section() {
        let value: toml::Value = toml::from_str(
            r#"
            [enrollment]
            allow_add_another_finger = false
            hint_delay_ms = 500
            "#,
        )
        .unwrap();

        let config = EnrollmentConfig::from_toml(&value).unwrap();
        assert!(!config.allow_add_another_finger);
        assert_eq!(config.hint_delay(), Duration::from_millis(500));
    }

    #[test]
    fn from_toml_missing_values_use_defaults() {
        let value: toml::Value = toml::from_str(
            r#"
            [enrollment]
            hint_delay_ms = 1500
            "#,
        )
        .unwrap();
        let config = EnrollmentConfig::from_toml(&value).unwrap();
        assert!(config.allow_add_another_finger);
        assert_eq!(config.hint_delay_ms, 1500);

        let empty: toml::Value = toml::from_str("").unwrap();
        assert_eq!(
            EnrollmentConfig::from_toml(&empty).unwrap(),
            EnrollmentConfig::default()
        );
    }

    #[test]
    fn from_toml_rejects_wrong_types() {
        let value: toml::Value = toml::from_str(
            r#"
            [enrollment]
            hint_delay_ms = "soon"
            "#,
        )
        .unwrap();
        assert!(EnrollmentConfig::from_toml(&value).is_err());
    }
}
