//! # Configuration Loader
//!
//! Reads TOML files into the core DTOs and reports I/O and parse errors with context.

use std::path::Path;

use anyhow::Context;
use fp_core::config::EnrollmentConfig;

use crate::proxy::ScanScript;

/// Load the enrollment configuration from a TOML file.
///
/// Missing keys fall back to [`EnrollmentConfig::default`].
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<EnrollmentConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    EnrollmentConfig::from_toml(&toml_value).context("Invalid [enrollment] section")
}

/// Load a scan script from a TOML file.
pub fn load_script(script_path: &Path) -> anyhow::Result<ScanScript> {
    let content = std::fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read scan script: {}", script_path.display()))?;
    ScanScript::from_toml_str(&content)
        .with_context(|| format!("Invalid scan script: {}", script_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_core::enrollment::ScanResult;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = temp_file_with(
            r#"
            [enrollment]
            allow_add_another_finger = false
            hint_delay_ms = 750
            "#,
        );

        let config = load_config(temp_file.path()).unwrap();
        assert!(!config.allow_add_another_finger);
        assert_eq!(config.hint_delay_ms, 750);
    }

    #[test]
    fn test_load_config_defaults_when_section_missing() {
        let temp_file = temp_file_with("# nothing here\n");

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config, EnrollmentConfig::default());
    }

    #[test]
    fn test_load_config_reports_missing_file() {
        let err = load_config(Path::new("/nonexistent/fp-setup.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let temp_file = temp_file_with("[enrollment\nhint_delay_ms = 1");
        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_script_reads_scans() {
        let temp_file = temp_file_with(
            r#"
            fingers = 2

            [[scan]]
            result = "success"
            percent_complete = 40
            delay_ms = 100

            [[scan]]
            is_complete = true
            result = "success"
            percent_complete = 100
            "#,
        );

        let script = load_script(temp_file.path()).unwrap();
        assert_eq!(script.fingers, 2);
        assert_eq!(script.scans.len(), 2);
        assert_eq!(script.scans[0].result, ScanResult::Success);
        assert!(!script.scans[0].is_complete);
        assert_eq!(script.scans[1].delay_ms, 0);
        assert!(script.scans[1].is_complete);
    }

    #[test]
    fn test_load_script_rejects_unknown_result() {
        let temp_file = temp_file_with(
            r#"
            [[scan]]
            result = "smudged"
            percent_complete = 10
            "#,
        );
        assert!(load_script(temp_file.path()).is_err());
    }
}
