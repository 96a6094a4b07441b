//! # Bootstrap configuration
//!
//! Resolves where the enrollment config and the scan script come from.
//! Paths come from the environment (`.env` is honoured); missing paths fall
//! back to the defaults and the bundled demo script.

use std::path::PathBuf;

use anyhow::Context;
use fp_core::config::EnrollmentConfig;
use fp_infra::{load_config, load_script, ScanScript};
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "FP_SETUP_CONFIG";
pub const SCRIPT_PATH_ENV: &str = "FP_SETUP_SCRIPT";

const DEMO_SCRIPT: &str = include_str!("../../resources/demo_scan.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapPaths {
    pub config_path: Option<PathBuf>,
    pub script_path: Option<PathBuf>,
}

impl BootstrapPaths {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(CONFIG_PATH_ENV).ok(),
            std::env::var(SCRIPT_PATH_ENV).ok(),
        )
    }

    /// Empty values count as unset.
    pub fn from_vars(config_path: Option<String>, script_path: Option<String>) -> Self {
        let to_path = |value: Option<String>| value.filter(|v| !v.is_empty()).map(PathBuf::from);
        Self {
            config_path: to_path(config_path),
            script_path: to_path(script_path),
        }
    }

    pub fn load(&self) -> anyhow::Result<(EnrollmentConfig, ScanScript)> {
        let config = match &self.config_path {
            Some(path) => load_config(path)?,
            None => {
                info!("no config path set, using default enrollment config");
                EnrollmentConfig::default()
            }
        };

        let script = match &self.script_path {
            Some(path) => load_script(path)?,
            None => {
                info!("no scan script set, using bundled demo script");
                ScanScript::from_toml_str(DEMO_SCRIPT).context("Invalid bundled demo script")?
            }
        };

        Ok((config, script))
    }
}
