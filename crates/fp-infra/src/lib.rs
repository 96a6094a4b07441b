//! Infrastructure adapters for the fingerprint setup flow.

pub mod config;
pub mod proxy;
pub mod time;

pub use config::{load_config, load_script};
pub use proxy::{ScanScript, ScriptedEnrollmentProxy, ScriptedScan};
pub use time::HintTimer;
