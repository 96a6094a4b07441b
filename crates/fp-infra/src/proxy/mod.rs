mod scripted;

pub use scripted::{ScanScript, ScriptedEnrollmentProxy, ScriptedScan};
