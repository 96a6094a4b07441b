//! # fp-core
//!
//! Core domain models and business logic for the fingerprint setup flow.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod enrollment;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::EnrollmentConfig;
pub use enrollment::{
    EnrollStep, EnrollmentAction, EnrollmentEvent, EnrollmentState, EnrollmentStateMachine,
    EnrollmentView, FingerprintScan, HintTicket, MessageKey, ScanResult,
};
