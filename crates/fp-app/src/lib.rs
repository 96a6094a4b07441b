//! Fingerprint setup application orchestration layer
//!
//! This crate contains the enrollment use cases and the event loop that feeds
//! them scan results and hint-timer callbacks.

pub mod usecases;

pub use usecases::enrollment::{EnrollmentError, EnrollmentEventLoop, EnrollmentOrchestrator};
