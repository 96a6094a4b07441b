//! Enrollment use cases.
//!
//! This module exposes the enrollment orchestrator and its event loop.

mod context;
pub mod event_loop;
pub mod orchestrator;

pub use event_loop::EnrollmentEventLoop;
pub use orchestrator::{EnrollmentError, EnrollmentOrchestrator};
