//! Fingerprint setup library
//!
//! Wires the enrollment flow to console presentation adapters and runs a
//! scripted enrollment session.

pub mod adapters;
pub mod bootstrap;

pub use bootstrap::run::{run_app, SessionReport};
