//! Enrollment domain module.
//!
//! This module defines the fingerprint enrollment state machine types and the
//! view properties derived from its state.

pub mod action;
pub mod event;
pub mod message;
pub mod scan;
pub mod state;
pub mod state_machine;
pub mod step;
pub mod view;

pub use action::EnrollmentAction;
pub use event::EnrollmentEvent;
pub use message::{CloseButtonClass, MessageKey};
pub use scan::{FingerprintScan, ScanResult, UnknownScanResult};
pub use state::{EnrollmentState, HintTicket};
pub use state_machine::EnrollmentStateMachine;
pub use step::EnrollStep;
pub use view::EnrollmentView;
