//! Port interfaces for the enrollment flow
//!
//! Ports define the contract between the enrollment logic (use cases) and the
//! collaborators around it: the enrollment service, the dialog shell, the
//! progress arc and the hint timer. The core never knows how they are built.

mod dialog;
mod enrollment_event;
mod enrollment_proxy;
mod progress_arc;
mod timer;

pub use dialog::DialogPort;
pub use enrollment_event::EnrollmentEventPort;
pub use enrollment_proxy::EnrollmentProxyPort;
pub use progress_arc::ProgressArcPort;
pub use timer::HintTimerPort;
