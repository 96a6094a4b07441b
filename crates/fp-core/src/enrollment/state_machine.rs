//! Enrollment state machine.
//!
//! Defines a pure state transition function for the fingerprint enrollment flow.
//! Side effects are returned as [`EnrollmentAction`]s and executed by the caller.

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

use super::action::EnrollmentAction;
use super::event::EnrollmentEvent;
use super::message::MessageKey;
use super::scan::{FingerprintScan, ScanResult};
use super::state::{EnrollmentState, HintTicket};
use super::step::EnrollStep;

const FULL_PERCENT: u8 = 100;

/// Pure enrollment state machine.
///
/// 纯状态机：不包含副作用。
pub struct EnrollmentStateMachine;

impl EnrollmentStateMachine {
    pub fn transition(
        state: EnrollmentState,
        event: EnrollmentEvent,
    ) -> (EnrollmentState, Vec<EnrollmentAction>) {
        match event {
            EnrollmentEvent::Open => Self::open(state),
            EnrollmentEvent::Close => Self::close(state),
            EnrollmentEvent::AddAnotherFingerprint => Self::add_another_fingerprint(state),
            EnrollmentEvent::ScanReceived(scan) => Self::scan_received(state, scan),
            EnrollmentEvent::HintElapsed { ticket } => Self::hint_elapsed(state, ticket),
        }
    }

    fn open(mut state: EnrollmentState) -> (EnrollmentState, Vec<EnrollmentAction>) {
        if state.dialog_open {
            #[cfg(feature = "tracing")]
            warn!("enrollment open requested while a session is already open");
            return (state, Vec::new());
        }

        let mut actions = Vec::new();
        Self::reset(&mut state, &mut actions);
        state.dialog_open = true;
        actions.push(EnrollmentAction::StartEnroll);
        actions.push(EnrollmentAction::ShowDialog);
        (state, actions)
    }

    fn close(mut state: EnrollmentState) -> (EnrollmentState, Vec<EnrollmentAction>) {
        let was_open = state.dialog_open;
        let mut actions = Vec::new();
        // A completed enrollment is kept; only an unfinished one is cancelled.
        if state.step != EnrollStep::Ready {
            actions.push(EnrollmentAction::CancelEnroll);
        }
        Self::reset(&mut state, &mut actions);
        state.dialog_open = false;
        if was_open {
            actions.push(EnrollmentAction::CloseDialog);
        }
        (state, actions)
    }

    fn add_another_fingerprint(
        mut state: EnrollmentState,
    ) -> (EnrollmentState, Vec<EnrollmentAction>) {
        if !state.dialog_open {
            #[cfg(feature = "tracing")]
            warn!("add another fingerprint requested without an open session");
            return (state, Vec::new());
        }

        let mut actions = Vec::new();
        Self::reset(&mut state, &mut actions);
        // The scanner was already located during the previous attempt.
        state.step = EnrollStep::MoveFinger;
        actions.push(EnrollmentAction::StartEnroll);
        (state, actions)
    }

    fn scan_received(
        mut state: EnrollmentState,
        scan: FingerprintScan,
    ) -> (EnrollmentState, Vec<EnrollmentAction>) {
        if !state.dialog_open {
            #[cfg(feature = "tracing")]
            debug!(?scan, "scan received without an open session, ignoring");
            return (state, Vec::new());
        }

        let mut actions = Vec::new();
        match state.step {
            EnrollStep::LocateScanner => {
                actions.push(EnrollmentAction::ResetArc);
                state.step = EnrollStep::MoveFinger;
                state.percent_complete = 0;
            }
            EnrollStep::MoveFinger if scan.is_complete => {
                state.problem_message = None;
                state.step = EnrollStep::Ready;
                actions.push(EnrollmentAction::SetArcProgress {
                    from: state.percent_complete,
                    to: FULL_PERCENT,
                    is_complete: true,
                });
                state.percent_complete = FULL_PERCENT;
                Self::stop_hint(&mut state, &mut actions);
                actions.push(EnrollmentAction::NotifyFingerprintAdded);
            }
            EnrollStep::MoveFinger => {
                Self::set_problem(&mut state, scan.result, &mut actions);
                let percent = scan.percent_complete.min(FULL_PERCENT);
                if scan.result == ScanResult::Success && percent > state.percent_complete {
                    actions.push(EnrollmentAction::SetArcProgress {
                        from: state.percent_complete,
                        to: percent,
                        is_complete: false,
                    });
                    state.percent_complete = percent;
                }
            }
            // Late callbacks after completion are dropped.
            EnrollStep::Ready => {
                #[cfg(feature = "tracing")]
                debug!(?scan, "scan received after enrollment completed, ignoring");
            }
        }
        (state, actions)
    }

    fn hint_elapsed(
        mut state: EnrollmentState,
        ticket: HintTicket,
    ) -> (EnrollmentState, Vec<EnrollmentAction>) {
        if state.pending_hint != Some(ticket) || state.step != EnrollStep::MoveFinger {
            #[cfg(feature = "tracing")]
            debug!(%ticket, pending = ?state.pending_hint, "stale hint ticket dropped");
            return (state, Vec::new());
        }

        state.pending_hint = None;
        state.problem_message = Some(MessageKey::LiftFinger);
        (state, Vec::new())
    }

    /// Chooses the problem message for a non-terminal scan.
    ///
    /// Any pending hint is cancelled first; a successful partial scan clears the
    /// message and arms a new hint so that only a sustained pause shows it.
    fn set_problem(
        state: &mut EnrollmentState,
        result: ScanResult,
        actions: &mut Vec<EnrollmentAction>,
    ) {
        Self::stop_hint(state, actions);
        match result {
            ScanResult::Success => {
                state.problem_message = None;
                let ticket = state.issue_ticket();
                state.pending_hint = Some(ticket);
                actions.push(EnrollmentAction::StartHintTimer { ticket });
            }
            ScanResult::Partial
            | ScanResult::Insufficient
            | ScanResult::SensorDirty
            | ScanResult::TooSlow
            | ScanResult::TooFast
            | ScanResult::Immobile => {
                state.problem_message = MessageKey::immediate_problem(result);
            }
        }
    }

    fn stop_hint(state: &mut EnrollmentState, actions: &mut Vec<EnrollmentAction>) {
        if state.pending_hint.take().is_some() {
            actions.push(EnrollmentAction::StopHintTimer);
        }
    }

    fn reset(state: &mut EnrollmentState, actions: &mut Vec<EnrollmentAction>) {
        state.step = EnrollStep::LocateScanner;
        state.percent_complete = 0;
        state.problem_message = None;
        Self::stop_hint(state, actions);
        actions.push(EnrollmentAction::ResetArc);
    }
}
