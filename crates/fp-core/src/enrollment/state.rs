use serde::{Deserialize, Serialize};

use super::message::MessageKey;
use super::step::EnrollStep;

/// Identifies one scheduled lift-finger hint.
///
/// A timer callback carrying a ticket other than the pending one is stale and
/// must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HintTicket(pub u64);

impl std::fmt::Display for HintTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hint-{}", self.0)
    }
}

/// Enrollment flow state, held while the setup dialog is open.
///
/// 录入流程状态，仅在对话框打开期间有效。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentState {
    /// Whether an enrollment session (open dialog) is active.
    pub(crate) dialog_open: bool,
    pub(crate) step: EnrollStep,
    /// Cumulative completion of the current attempt, within `[0, 100]`.
    pub(crate) percent_complete: u8,
    /// `None` means no problem is currently shown.
    pub(crate) problem_message: Option<MessageKey>,
    pub(crate) pending_hint: Option<HintTicket>,
    /// Supplied by configuration, never mutated by the flow.
    allow_add_another_finger: bool,
    next_ticket: u64,
}

impl EnrollmentState {
    pub fn new(allow_add_another_finger: bool) -> Self {
        Self {
            dialog_open: false,
            step: EnrollStep::LocateScanner,
            percent_complete: 0,
            problem_message: None,
            pending_hint: None,
            allow_add_another_finger,
            next_ticket: 0,
        }
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn step(&self) -> EnrollStep {
        self.step
    }

    pub fn percent_complete(&self) -> u8 {
        self.percent_complete
    }

    pub fn problem_message(&self) -> Option<MessageKey> {
        self.problem_message
    }

    /// Ticket of the armed lift-finger hint, if any.
    pub fn pending_hint(&self) -> Option<HintTicket> {
        self.pending_hint
    }

    pub fn allow_add_another_finger(&self) -> bool {
        self.allow_add_another_finger
    }

    /// Localisation key of the current problem, empty when there is none.
    pub fn problem_message_key(&self) -> &'static str {
        self.problem_message.map(|key| key.as_str()).unwrap_or("")
    }

    /// Allocates a fresh hint ticket. Tickets are never reused within a state's lifetime.
    pub(crate) fn issue_ticket(&mut self) -> HintTicket {
        self.next_ticket += 1;
        HintTicket(self.next_ticket)
    }
}

impl Default for EnrollmentState {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_message_key_is_empty_without_problem() {
        let mut state = EnrollmentState::new(true);
        assert_eq!(state.problem_message_key(), "");

        state.problem_message = Some(MessageKey::TryAgain);
        assert_eq!(state.problem_message_key(), "configureFingerprintTryAgain");
    }

    #[test]
    fn issued_tickets_are_unique() {
        let mut state = EnrollmentState::default();
        let first = state.issue_ticket();
        let second = state.issue_ticket();
        assert_ne!(first, second);
        assert!(state.allow_add_another_finger());
    }

    #[test]
    fn accessors_expose_fresh_state() {
        let state = EnrollmentState::new(false);
        assert!(!state.dialog_open());
        assert_eq!(state.step(), EnrollStep::LocateScanner);
        assert_eq!(state.percent_complete(), 0);
        assert_eq!(state.problem_message(), None);
        assert_eq!(state.pending_hint(), None);
        assert!(!state.allow_add_another_finger());
    }
}
