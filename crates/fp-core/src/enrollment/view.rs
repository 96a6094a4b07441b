//! View properties derived from the enrollment state.
//!
//! Everything here is a pure function of the state; the presentation layer
//! recomputes the snapshot on each render.

use serde::{Deserialize, Serialize};

use super::message::{CloseButtonClass, MessageKey};
use super::state::EnrollmentState;
use super::step::EnrollStep;

/// Read-only snapshot consumed by the presentation layer.
///
/// 供展示层使用的只读快照。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentView {
    pub step: EnrollStep,
    pub percent_complete: u8,
    pub problem_message: Option<MessageKey>,
    pub instruction: Option<MessageKey>,
    pub close_button_label: MessageKey,
    pub close_button_class: CloseButtonClass,
    pub hide_add_another: bool,
    pub show_scanner_location: bool,
    pub show_arc: bool,
}

impl EnrollmentView {
    pub fn from_state(state: &EnrollmentState) -> Self {
        Self {
            step: state.step,
            percent_complete: state.percent_complete,
            problem_message: state.problem_message,
            instruction: instruction_message(state.step, state.problem_message),
            close_button_label: close_button_label(state.step),
            close_button_class: close_button_class(state.step),
            hide_add_another: hide_add_another(state.step, state.allow_add_another_finger()),
            show_scanner_location: show_scanner_location(state.step),
            show_arc: show_arc(state.step),
        }
    }
}

/// Instruction shown for the given step.
///
/// 当前步骤对应的提示信息。
///
/// While moving the finger the instruction is the current problem, which may be empty.
pub fn instruction_message(step: EnrollStep, problem: Option<MessageKey>) -> Option<MessageKey> {
    match step {
        EnrollStep::LocateScanner => Some(MessageKey::LocateScannerInstruction),
        EnrollStep::MoveFinger => problem,
        EnrollStep::Ready => Some(MessageKey::ReadyInstruction),
    }
}

/// 关闭按钮文字：完成后为"完成"，否则为"取消"。
pub fn close_button_label(step: EnrollStep) -> MessageKey {
    match step {
        EnrollStep::Ready => MessageKey::Done,
        EnrollStep::LocateScanner | EnrollStep::MoveFinger => MessageKey::Cancel,
    }
}

pub fn close_button_class(step: EnrollStep) -> CloseButtonClass {
    match step {
        EnrollStep::Ready => CloseButtonClass::ActionButton,
        EnrollStep::LocateScanner | EnrollStep::MoveFinger => CloseButtonClass::CancelButton,
    }
}

/// Hides the add-another control unless enrollment is done and allowed.
///
/// 仅在录入完成且允许时显示"添加另一个指纹"。
pub fn hide_add_another(step: EnrollStep, allow_add_another_finger: bool) -> bool {
    step != EnrollStep::Ready || !allow_add_another_finger
}

pub fn show_scanner_location(step: EnrollStep) -> bool {
    step == EnrollStep::LocateScanner
}

/// 进度环仅在扫描开始后显示。
pub fn show_arc(step: EnrollStep) -> bool {
    matches!(step, EnrollStep::MoveFinger | EnrollStep::Ready)
}
