//! Localisation keys selected by the enrollment flow.
//!
//! The flow only picks a key; rendering the text is up to the presentation layer.

use serde::{Deserialize, Serialize};

use super::scan::ScanResult;

/// Localisation key for a message the flow can show.
///
/// 录入流程可显示的本地化消息键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    /// Ask the user to find the scanner.
    ///
    /// 提示用户找到传感器。
    LocateScannerInstruction,
    /// Enrollment finished.
    ///
    /// 录入已完成。
    ReadyInstruction,
    /// The last scan was unusable.
    ///
    /// 上次扫描无效，请重试。
    TryAgain,
    /// The finger did not move between scans.
    ///
    /// 手指在两次扫描之间没有移动。
    MoveFinger,
    /// Deferred hint after a quiet period.
    ///
    /// 静止一段时间后的抬起手指提示。
    LiftFinger,
    /// 完成
    Done,
    /// 取消
    Cancel,
}

impl MessageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::LocateScannerInstruction => {
                "configureFingerprintInstructionLocateScannerStep"
            }
            MessageKey::ReadyInstruction => "configureFingerprintInstructionReadyStep",
            MessageKey::TryAgain => "configureFingerprintTryAgain",
            MessageKey::MoveFinger => "configureFingerprintImmobile",
            MessageKey::LiftFinger => "configureFingerprintLiftFinger",
            MessageKey::Done => "done",
            MessageKey::Cancel => "cancel",
        }
    }

    /// Problem message shown right away for a non-successful scan.
    ///
    /// `Success` has no immediate message; the lift-finger hint is deferred.
    pub fn immediate_problem(result: ScanResult) -> Option<MessageKey> {
        match result {
            ScanResult::Success => None,
            ScanResult::Partial
            | ScanResult::Insufficient
            | ScanResult::SensorDirty
            | ScanResult::TooSlow
            | ScanResult::TooFast => Some(MessageKey::TryAgain),
            ScanResult::Immobile => Some(MessageKey::MoveFinger),
        }
    }
}

impl std::fmt::Display for MessageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style class of the close button.
///
/// 关闭按钮的样式类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseButtonClass {
    /// Primary style, used once enrollment is done.
    ///
    /// 主按钮样式，录入完成后使用。
    ActionButton,
    /// 取消按钮样式。
    CancelButton,
}

impl CloseButtonClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloseButtonClass::ActionButton => "action-button",
            CloseButtonClass::CancelButton => "cancel-button",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_results_map_to_try_again() {
        for result in [
            ScanResult::Partial,
            ScanResult::Insufficient,
            ScanResult::SensorDirty,
            ScanResult::TooSlow,
            ScanResult::TooFast,
        ] {
            assert_eq!(
                MessageKey::immediate_problem(result),
                Some(MessageKey::TryAgain)
            );
        }
    }

    #[test]
    fn immobile_maps_to_move_finger_and_success_has_no_message() {
        assert_eq!(
            MessageKey::immediate_problem(ScanResult::Immobile),
            Some(MessageKey::MoveFinger)
        );
        assert_eq!(MessageKey::immediate_problem(ScanResult::Success), None);
        assert_eq!(MessageKey::MoveFinger.as_str(), "configureFingerprintImmobile");
    }
}
