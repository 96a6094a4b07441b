use serde::{Deserialize, Serialize};

use super::state::HintTicket;

/// Side-effects produced by enrollment transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentAction {
    /// Reset the progress arc.
    ///
    /// 重置进度环。
    ResetArc,
    /// Animate the progress arc between two percentages.
    ///
    /// 更新进度环。
    SetArcProgress {
        from: u8,
        to: u8,
        is_complete: bool,
    },
    /// Ask the enrollment service to start capturing a new print.
    ///
    /// 开始录入。
    StartEnroll,
    /// Abort the in-progress capture.
    ///
    /// 取消当前录入。
    CancelEnroll,
    /// Show the setup dialog.
    ///
    /// 显示对话框。
    ShowDialog,
    /// Close the setup dialog if it is still open.
    ///
    /// 关闭对话框（若仍打开）。
    CloseDialog,
    /// Schedule the lift-finger hint.
    ///
    /// 启动提示计时器。
    StartHintTimer { ticket: HintTicket },
    /// Cancel the pending lift-finger hint.
    ///
    /// 取消提示计时器。
    StopHintTimer,
    /// Fire the "fingerprint added" notification.
    ///
    /// 通知已添加指纹。
    NotifyFingerprintAdded,
}
