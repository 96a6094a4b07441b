use serde::{Deserialize, Serialize};

use super::scan::FingerprintScan;
use super::state::HintTicket;

/// Events that drive the enrollment flow.
///
/// 驱动录入流程的事件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentEvent {
    /// The setup dialog is opened.
    ///
    /// 打开录入对话框。
    Open,
    /// The setup dialog is closed (cancel or done).
    ///
    /// 关闭录入对话框。
    Close,
    /// User asks to enroll one more finger after a completed attempt.
    ///
    /// 用户请求再录入一枚指纹。
    AddAnotherFingerprint,
    /// A scan result arrived from the enrollment service.
    ///
    /// 收到一次扫描结果。
    ScanReceived(FingerprintScan),
    /// The lift-finger hint delay elapsed.
    ///
    /// 抬起手指提示的延时已到。
    HintElapsed { ticket: HintTicket },
}
