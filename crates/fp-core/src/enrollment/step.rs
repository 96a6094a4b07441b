use serde::{Deserialize, Serialize};

/// The steps of the fingerprint setup flow.
///
/// 指纹录入流程的步骤。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollStep {
    /// The user needs to locate the scanner.
    ///
    /// 用户需要找到传感器位置。
    #[default]
    LocateScanner,
    /// The user needs to move the finger around the scanner.
    ///
    /// 用户需要在传感器上移动手指。
    MoveFinger,
    /// The scanner has read the fingerprint successfully.
    ///
    /// 传感器已成功读取指纹。
    Ready,
}

impl EnrollStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnrollStep::LocateScanner => "locate_scanner",
            EnrollStep::MoveFinger => "move_finger",
            EnrollStep::Ready => "ready",
        }
    }
}

impl std::fmt::Display for EnrollStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
