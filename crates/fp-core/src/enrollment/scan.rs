//! Scan results delivered by the enrollment service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result code of a single scan, as reported by the fingerprint service.
///
/// 单次扫描结果码。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanResult {
    /// 扫描成功。
    Success,
    /// Only part of the finger was read.
    ///
    /// 仅读取到部分指纹。
    Partial,
    /// 采集数据不足。
    Insufficient,
    /// 传感器脏污。
    SensorDirty,
    /// 手指移动过慢。
    TooSlow,
    /// 手指移动过快。
    TooFast,
    /// The finger has not moved since the previous scan.
    ///
    /// 手指自上次扫描后未移动。
    Immobile,
}

/// A numeric result code outside the closed set the service is allowed to send.
///
/// 未知的扫描结果码。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown fingerprint scan result code: {0}")]
pub struct UnknownScanResult(pub i32);

impl ScanResult {
    /// Platform wire code.
    pub fn code(&self) -> i32 {
        match self {
            ScanResult::Success => 0,
            ScanResult::Partial => 1,
            ScanResult::Insufficient => 2,
            ScanResult::SensorDirty => 3,
            ScanResult::TooSlow => 4,
            ScanResult::TooFast => 5,
            ScanResult::Immobile => 6,
        }
    }
}

impl TryFrom<i32> for ScanResult {
    type Error = UnknownScanResult;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ScanResult::Success),
            1 => Ok(ScanResult::Partial),
            2 => Ok(ScanResult::Insufficient),
            3 => Ok(ScanResult::SensorDirty),
            4 => Ok(ScanResult::TooSlow),
            5 => Ok(ScanResult::TooFast),
            6 => Ok(ScanResult::Immobile),
            other => Err(UnknownScanResult(other)),
        }
    }
}

/// One reading emitted by the enrollment service.
///
/// 录入服务发出的一次扫描读数。
///
/// `percent_complete` is cumulative for the current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintScan {
    pub is_complete: bool,
    pub result: ScanResult,
    pub percent_complete: u8,
}

impl FingerprintScan {
    pub fn new(is_complete: bool, result: ScanResult, percent_complete: u8) -> Self {
        Self {
            is_complete,
            result,
            percent_complete,
        }
    }

    /// Builds a scan from raw service fields, rejecting unknown result codes.
    pub fn from_raw(
        is_complete: bool,
        result_code: i32,
        percent_complete: i32,
    ) -> Result<Self, UnknownScanResult> {
        let result = ScanResult::try_from(result_code)?;
        Ok(Self::new(
            is_complete,
            result,
            percent_complete.clamp(0, 100) as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_result_codes_match_platform_values() {
        assert_eq!(ScanResult::try_from(0), Ok(ScanResult::Success));
        assert_eq!(ScanResult::try_from(3), Ok(ScanResult::SensorDirty));
        assert_eq!(ScanResult::try_from(6), Ok(ScanResult::Immobile));
        assert_eq!(ScanResult::Immobile.code(), 6);
    }

    #[test]
    fn unknown_result_code_is_rejected() {
        assert_eq!(ScanResult::try_from(7), Err(UnknownScanResult(7)));
        assert_eq!(ScanResult::try_from(-1), Err(UnknownScanResult(-1)));
    }

    #[test]
    fn from_raw_clamps_percent_into_range() {
        let scan = FingerprintScan::from_raw(false, 0, 140).expect("known code");
        assert_eq!(scan.percent_complete, 100);

        let scan = FingerprintScan::from_raw(false, 1, -5).expect("known code");
        assert_eq!(scan.percent_complete, 0);
        assert_eq!(scan.result, ScanResult::Partial);
    }

    #[test]
    fn scan_deserializes_snake_case_result() {
        let scan: FingerprintScan = serde_json::from_str(
            r#"{"is_complete":false,"result":"sensor_dirty","percent_complete":10}"#,
        )
        .expect("valid scan json");
        assert_eq!(scan.result, ScanResult::SensorDirty);
    }
}
