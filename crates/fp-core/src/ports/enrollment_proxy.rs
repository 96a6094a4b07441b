/// Enrollment service proxy.
///
/// Scan results flow back to the caller through the channel the proxy was
/// built with, one [`crate::enrollment::FingerprintScan`] per physical scan.
#[async_trait::async_trait]
pub trait EnrollmentProxyPort: Send + Sync {
    /// Begin capturing scan events for a new print.
    async fn start_enroll(&self) -> anyhow::Result<()>;
    /// Abort the in-progress capture.
    async fn cancel_current_enroll(&self) -> anyhow::Result<()>;
}
