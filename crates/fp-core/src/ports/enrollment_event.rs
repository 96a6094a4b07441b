use crate::enrollment::EnrollmentView;

#[async_trait::async_trait]
pub trait EnrollmentEventPort: Send + Sync {
    /// Fired exactly once per completed attempt.
    async fn emit_fingerprint_added(&self);
    async fn emit_state_changed(&self, view: EnrollmentView);
}
