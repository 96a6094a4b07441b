#[async_trait::async_trait]
pub trait ProgressArcPort: Send + Sync {
    async fn reset(&self);
    async fn set_progress(&self, from_percent: u8, to_percent: u8, is_complete: bool);
}
