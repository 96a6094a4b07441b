/// Modal dialog shell hosting the enrollment flow.
#[async_trait::async_trait]
pub trait DialogPort: Send + Sync {
    async fn show_modal(&self);
    async fn close(&self);
    async fn is_open(&self) -> bool;
}
