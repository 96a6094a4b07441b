use std::time::Duration;

use crate::enrollment::HintTicket;

/// One-shot timer for the lift-finger hint.
///
/// At most one timer is pending: `start` replaces any previous one. When it
/// fires, the implementation reports the ticket back to the enrollment loop.
#[async_trait::async_trait]
pub trait HintTimerPort: Send {
    async fn start(&mut self, ticket: HintTicket, delay: Duration) -> anyhow::Result<()>;
    async fn stop(&mut self) -> anyhow::Result<()>;
}
