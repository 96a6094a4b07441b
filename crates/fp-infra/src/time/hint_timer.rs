use std::time::Duration;

use fp_core::{enrollment::HintTicket, ports::HintTimerPort};
use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::debug;

/// Tokio-backed one-shot hint timer.
///
/// When the delay elapses the ticket is sent to the enrollment event loop.
pub struct HintTimer {
    pending: Option<(HintTicket, tokio::task::AbortHandle)>,
    sender: mpsc::Sender<HintTicket>,
}

impl HintTimer {
    pub fn new(sender: mpsc::Sender<HintTicket>) -> Self {
        Self {
            pending: None,
            sender,
        }
    }

    fn abort_pending(&mut self) {
        if let Some((ticket, handle)) = self.pending.take() {
            handle.abort();
            debug!(%ticket, "hint timer stopped");
        }
    }
}

#[async_trait::async_trait]
impl HintTimerPort for HintTimer {
    async fn start(&mut self, ticket: HintTicket, delay: Duration) -> anyhow::Result<()> {
        self.abort_pending();

        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            if sender.send(ticket).await.is_err() {
                debug!(%ticket, "hint receiver dropped before timer fired");
            }
        });

        self.pending = Some((ticket, handle.abort_handle()));
        debug!(%ticket, delay_ms = delay.as_millis() as u64, "hint timer started");
        Ok(())
    }

    async fn stop(&mut self) -> anyhow::Result<()> {
        self.abort_pending();
        Ok(())
    }
}

impl Drop for HintTimer {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::time::{advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn start_sends_ticket_after_delay() -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = HintTimer::new(tx);

        timer.start(HintTicket(1), Duration::from_millis(2000)).await?;
        tokio::task::yield_now().await;
        advance(Duration::from_millis(1999)).await;
        tokio::task::yield_now().await;
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));

        advance(Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some(HintTicket(1)));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_timer() -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = HintTimer::new(tx);

        timer.start(HintTicket(1), Duration::from_millis(2000)).await?;
        timer.stop().await?;

        assert!(timeout(Duration::from_secs(10), rx.recv()).await.is_err());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn start_replaces_pending_timer() -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel(4);
        let mut timer = HintTimer::new(tx);

        timer.start(HintTicket(1), Duration::from_millis(2000)).await?;
        tokio::task::yield_now().await;
        advance(Duration::from_millis(1500)).await;
        timer.start(HintTicket(2), Duration::from_millis(2000)).await?;
        tokio::task::yield_now().await;

        assert!(timeout(Duration::from_millis(1999), rx.recv()).await.is_err());
        assert_eq!(rx.recv().await, Some(HintTicket(2)));
        assert!(timeout(Duration::from_secs(10), rx.recv()).await.is_err());
        Ok(())
    }
}
