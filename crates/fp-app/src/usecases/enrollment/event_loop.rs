//! Enrollment event loop.
//!
//! Single consumer of the scan stream and of hint-timer callbacks. Each input
//! is dispatched to completion before the next one is read.

use std::sync::Arc;

use fp_core::enrollment::{FingerprintScan, HintTicket};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::orchestrator::{EnrollmentError, EnrollmentOrchestrator};

pub struct EnrollmentEventLoop {
    orchestrator: Arc<EnrollmentOrchestrator>,
    scans: mpsc::Receiver<FingerprintScan>,
    hints: mpsc::Receiver<HintTicket>,
    shutdown: CancellationToken,
}

impl EnrollmentEventLoop {
    pub fn new(
        orchestrator: Arc<EnrollmentOrchestrator>,
        scans: mpsc::Receiver<FingerprintScan>,
        hints: mpsc::Receiver<HintTicket>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            orchestrator,
            scans,
            hints,
            shutdown,
        }
    }

    /// Runs until shutdown is requested or the scan stream closes.
    pub async fn run(mut self) -> Result<(), EnrollmentError> {
        info!("enrollment event loop started");
        loop {
            // Scans are polled before hint tickets: a queued scan supersedes the
            // hint it races with, and the ticket it leaves behind is dropped as stale.
            tokio::select! {
                biased;

                _ = self.shutdown.cancelled() => {
                    info!("enrollment event loop shutting down");
                    break;
                }
                scan = self.scans.recv() => match scan {
                    Some(scan) => {
                        debug!(?scan, "scan received");
                        self.orchestrator.on_scan_received(scan).await?;
                    }
                    None => {
                        info!("scan stream closed");
                        break;
                    }
                },
                Some(ticket) = self.hints.recv() => {
                    debug!(%ticket, "hint timer elapsed");
                    self.orchestrator.on_hint_elapsed(ticket).await?;
                }
            }
        }

        Ok(())
    }
}
