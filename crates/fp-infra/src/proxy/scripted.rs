//! Scripted enrollment proxy.
//!
//! Replays a fixed sequence of scans into the enrollment event loop each time
//! enrollment starts. Stands in for the fingerprint service on machines
//! without a sensor.

use std::sync::Arc;
use std::time::Duration;

use fp_core::{
    enrollment::{FingerprintScan, ScanResult},
    ports::EnrollmentProxyPort,
};
use serde::Deserialize;
use tokio::sync::{mpsc, Mutex};
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, info};

fn default_fingers() -> u32 {
    1
}

/// A scan script as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanScript {
    /// Number of fingers to enroll in one session.
    #[serde(default = "default_fingers")]
    pub fingers: u32,
    #[serde(default, rename = "scan")]
    pub scans: Vec<ScriptedScan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptedScan {
    #[serde(default)]
    pub is_complete: bool,
    pub result: ScanResult,
    #[serde(default)]
    pub percent_complete: u8,
    /// Pause before this scan is delivered.
    #[serde(default)]
    pub delay_ms: u64,
}

impl ScriptedScan {
    pub fn scan(&self) -> FingerprintScan {
        FingerprintScan::new(self.is_complete, self.result, self.percent_complete)
    }
}

impl ScanScript {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Time needed to replay every scan once.
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.scans.iter().map(|scan| scan.delay_ms).sum())
    }
}

pub struct ScriptedEnrollmentProxy {
    script: Arc<ScanScript>,
    sender: mpsc::Sender<FingerprintScan>,
    replay: Mutex<Option<AbortHandle>>,
}

impl ScriptedEnrollmentProxy {
    pub fn new(script: ScanScript, sender: mpsc::Sender<FingerprintScan>) -> Self {
        Self {
            script: Arc::new(script),
            sender,
            replay: Mutex::new(None),
        }
    }
}

#[async_trait::async_trait]
impl EnrollmentProxyPort for ScriptedEnrollmentProxy {
    async fn start_enroll(&self) -> anyhow::Result<()> {
        let mut replay = self.replay.lock().await;
        if let Some(previous) = replay.take() {
            previous.abort();
        }

        let script = Arc::clone(&self.script);
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            for (index, scripted) in script.scans.iter().enumerate() {
                sleep(Duration::from_millis(scripted.delay_ms)).await;
                if sender.send(scripted.scan()).await.is_err() {
                    debug!(index, "scan receiver dropped, stopping replay");
                    return;
                }
            }
            debug!("scan replay finished");
        });

        *replay = Some(handle.abort_handle());
        info!(scans = self.script.scans.len(), "scripted enrollment started");
        Ok(())
    }

    async fn cancel_current_enroll(&self) -> anyhow::Result<()> {
        if let Some(handle) = self.replay.lock().await.take() {
            handle.abort();
            info!("scripted enrollment cancelled");
        }
        Ok(())
    }
}
