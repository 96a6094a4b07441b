//! Console presentation adapters.
//!
//! Render the enrollment flow as log lines: the dialog shell, the progress arc
//! and the view snapshots.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use fp_core::enrollment::EnrollmentView;
use fp_core::ports::{DialogPort, EnrollmentEventPort, ProgressArcPort};
use tokio::sync::Notify;
use tracing::info;

#[derive(Default)]
pub struct ConsoleDialog {
    open: AtomicBool,
}

#[async_trait]
impl DialogPort for ConsoleDialog {
    async fn show_modal(&self) {
        self.open.store(true, Ordering::SeqCst);
        info!("[dialog] shown");
    }

    async fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
        info!("[dialog] closed");
    }

    async fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct ConsoleProgressArc;

#[async_trait]
impl ProgressArcPort for ConsoleProgressArc {
    async fn reset(&self) {
        info!("[arc] reset");
    }

    async fn set_progress(&self, from_percent: u8, to_percent: u8, is_complete: bool) {
        info!(from_percent, to_percent, is_complete, "[arc] progress");
    }
}

/// Logs each view snapshot and signals completed attempts.
pub struct ConsoleEventPort {
    added: Arc<Notify>,
    enrolled: AtomicU32,
}

impl ConsoleEventPort {
    pub fn new(added: Arc<Notify>) -> Self {
        Self {
            added,
            enrolled: AtomicU32::new(0),
        }
    }

    pub fn enrolled(&self) -> u32 {
        self.enrolled.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnrollmentEventPort for ConsoleEventPort {
    async fn emit_fingerprint_added(&self) {
        let total = self.enrolled.fetch_add(1, Ordering::SeqCst) + 1;
        info!(total, "[event] fingerprint added");
        self.added.notify_one();
    }

    async fn emit_state_changed(&self, view: EnrollmentView) {
        info!(
            step = %view.step,
            percent = view.percent_complete,
            instruction = view.instruction.map(|key| key.as_str()).unwrap_or(""),
            button = view.close_button_label.as_str(),
            button_class = view.close_button_class.as_str(),
            add_another = !view.hide_add_another,
            "[view] render"
        );
    }
}
