//! Enrollment orchestrator.
//!
//! This module coordinates the enrollment state machine and its side effects.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use fp_core::{
    config::EnrollmentConfig,
    enrollment::{
        EnrollmentAction, EnrollmentEvent, EnrollmentState, EnrollmentStateMachine,
        EnrollmentView, FingerprintScan, HintTicket,
    },
    ports::{DialogPort, EnrollmentEventPort, EnrollmentProxyPort, HintTimerPort, ProgressArcPort},
};

use super::context::EnrollmentContext;

/// Errors produced by the enrollment orchestrator.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    #[error("hint timer failed: {0}")]
    HintTimer(#[source] anyhow::Error),
}

/// Orchestrator that drives enrollment state and side effects.
pub struct EnrollmentOrchestrator {
    context: Arc<EnrollmentContext>,
    config: EnrollmentConfig,

    proxy: Arc<dyn EnrollmentProxyPort>,
    progress_arc: Arc<dyn ProgressArcPort>,
    dialog: Arc<dyn DialogPort>,
    event_port: Arc<dyn EnrollmentEventPort>,
    timer_port: Arc<Mutex<dyn HintTimerPort>>,
}

impl EnrollmentOrchestrator {
    pub fn new(
        config: EnrollmentConfig,
        proxy: Arc<dyn EnrollmentProxyPort>,
        progress_arc: Arc<dyn ProgressArcPort>,
        dialog: Arc<dyn DialogPort>,
        event_port: Arc<dyn EnrollmentEventPort>,
        timer_port: Arc<Mutex<dyn HintTimerPort>>,
    ) -> Self {
        let initial = EnrollmentState::new(config.allow_add_another_finger);
        Self {
            context: EnrollmentContext::new(initial).arc(),
            config,
            proxy,
            progress_arc,
            dialog,
            event_port,
            timer_port,
        }
    }

    pub async fn open(&self) -> Result<EnrollmentView, EnrollmentError> {
        self.dispatch(EnrollmentEvent::Open).await
    }

    pub async fn close(&self) -> Result<EnrollmentView, EnrollmentError> {
        self.dispatch(EnrollmentEvent::Close).await
    }

    pub async fn add_another_fingerprint(&self) -> Result<EnrollmentView, EnrollmentError> {
        self.dispatch(EnrollmentEvent::AddAnotherFingerprint).await
    }

    pub async fn on_scan_received(
        &self,
        scan: FingerprintScan,
    ) -> Result<EnrollmentView, EnrollmentError> {
        self.dispatch(EnrollmentEvent::ScanReceived(scan)).await
    }

    pub async fn on_hint_elapsed(
        &self,
        ticket: HintTicket,
    ) -> Result<EnrollmentView, EnrollmentError> {
        self.dispatch(EnrollmentEvent::HintElapsed { ticket }).await
    }

    pub async fn get_state(&self) -> EnrollmentState {
        self.context.get_state().await
    }

    pub async fn view(&self) -> EnrollmentView {
        EnrollmentView::from_state(&self.context.get_state().await)
    }

    pub async fn dispatch(&self, event: EnrollmentEvent) -> Result<EnrollmentView, EnrollmentError> {
        // Serializes scan events, timer callbacks and user actions.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.enrollment.dispatch", event = ?event);
        async {
            let current = self.context.get_state().await;
            let from = current.step();
            let event_name = format!("{:?}", event);
            let (next, actions) = EnrollmentStateMachine::transition(current, event);
            info!(
                from = %from,
                to = %next.step(),
                percent = next.percent_complete(),
                event = %event_name,
                "enrollment state transition"
            );

            let view = EnrollmentView::from_state(&next);
            self.context.set_state(next).await;
            self.execute_actions(actions).await?;
            self.event_port.emit_state_changed(view.clone()).await;
            Ok(view)
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<EnrollmentAction>) -> Result<(), EnrollmentError> {
        for action in actions {
            debug!(?action, "enrollment executing action");
            match action {
                EnrollmentAction::ResetArc => {
                    self.progress_arc.reset().await;
                }
                EnrollmentAction::SetArcProgress {
                    from,
                    to,
                    is_complete,
                } => {
                    self.progress_arc.set_progress(from, to, is_complete).await;
                }
                EnrollmentAction::StartEnroll => {
                    // Proxy failures surface through the proxy's own channel.
                    if let Err(err) = self.proxy.start_enroll().await {
                        warn!(error = %err, "start enroll failed");
                    }
                }
                EnrollmentAction::CancelEnroll => {
                    if let Err(err) = self.proxy.cancel_current_enroll().await {
                        warn!(error = %err, "cancel current enroll failed");
                    }
                }
                EnrollmentAction::ShowDialog => {
                    self.dialog.show_modal().await;
                }
                EnrollmentAction::CloseDialog => {
                    if self.dialog.is_open().await {
                        self.dialog.close().await;
                    }
                }
                EnrollmentAction::StartHintTimer { ticket } => {
                    let mut timer = self.timer_port.lock().await;
                    timer
                        .start(ticket, self.config.hint_delay())
                        .await
                        .map_err(EnrollmentError::HintTimer)?;
                }
                EnrollmentAction::StopHintTimer => {
                    let mut timer = self.timer_port.lock().await;
                    timer.stop().await.map_err(EnrollmentError::HintTimer)?;
                }
                EnrollmentAction::NotifyFingerprintAdded => {
                    info!("fingerprint enrollment step added");
                    self.event_port.emit_fingerprint_added().await;
                }
            }
        }

        Ok(())
    }
}
