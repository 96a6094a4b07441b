//! Dependency wiring for a scripted enrollment session.

use std::sync::Arc;

use fp_app::{EnrollmentEventLoop, EnrollmentOrchestrator};
use fp_core::config::EnrollmentConfig;
use fp_infra::{HintTimer, ScanScript, ScriptedEnrollmentProxy};
use tokio::sync::{mpsc, Mutex, Notify};
use tokio_util::sync::CancellationToken;

use crate::adapters::{ConsoleDialog, ConsoleEventPort, ConsoleProgressArc};

const SCAN_CHANNEL_CAPACITY: usize = 32;
const HINT_CHANNEL_CAPACITY: usize = 4;

pub struct Wiring {
    pub orchestrator: Arc<EnrollmentOrchestrator>,
    pub event_loop: EnrollmentEventLoop,
    pub events: Arc<ConsoleEventPort>,
    pub fingerprint_added: Arc<Notify>,
    pub shutdown: CancellationToken,
}

pub fn wire_dependencies(config: EnrollmentConfig, script: ScanScript) -> Wiring {
    let (scan_tx, scan_rx) = mpsc::channel(SCAN_CHANNEL_CAPACITY);
    let (hint_tx, hint_rx) = mpsc::channel(HINT_CHANNEL_CAPACITY);

    let fingerprint_added = Arc::new(Notify::new());
    let events = Arc::new(ConsoleEventPort::new(fingerprint_added.clone()));
    let proxy = Arc::new(ScriptedEnrollmentProxy::new(script, scan_tx));
    let timer = Arc::new(Mutex::new(HintTimer::new(hint_tx)));

    let orchestrator = Arc::new(EnrollmentOrchestrator::new(
        config,
        proxy,
        Arc::new(ConsoleProgressArc),
        Arc::new(ConsoleDialog::default()),
        events.clone(),
        timer,
    ));

    let shutdown = CancellationToken::new();
    let event_loop =
        EnrollmentEventLoop::new(orchestrator.clone(), scan_rx, hint_rx, shutdown.clone());

    Wiring {
        orchestrator,
        event_loop,
        events,
        fingerprint_added,
        shutdown,
    }
}
