//! Runs one scripted enrollment session end to end.

use std::time::Duration;

use fp_core::config::EnrollmentConfig;
use fp_infra::ScanScript;
use tokio::time::timeout;
use tracing::{info, info_span, warn, Instrument};

use super::wiring::{wire_dependencies, Wiring};

/// Slack on top of the script duration before an attempt is given up.
const ATTEMPT_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Number of completed attempts.
    pub enrolled: u32,
}

pub async fn run_app(config: EnrollmentConfig, script: ScanScript) -> anyhow::Result<SessionReport> {
    let fingers = script.fingers.max(1);
    let attempt_budget = script.duration() + config.hint_delay() + ATTEMPT_GRACE;
    let add_another_allowed = config.allow_add_another_finger;

    let Wiring {
        orchestrator,
        event_loop,
        events,
        fingerprint_added,
        shutdown,
    } = wire_dependencies(config, script);
    let event_loop = tokio::spawn(event_loop.run());

    async {
        orchestrator.open().await?;

        for attempt in 1..=fingers {
            if timeout(attempt_budget, fingerprint_added.notified())
                .await
                .is_err()
            {
                warn!(attempt, "enrollment attempt did not complete in time");
                break;
            }
            info!(attempt, "fingerprint attempt completed");

            if attempt == fingers {
                break;
            }
            if !add_another_allowed {
                info!("adding another finger is disabled");
                break;
            }
            orchestrator.add_another_fingerprint().await?;
        }

        orchestrator.close().await?;
        anyhow::Ok(())
    }
    .instrument(info_span!("session", fingers))
    .await?;

    shutdown.cancel();
    event_loop.await??;

    Ok(SessionReport {
        enrolled: events.enrolled(),
    })
}
