use fingerprint_setup_lib::bootstrap::{config::BootstrapPaths, tracing::init_tracing_subscriber};
use fingerprint_setup_lib::run_app;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    init_tracing_subscriber()?;

    let paths = BootstrapPaths::from_env();
    let (config, script) = paths.load()?;

    match run_app(config, script).await {
        Ok(report) => {
            info!(enrolled = report.enrolled, "fingerprint setup finished");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "fingerprint setup failed");
            Err(err)
        }
    }
}
