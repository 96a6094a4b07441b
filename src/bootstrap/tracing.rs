//! Tracing configuration for fingerprint setup
//!
//! Initialises the tracing-subscriber registry used by every crate in the
//! workspace.

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// - **Development**: debug level for the enrollment crates
/// - **Production**: info level everywhere
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    vec![
        "info".to_string(),
        format!("fp_core={crate_level}"),
        format!("fp_app={crate_level}"),
        format!("fp_infra={crate_level}"),
        format!("fingerprint_setup_lib={crate_level}"),
    ]
}

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG`; otherwise falls back to [`build_filter_directives`].
/// Output format: `2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message`.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_directives_follow_build_profile() {
        let dev = build_filter_directives(true);
        assert!(dev.contains(&"fp_app=debug".to_string()));

        let prod = build_filter_directives(false);
        assert!(prod.contains(&"fp_app=info".to_string()));
        assert!(prod.iter().all(|d| !d.ends_with("=debug")));
    }

    #[test]
    fn filter_directives_parse() {
        let directives = build_filter_directives(true).join(",");
        assert!(tracing_subscriber::EnvFilter::try_new(directives).is_ok());
    }
}
