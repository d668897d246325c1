//! src/telemetry.rs
use tracing_subscriber::prelude::*;

/// Installs the global subscriber. Diagnostics go to stderr so stdout only
/// carries the run transcript.
pub fn init_tracing(service_name: &'static str) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_target(false),
        )
        .try_init()?;

    tracing::debug!(service_name, "tracing initialised");
    Ok(())
}
