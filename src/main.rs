//! src/main.rs
use anyhow::Context;
use forkjoin::configuration::get_configuration;
use forkjoin::startup::Application;
use forkjoin::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    init_tracing("forkjoin")?;
    let configuration = get_configuration().context("Failed to read configuration.")?;
    tracing::debug!(?configuration, "configuration loaded");

    let application = Application::build(configuration);
    let run = application.run()?;

    if !run.report.is_success() {
        anyhow::bail!(
            "{} of {} tasks failed",
            run.report.failed().count(),
            run.report.joined()
        );
    }
    Ok(())
}
