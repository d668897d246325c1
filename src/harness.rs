//! src/harness.rs
use crate::executors::Executor;
use crate::report::RunReport;
use crate::task::Workload;
use std::time::{Duration, Instant};
use uuid::Uuid;

pub const START_BANNER: &str = "> program start";

#[derive(Debug)]
pub struct TimedRun {
    pub run_id: Uuid,
    pub elapsed: Duration,
    pub report: RunReport,
}

/// Times one executor over the workload, writing the banner, the elapsed line
/// and one line per failed task to the workload's output.
pub fn time_run(executor: &dyn Executor, workload: &Workload) -> Result<TimedRun, anyhow::Error> {
    let run_id = Uuid::new_v4();
    let span = tracing::info_span!("Timed run", %run_id, executor = executor.name());
    let _guard = span.enter();

    let output = workload.output();
    let start = Instant::now();
    output.line(START_BANNER);

    let report = executor.run(workload)?;

    let elapsed = start.elapsed();
    output.line(&elapsed_line(elapsed));
    for (id, error) in report.failed() {
        output.line(&format!("> task {id} failed: {error}"));
    }

    tracing::info!(
        elapsed_secs = elapsed.as_secs_f64(),
        joined = report.joined(),
        failed = report.failed().count(),
        "run complete"
    );
    Ok(TimedRun {
        run_id,
        elapsed,
        report,
    })
}

pub fn elapsed_line(elapsed: Duration) -> String {
    format!(
        "> total execution time {}s",
        format_significant(elapsed.as_secs_f64(), 2)
    )
}

/// Renders `value` rounded to `digits` significant digits, keeping trailing
/// zeros (`1.0023` with two digits is `1.0`).
pub fn format_significant(value: f64, digits: u32) -> String {
    let digits = digits.max(1) as i32;
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", (digits - 1) as usize, value);
    }
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(magnitude - digits + 1);
    let rounded = (value / scale).round() * scale;
    // rounding can carry into the next power of ten (9.96 -> 10)
    let magnitude = rounded.abs().log10().floor() as i32;
    let decimals = (digits - 1 - magnitude).max(0) as usize;
    format!("{:.*}", decimals, rounded)
}
