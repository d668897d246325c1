//! src/executors/async_runtime.rs
use crate::error::TaskError;
use crate::executors::Executor;
use crate::report::{RunReport, TaskOutcome};
use crate::task::Workload;
use anyhow::Context;
use tokio::task::JoinHandle;

/// Hands every task to tokio's blocking pool and awaits the handles in launch
/// order.
pub struct TokioExecutor {}

impl TokioExecutor {
    #[tracing::instrument(name = "Run tasks on tokio", skip_all, fields(tasks = workload.task_count()))]
    pub async fn run_async(&self, workload: &Workload) -> RunReport {
        let mut handles: Vec<_> = Vec::with_capacity(workload.task_count());
        for id in workload.task_ids() {
            let body = workload.body().clone();
            let output = workload.output().clone();
            let handle: JoinHandle<Result<(), TaskError>> =
                tokio::task::spawn_blocking(move || {
                    tracing::debug!(task = %id, "task started");
                    body.run(id, output.as_ref())
                });
            handles.push((id, handle));
        }

        let mut report = RunReport::with_capacity(handles.len());
        for (id, handle) in handles {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) if e.is_panic() => Err(TaskError::from_panic(e.into_panic())),
                Err(e) => Err(TaskError::Failed(e.to_string())),
            };
            report.record(TaskOutcome::from_result(id, result));
        }
        report
    }
}

impl Executor for TokioExecutor {
    fn name(&self) -> &'static str {
        "tokio"
    }

    fn run(&self, workload: &Workload) -> Result<RunReport, anyhow::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_time()
            .build()
            .context("Failed to build tokio runtime")?;
        Ok(runtime.block_on(self.run_async(workload)))
    }
}
