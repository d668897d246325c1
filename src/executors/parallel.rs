//! src/executors/parallel.rs
use crate::error::TaskError;
use crate::executors::Executor;
use crate::report::{RunReport, TaskOutcome};
use crate::task::{TaskId, Workload};
use std::thread::{self, JoinHandle};

/// One OS thread per task.
pub struct ParallelExecutor {}

impl Executor for ParallelExecutor {
    fn name(&self) -> &'static str {
        "threaded"
    }

    #[tracing::instrument(name = "Run tasks on threads", skip_all, fields(tasks = workload.task_count()))]
    fn run(&self, workload: &Workload) -> Result<RunReport, anyhow::Error> {
        let mut handles: Vec<(TaskId, Result<JoinHandle<Result<(), TaskError>>, TaskError>)> =
            Vec::with_capacity(workload.task_count());

        for id in workload.task_ids() {
            let body = workload.body().clone();
            let output = workload.output().clone();
            let handle = thread::Builder::new()
                .name(format!("task-{id}"))
                .spawn(move || {
                    tracing::debug!(task = %id, "task started");
                    body.run(id, output.as_ref())
                })
                .map_err(TaskError::Spawn);
            handles.push((id, handle));
        }

        // Join in launch order; a failed or panicked task does not stop the rest.
        let mut report = RunReport::with_capacity(handles.len());
        for (id, handle) in handles {
            let result = handle.and_then(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| Err(TaskError::from_panic(payload)))
            });
            report.record(TaskOutcome::from_result(id, result));
        }
        Ok(report)
    }
}
