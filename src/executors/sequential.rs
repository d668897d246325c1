//! src/executors/sequential.rs
use crate::error::TaskError;
use crate::executors::Executor;
use crate::report::{RunReport, TaskOutcome};
use crate::task::Workload;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub struct SequentialExecutor {}

impl Executor for SequentialExecutor {
    fn name(&self) -> &'static str {
        "sequential"
    }

    #[tracing::instrument(name = "Run tasks sequentially", skip_all, fields(tasks = workload.task_count()))]
    fn run(&self, workload: &Workload) -> Result<RunReport, anyhow::Error> {
        let mut report = RunReport::with_capacity(workload.task_count());
        for id in workload.task_ids() {
            tracing::debug!(task = %id, "task started");
            let result = catch_unwind(AssertUnwindSafe(|| {
                workload.body().run(id, workload.output().as_ref())
            }))
            .unwrap_or_else(|payload| Err(TaskError::from_panic(payload)));
            report.record(TaskOutcome::from_result(id, result));
        }
        Ok(report)
    }
}
