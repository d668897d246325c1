//! src/startup.rs
use crate::configuration::{RunSettings, Settings};
use crate::executors::{executor_for, Executor};
use crate::harness::{time_run, TimedRun};
use crate::task::{Output, SimulatedDelay, StdoutOutput, Workload};
use std::sync::Arc;

pub struct Application {
    executor: Box<dyn Executor>,
    workload: Workload,
}

impl Application {
    pub fn build(configuration: Settings) -> Self {
        Self::build_with_output(configuration, Arc::new(StdoutOutput))
    }

    pub fn build_with_output(configuration: Settings, output: Arc<dyn Output>) -> Self {
        let run: RunSettings = configuration.run;
        let body = Arc::new(SimulatedDelay::new(run.task_duration()));
        Application {
            executor: executor_for(run.strategy),
            workload: Workload::new(run.tasks, body, output),
        }
    }

    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    pub fn workload(&self) -> &Workload {
        &self.workload
    }

    #[tracing::instrument(name = "Run application", skip_all, fields(executor = self.executor.name()))]
    pub fn run(&self) -> Result<TimedRun, anyhow::Error> {
        time_run(self.executor.as_ref(), &self.workload)
    }
}
