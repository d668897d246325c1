//! src/executors/mod.rs
use crate::configuration::Strategy;
use crate::report::RunReport;
use crate::task::Workload;

/// Runs every task of a workload and joins all of them before returning.
///
/// Task failures land in the [`RunReport`]; the error path is reserved for the
/// runner itself failing to start.
pub trait Executor {
    fn name(&self) -> &'static str;
    fn run(&self, workload: &Workload) -> Result<RunReport, anyhow::Error>;
}

mod parallel;
pub use parallel::ParallelExecutor;

mod sequential;
pub use sequential::SequentialExecutor;

mod async_runtime;
pub use async_runtime::TokioExecutor;

pub fn executor_for(strategy: Strategy) -> Box<dyn Executor> {
    match strategy {
        Strategy::Sequential => Box::new(SequentialExecutor {}),
        Strategy::Threaded => Box::new(ParallelExecutor {}),
        Strategy::Tokio => Box::new(TokioExecutor {}),
    }
}
