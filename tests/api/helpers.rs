//! tests/api/helpers.rs
use forkjoin::error::TaskError;
use forkjoin::task::{
    start_line, MemoryOutput, Output, SimulatedDelay, TaskBody, TaskId, Workload,
};
use forkjoin::telemetry::init_tracing;
use std::collections::HashSet;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_tracing("tests::api").expect("Failed to setup tracing");
    }
});

pub const TASK_DURATION: Duration = Duration::from_millis(200);

pub fn spawn_tracing() {
    LazyLock::force(&TRACING);
}

pub fn delay_workload(tasks: usize) -> (Workload, Arc<MemoryOutput>) {
    spawn_tracing();
    let output = Arc::new(MemoryOutput::new());
    let workload = Workload::new(
        tasks,
        Arc::new(SimulatedDelay::new(TASK_DURATION)),
        output.clone(),
    );
    (workload, output)
}

/// Indices announced by `> Running task {i}` lines, asserting none repeats.
pub fn started_indices(lines: &[String]) -> HashSet<usize> {
    let mut seen = HashSet::new();
    for line in lines {
        if let Some(index) = line.strip_prefix("> Running task ") {
            let index: usize = index.parse().expect("Task line should end in an index");
            assert!(seen.insert(index), "task {index} started twice");
        }
    }
    seen
}

/// Sleeps like the default body, but fails or panics for chosen indices.
pub struct FlakyBody {
    pub delay: Duration,
    pub fail: Vec<usize>,
    pub panic: Vec<usize>,
}

impl TaskBody for FlakyBody {
    fn run(&self, id: TaskId, output: &dyn Output) -> Result<(), TaskError> {
        output.line(&start_line(id));
        std::thread::sleep(self.delay);
        if self.panic.contains(&id.index()) {
            panic!("task {id} blew up");
        }
        if self.fail.contains(&id.index()) {
            return Err(TaskError::Failed(format!("task {id} gave up")));
        }
        Ok(())
    }
}

pub fn flaky_workload(
    tasks: usize,
    fail: Vec<usize>,
    panic: Vec<usize>,
) -> (Workload, Arc<MemoryOutput>) {
    spawn_tracing();
    let output = Arc::new(MemoryOutput::new());
    let body = FlakyBody {
        delay: Duration::from_millis(50),
        fail,
        panic,
    };
    (Workload::new(tasks, Arc::new(body), output.clone()), output)
}
