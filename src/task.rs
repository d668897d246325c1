//! src/task.rs
use crate::error::TaskError;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(usize);

impl TaskId {
    pub fn new(index: usize) -> Self {
        TaskId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Line sink shared by the harness and every task. Each call writes one whole
/// line; lines from different tasks may interleave in any order.
pub trait Output: Send + Sync {
    fn line(&self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn line(&self, line: &str) {
        // println! holds the stdout lock for the whole line
        println!("{line}");
    }
}

/// Collects lines in memory, in the order they were written.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<String>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Output for MemoryOutput {
    fn line(&self, line: &str) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        lines.push(line.to_string());
    }
}

pub fn start_line(id: TaskId) -> String {
    format!("> Running task {id}")
}

pub trait TaskBody: Send + Sync {
    fn run(&self, id: TaskId, output: &dyn Output) -> Result<(), TaskError>;
}

/// Announces itself, then blocks the calling thread for a fixed duration.
#[derive(Debug, Clone)]
pub struct SimulatedDelay {
    duration: Duration,
}

impl SimulatedDelay {
    pub fn new(duration: Duration) -> Self {
        SimulatedDelay { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl TaskBody for SimulatedDelay {
    fn run(&self, id: TaskId, output: &dyn Output) -> Result<(), TaskError> {
        output.line(&start_line(id));
        std::thread::sleep(self.duration);
        Ok(())
    }
}

/// Everything a runner needs: how many tasks, what each one does, and where
/// they write.
#[derive(Clone)]
pub struct Workload {
    task_count: usize,
    body: Arc<dyn TaskBody>,
    output: Arc<dyn Output>,
}

impl Workload {
    pub fn new(task_count: usize, body: Arc<dyn TaskBody>, output: Arc<dyn Output>) -> Self {
        Workload {
            task_count,
            body,
            output,
        }
    }

    pub fn task_count(&self) -> usize {
        self.task_count
    }

    pub fn task_ids(&self) -> impl Iterator<Item = TaskId> {
        (0..self.task_count).map(TaskId::new)
    }

    pub fn body(&self) -> &Arc<dyn TaskBody> {
        &self.body
    }

    pub fn output(&self) -> &Arc<dyn Output> {
        &self.output
    }
}
