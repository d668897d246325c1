//! src/report.rs
use crate::error::TaskError;
use crate::task::TaskId;

#[derive(Debug)]
pub enum TaskStatus {
    Completed,
    Failed(TaskError),
}

#[derive(Debug)]
pub struct TaskOutcome {
    pub id: TaskId,
    pub status: TaskStatus,
}

impl TaskOutcome {
    pub fn from_result(id: TaskId, result: Result<(), TaskError>) -> Self {
        let status = match result {
            Ok(()) => TaskStatus::Completed,
            Err(e) => TaskStatus::Failed(e),
        };
        TaskOutcome { id, status }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed)
    }
}

/// Outcome of every task a runner launched, in launch order.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<TaskOutcome>,
}

impl RunReport {
    pub fn with_capacity(capacity: usize) -> Self {
        RunReport {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, outcome: TaskOutcome) {
        match &outcome.status {
            TaskStatus::Completed => tracing::debug!(task = %outcome.id, "task joined"),
            TaskStatus::Failed(e) => tracing::warn!(task = %outcome.id, error = %e, "task failed"),
        }
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[TaskOutcome] {
        &self.outcomes
    }

    pub fn joined(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.outcomes
            .iter()
            .filter(|o| o.is_completed())
            .map(|o| o.id)
    }

    pub fn failed(&self) -> impl Iterator<Item = (TaskId, &TaskError)> + '_ {
        self.outcomes.iter().filter_map(|o| match &o.status {
            TaskStatus::Failed(e) => Some((o.id, e)),
            TaskStatus::Completed => None,
        })
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(TaskOutcome::is_completed)
    }
}
