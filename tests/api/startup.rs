//! tests/api/startup.rs
use crate::helpers::spawn_tracing;
use claims::assert_ok;
use forkjoin::configuration::{RunSettings, Settings, Strategy};
use forkjoin::startup::Application;
use forkjoin::task::MemoryOutput;
use std::sync::Arc;

fn settings(tasks: usize, strategy: Strategy) -> Settings {
    Settings {
        run: RunSettings {
            tasks,
            task_duration_ms: 20,
            strategy,
        },
    }
}

#[test]
fn application_uses_the_configured_strategy_and_task_count() {
    spawn_tracing();
    for (strategy, name) in [
        (Strategy::Sequential, "sequential"),
        (Strategy::Threaded, "threaded"),
        (Strategy::Tokio, "tokio"),
    ] {
        let output = Arc::new(MemoryOutput::new());
        let app = Application::build_with_output(settings(3, strategy), output.clone());

        assert_eq!(app.executor().name(), name);
        assert_eq!(app.workload().task_count(), 3);

        let run = assert_ok!(app.run());
        assert_eq!(run.report.joined(), 3);
        assert_eq!(output.lines().len(), 3 + 2);
    }
}
