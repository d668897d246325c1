//! src/configuration.rs
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub run: RunSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct RunSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub tasks: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub task_duration_ms: u64,
    pub strategy: Strategy,
}

impl RunSettings {
    pub fn task_duration(&self) -> Duration {
        Duration::from_millis(self.task_duration_ms)
    }
}

/// Which runner the timing harness drives.
#[derive(serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Sequential,
    Threaded,
    Tokio,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Sequential => "sequential",
            Strategy::Threaded => "threaded",
            Strategy::Tokio => "tokio",
        };
        f.write_str(name)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("No current directory: {e}")))?;
    let config_dir = base_path.join("configuration");

    let settings = config::Config::builder()
        .set_default("run.tasks", 5)?
        .set_default("run.task_duration_ms", 1000)?
        .set_default("run.strategy", "threaded")?
        .add_source(config::File::from(config_dir.join("base.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("FORKJOIN")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    settings.try_deserialize::<Settings>()
}
