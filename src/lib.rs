//! src/lib.rs
pub mod configuration;
pub mod error;
pub mod executors;
pub mod harness;
pub mod report;
pub mod startup;
pub mod task;
pub mod telemetry;
