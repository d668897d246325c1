//! tests/api/main.rs
mod helpers;
mod startup;
