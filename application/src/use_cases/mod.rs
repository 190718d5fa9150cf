//! Use case implementations

pub mod run_intake;
