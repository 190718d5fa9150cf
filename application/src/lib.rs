//! Application layer for tax-intake
//!
//! This crate contains the use case that drives one interview and the port
//! definition for the interactive input source. It depends only on the
//! domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::respondent::{PromptError, RespondentPort, ScriptedRespondent};
pub use use_cases::run_intake::{RunIntakeError, RunIntakeUseCase};
