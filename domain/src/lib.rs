//! Domain layer for tax-intake
//!
//! This crate contains the questionnaire model and the forward-only
//! traversal over it. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Questionnaire
//!
//! A validated, ordered list of [`Question`]s. Ids are positive and
//! strictly increasing, and a question's [`Condition`] may only reference
//! an earlier question, so the traversal never has to look forward.
//!
//! ## Traversal
//!
//! [`Questionnaire::advance`] scans forward from the current index and
//! returns the first question whose condition holds against the answers
//! collected so far, or `None` when the interview is over.

pub mod config;
pub mod core;
pub mod form;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use form::{
    answers::AnswerSet,
    condition::Condition,
    question::{Question, QuestionId},
    questionnaire::Questionnaire,
};
