//! The questionnaire subdomain.
//!
//! - [`question::Question`] — one unit of the interview, with id, prompt
//!   text, help text, and a prerequisite condition
//! - [`condition::Condition`] — gates whether a question is presented
//! - [`answers::AnswerSet`] — id → raw response mapping for one run
//! - [`questionnaire::Questionnaire`] — the validated ordered list and the
//!   forward-only traversal over it

pub mod answers;
pub mod condition;
pub mod question;
pub mod questionnaire;
