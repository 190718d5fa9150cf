//! Raw TOML form-file data types
//!
//! These structs represent the exact structure of a form file. They are
//! deserialized directly and converted into validated domain types.
//!
//! ```toml
//! [[question]]
//! id = 1
//! text = "Did you support any dependents in 2024?"
//! explanation = "Dependents may qualify you for credits."
//!
//! [[question]]
//! id = 2
//! text = "If yes, please provide the name and SSN of each dependent:"
//! when = { question = 1, equals = "yes" }
//! ```

use intake_domain::{Condition, DomainError, Question, QuestionId, Questionnaire};
use serde::Deserialize;

/// Complete form file (raw TOML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct FormFile {
    #[serde(rename = "question", default)]
    pub questions: Vec<FileQuestion>,
}

/// One `[[question]]` entry
#[derive(Debug, Clone, Deserialize)]
pub struct FileQuestion {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub explanation: String,
    /// Prerequisite clause; the question is always asked when absent
    pub when: Option<FileCondition>,
}

/// Prerequisite clause: `when = { question = 4, equals = "yes" }`
#[derive(Debug, Clone, Deserialize)]
pub struct FileCondition {
    pub question: u32,
    pub equals: String,
}

impl FormFile {
    /// Convert into a validated questionnaire.
    ///
    /// Ordering and reference invariants are enforced by
    /// [`Questionnaire::new`], so file-defined forms get the same
    /// guarantees as the built-in catalog.
    pub fn into_questionnaire(self) -> Result<Questionnaire, DomainError> {
        let questions = self
            .questions
            .into_iter()
            .map(|raw| {
                let mut question =
                    Question::new(QuestionId::new(raw.id), raw.text, raw.explanation);
                if let Some(when) = raw.when {
                    question = question.with_condition(Condition::answer_equals(
                        QuestionId::new(when.question),
                        when.equals,
                    ));
                }
                question
            })
            .collect();
        Questionnaire::new(questions)
    }
}
