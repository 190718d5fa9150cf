//! Prerequisite conditions gating question presentation

use crate::form::answers::AnswerSet;
use crate::form::question::QuestionId;

/// Prerequisite for presenting a question.
///
/// A tagged value rather than an embedded predicate, so question lists can
/// be loaded from configuration and evaluation tested in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// The question is always asked.
    Always,
    /// The question is asked only when the recorded answer to `question`,
    /// lowercased, exactly equals `expected` (stored lowercased).
    ///
    /// A missing answer or any other string — `"y"`, `""`, `"Yes please"` —
    /// does not match. The comparison is exact-string after lowercasing,
    /// not fuzzy.
    AnswerEquals {
        question: QuestionId,
        expected: String,
    },
}

impl Condition {
    /// Condition met when `question` was answered `expected`, compared
    /// case-insensitively.
    pub fn answer_equals(question: QuestionId, expected: impl Into<String>) -> Self {
        Self::AnswerEquals {
            question,
            expected: expected.into().to_lowercase(),
        }
    }

    /// Evaluate against the answers collected so far.
    pub fn is_met(&self, answers: &AnswerSet) -> bool {
        match self {
            Condition::Always => true,
            Condition::AnswerEquals { question, expected } => answers
                .get(*question)
                .is_some_and(|answer| answer.to_lowercase() == *expected),
        }
    }

    /// Id of the earlier question this condition reads, if any.
    pub fn depends_on(&self) -> Option<QuestionId> {
        match self {
            Condition::Always => None,
            Condition::AnswerEquals { question, .. } => Some(*question),
        }
    }
}
