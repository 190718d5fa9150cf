//! Ordered question list and forward-only traversal

use crate::core::error::DomainError;
use crate::form::answers::AnswerSet;
use crate::form::question::Question;

/// A validated, ordered questionnaire.
///
/// Construction enforces the invariants the traversal relies on: ids are
/// positive and strictly increasing in list order, and every condition
/// references the id of an earlier question. Forward and self references
/// are unrepresentable in a constructed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn new(questions: Vec<Question>) -> Result<Self, DomainError> {
        for (idx, question) in questions.iter().enumerate() {
            if question.id().get() == 0 {
                return Err(DomainError::ZeroQuestionId);
            }
            if idx > 0 {
                let earlier = questions[idx - 1].id();
                if question.id() <= earlier {
                    return Err(DomainError::OutOfOrderIds {
                        earlier,
                        later: question.id(),
                    });
                }
            }
            if let Some(depends_on) = question.condition().depends_on() {
                if !questions[..idx].iter().any(|q| q.id() == depends_on) {
                    return Err(DomainError::ForwardReference {
                        question: question.id(),
                        depends_on,
                    });
                }
            }
        }
        Ok(Self { questions })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Questions in display order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Index of the first question of a run, or `None` for an empty list.
    ///
    /// The first question is always unconditional: a condition on it would
    /// be a forward reference, which construction rejects.
    pub fn start(&self) -> Option<usize> {
        if self.questions.is_empty() { None } else { Some(0) }
    }

    /// First index after `current` whose condition holds against `answers`,
    /// or `None` when no further question qualifies (the terminal state).
    ///
    /// Stateless and deterministic: the same `(current, answers)` pair
    /// always yields the same result.
    pub fn advance(&self, current: usize, answers: &AnswerSet) -> Option<usize> {
        self.questions
            .iter()
            .enumerate()
            .skip(current + 1)
            .find(|(_, question)| question.condition().is_met(answers))
            .map(|(idx, _)| idx)
    }
}
