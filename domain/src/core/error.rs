//! Domain error types

use crate::form::question::QuestionId;
use thiserror::Error;

/// Domain-level errors
///
/// All variants are questionnaire construction failures: once a
/// [`crate::Questionnaire`] exists, traversal over it cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("question ids must be positive")]
    ZeroQuestionId,

    #[error("question ids must be strictly increasing: {later} follows {earlier}")]
    OutOfOrderIds {
        earlier: QuestionId,
        later: QuestionId,
    },

    #[error(
        "question {question} depends on question {depends_on}, which is not an earlier question"
    )]
    ForwardReference {
        question: QuestionId,
        depends_on: QuestionId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_reference_display() {
        let error = DomainError::ForwardReference {
            question: QuestionId::new(3),
            depends_on: QuestionId::new(5),
        };
        assert_eq!(
            error.to_string(),
            "question 3 depends on question 5, which is not an earlier question"
        );
    }

    #[test]
    fn test_out_of_order_display() {
        let error = DomainError::OutOfOrderIds {
            earlier: QuestionId::new(4),
            later: QuestionId::new(2),
        };
        assert_eq!(
            error.to_string(),
            "question ids must be strictly increasing: 2 follows 4"
        );
    }
}
