//! Run intake use case
//!
//! Drives one interview over a questionnaire: ask, record, advance.

use crate::ports::respondent::{PromptError, RespondentPort};
use intake_domain::{AnswerSet, Questionnaire};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running an interview
#[derive(Error, Debug)]
pub enum RunIntakeError {
    #[error("prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

/// Use case for running one intake interview.
///
/// Walks the questionnaire strictly forward, recording one answer per
/// presented question. A recorded index is never revisited, and a
/// condition is evaluated against the answers as they stood when the
/// traversal reached it, never retroactively.
pub struct RunIntakeUseCase {
    questionnaire: Questionnaire,
    explain_enabled: bool,
}

impl RunIntakeUseCase {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self {
            questionnaire,
            explain_enabled: false,
        }
    }

    /// Enable the `?` explanation side-channel.
    ///
    /// Off by default: the base flow performs exactly one prompt and one
    /// read per question and records any input verbatim, `?` included.
    /// When enabled, a reply of `?` shows the current question's
    /// explanation and asks the same question again instead of being
    /// recorded.
    pub fn with_explain(mut self, enabled: bool) -> Self {
        self.explain_enabled = enabled;
        self
    }

    /// Execute the interview, returning the accumulated answers.
    pub fn execute<R: RespondentPort>(
        &self,
        respondent: &mut R,
    ) -> Result<AnswerSet, RunIntakeError> {
        info!(
            "Starting intake run with {} questions",
            self.questionnaire.len()
        );

        let mut answers = AnswerSet::new();
        let mut position = self.questionnaire.start();

        while let Some(index) = position {
            let Some(question) = self.questionnaire.get(index) else {
                break;
            };

            debug!("Asking question {}", question.id());
            let reply = respondent.ask(question)?;

            if self.explain_enabled && reply == "?" {
                respondent.explain(question);
                continue;
            }

            answers.record(question.id(), reply);

            let next = self.questionnaire.advance(index, &answers);
            let skipped_until = next.unwrap_or(self.questionnaire.len());
            for skipped in &self.questionnaire.questions()[index + 1..skipped_until] {
                debug!("Skipping question {}: condition not met", skipped.id());
            }
            position = next;
        }

        info!("Intake run complete: {} answers recorded", answers.len());
        Ok(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::respondent::ScriptedRespondent;
    use intake_domain::{Condition, Question, QuestionId};

    fn q(id: u32, text: &str, explanation: &str) -> Question {
        Question::new(QuestionId::new(id), text, explanation)
    }

    /// Seven-question fixture shaped like the built-in intake form.
    fn intake_form() -> Questionnaire {
        Questionnaire::new(vec![
            q(1, "Full name?", "For identification."),
            q(2, "SSN?", "Matches your records."),
            q(3, "Marital status?", "Affects filing status."),
            q(4, "Any dependents?", "May qualify you for credits."),
            q(5, "Dependent details:", "Details are required.")
                .with_condition(Condition::answer_equals(QuestionId::new(4), "yes")),
            q(6, "Health coverage all year?", "May affect your taxes."),
            q(7, "Received a 1095 form?", "Reports your coverage.")
                .with_condition(Condition::answer_equals(QuestionId::new(6), "no")),
        ])
        .unwrap()
    }

    fn presented_ids(answers: &AnswerSet) -> Vec<u32> {
        answers.iter().map(|(id, _)| id.get()).collect()
    }

    #[test]
    fn test_run_without_dependents() {
        let use_case = RunIntakeUseCase::new(intake_form());
        let mut respondent =
            ScriptedRespondent::new(["Jane Doe", "123-45-6789", "single", "no", "yes"]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(presented_ids(&answers), vec![1, 2, 3, 4, 6]);
        assert_eq!(answers.get(QuestionId::new(5)), None);
        assert_eq!(answers.get(QuestionId::new(7)), None);
    }

    #[test]
    fn test_run_with_dependents() {
        let use_case = RunIntakeUseCase::new(intake_form());
        let mut respondent = ScriptedRespondent::new([
            "Jane Doe",
            "123-45-6789",
            "married",
            "yes",
            "Sam Doe, 987-65-4321",
            "yes",
        ]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(presented_ids(&answers), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            answers.get(QuestionId::new(5)),
            Some("Sam Doe, 987-65-4321")
        );
    }

    #[test]
    fn test_run_without_coverage_asks_followup() {
        let use_case = RunIntakeUseCase::new(intake_form());
        let mut respondent =
            ScriptedRespondent::new(["Jane", "123", "single", "no", "no", "1095-B"]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(presented_ids(&answers), vec![1, 2, 3, 4, 6, 7]);
        assert_eq!(answers.get(QuestionId::new(7)), Some("1095-B"));
    }

    #[test]
    fn test_case_variants_match_conditions() {
        let use_case = RunIntakeUseCase::new(intake_form());
        // "Yes" to dependents presents 5; "YES" to coverage skips 7.
        let mut respondent =
            ScriptedRespondent::new(["Jane", "123", "single", "Yes", "Sam", "YES"]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(presented_ids(&answers), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unmatched_answers_skip_both_conditionals() {
        let use_case = RunIntakeUseCase::new(intake_form());
        let mut respondent =
            ScriptedRespondent::new(["Jane", "123", "single", "maybe", "maybe"]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(presented_ids(&answers), vec![1, 2, 3, 4, 6]);
    }

    #[test]
    fn test_empty_lines_are_valid_answers() {
        let use_case = RunIntakeUseCase::new(intake_form());
        let mut respondent = ScriptedRespondent::new(["", "", "", "", ""]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(presented_ids(&answers), vec![1, 2, 3, 4, 6]);
        assert_eq!(answers.get(QuestionId::new(1)), Some(""));
    }

    #[test]
    fn test_question_mark_recorded_verbatim_by_default() {
        let use_case = RunIntakeUseCase::new(intake_form());
        let mut respondent = ScriptedRespondent::new(["?", "?", "?", "?", "?"]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(answers.get(QuestionId::new(1)), Some("?"));
    }

    #[test]
    fn test_explain_reasks_same_question() {
        let use_case = RunIntakeUseCase::new(intake_form()).with_explain(true);
        let mut respondent =
            ScriptedRespondent::new(["?", "Jane", "123", "single", "no", "yes"]);
        let answers = use_case.execute(&mut respondent).unwrap();
        assert_eq!(presented_ids(&answers), vec![1, 2, 3, 4, 6]);
        // The `?` was consumed by the help channel, not recorded.
        assert_eq!(answers.get(QuestionId::new(1)), Some("Jane"));
    }

    #[test]
    fn test_closed_input_aborts_run() {
        let use_case = RunIntakeUseCase::new(intake_form());
        let mut respondent = ScriptedRespondent::new(["Jane", "123"]);
        let result = use_case.execute(&mut respondent);
        assert!(matches!(
            result,
            Err(RunIntakeError::Prompt(PromptError::Eof))
        ));
    }

    #[test]
    fn test_empty_questionnaire_completes_immediately() {
        let use_case = RunIntakeUseCase::new(Questionnaire::new(vec![]).unwrap());
        let mut respondent = ScriptedRespondent::new(Vec::<String>::new());
        let answers = use_case.execute(&mut respondent).unwrap();
        assert!(answers.is_empty());
    }
}
