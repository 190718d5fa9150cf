//! Console output formatter for the collected answers

use colored::Colorize;
use intake_domain::{AnswerSet, Questionnaire};

/// Formats the accumulated answer set for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format as a JSON object keyed by stringified question id, in
    /// traversal order, pretty-printed with 2-space indentation.
    pub fn format_json(answers: &AnswerSet) -> String {
        serde_json::to_string_pretty(answers).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format each presented question with its answer, then the JSON dump.
    pub fn format_full(questionnaire: &Questionnaire, answers: &AnswerSet) -> String {
        let mut output = String::new();

        for question in questionnaire.questions() {
            let Some(answer) = answers.get(question.id()) else {
                continue;
            };
            output.push_str(&format!(
                "{} {}\n",
                format!("Q{}:", question.id()).cyan().bold(),
                question.text()
            ));
            if answer.is_empty() {
                output.push_str(&format!("  {}\n", "(no answer)".dimmed()));
            } else {
                output.push_str(&format!("  {}\n", answer));
            }
        }

        output.push('\n');
        output.push_str(&Self::format_json(answers));
        output
    }
}
