//! Interactive terminal prompter.
//!
//! Implements [`RespondentPort`] over a rustyline editor: one prompt
//! display and one blocking line read per question. The rendered prompt
//! is:
//!
//! ```text
//!
//! Q4: Did you support any dependents in 2024?
//! > _
//! ```
//!
//! Closing the stream (Ctrl-D) or interrupting the read (Ctrl-C) aborts
//! the run through [`PromptError`]; there is no retry.

use colored::Colorize;
use intake_application::{PromptError, RespondentPort};
use intake_domain::Question;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Terminal adapter for asking questions and reading answers.
pub struct InteractivePrompter {
    editor: DefaultEditor,
}

impl InteractivePrompter {
    pub fn new() -> Result<Self, PromptError> {
        let editor = DefaultEditor::new().map_err(|e| PromptError::Io(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl RespondentPort for InteractivePrompter {
    fn ask(&mut self, question: &Question) -> Result<String, PromptError> {
        println!();
        println!("Q{}: {}", question.id(), question.text());

        match self.editor.readline("> ") {
            Ok(line) => Ok(line.trim().to_string()),
            Err(ReadlineError::Eof) => Err(PromptError::Eof),
            Err(ReadlineError::Interrupted) => Err(PromptError::Interrupted),
            Err(e) => Err(PromptError::Io(e.to_string())),
        }
    }

    fn explain(&mut self, question: &Question) {
        if question.explanation().is_empty() {
            println!("{}", "No explanation available for this question.".dimmed());
        } else {
            println!("{}", question.explanation().dimmed());
        }
    }
}
