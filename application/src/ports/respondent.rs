//! Respondent port: the interactive source of answers.
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`RespondentPort`] - defined here in the application layer
//! - **Adapter**: `InteractivePrompter` - implemented in the presentation layer
//!
//! The runner performs exactly one prompt display and one blocking read
//! per presented question through this interface. [`ScriptedRespondent`]
//! replays canned lines for tests and non-interactive runs.

use intake_domain::Question;
use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised while prompting for an answer.
///
/// Any of these aborts the run. There is no retry loop, and no partial
/// answer set is emitted after an aborted read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// The input stream ended (e.g. Ctrl-D).
    #[error("input stream closed")]
    Eof,

    /// The read was interrupted (e.g. Ctrl-C).
    #[error("prompt interrupted")]
    Interrupted,

    /// Terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(String),
}

/// Port for conversing with the person filling in the questionnaire.
pub trait RespondentPort {
    /// Display the question prompt and block for one line of input.
    ///
    /// Returns the line trimmed of leading/trailing whitespace. An empty
    /// line is a valid answer; no input is ever rejected.
    fn ask(&mut self, question: &Question) -> Result<String, PromptError>;

    /// Show the question's explanation (the opt-in help side-channel).
    fn explain(&mut self, question: &Question);
}

/// Replays a fixed sequence of answers.
///
/// Once the sequence is exhausted, further reads fail with
/// [`PromptError::Eof`], matching an interactive stream that was closed.
pub struct ScriptedRespondent {
    replies: VecDeque<String>,
}

impl ScriptedRespondent {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl RespondentPort for ScriptedRespondent {
    fn ask(&mut self, _question: &Question) -> Result<String, PromptError> {
        self.replies
            .pop_front()
            .map(|line| line.trim().to_string())
            .ok_or(PromptError::Eof)
    }

    fn explain(&mut self, _question: &Question) {}
}
