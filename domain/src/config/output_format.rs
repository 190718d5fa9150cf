//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for the final answer dump
///
/// This is a domain concept representing how the collected answers should
/// be rendered once the interview ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Each presented question with its answer, then the JSON dump
    Full,
    /// Only the JSON answer dump (default)
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Json
    }
}
