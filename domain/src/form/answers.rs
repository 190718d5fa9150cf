//! Answer set accumulated during a single run

use crate::form::question::QuestionId;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Mapping from question id to the raw string the respondent typed.
///
/// Grows monotonically during one run and an entry is never rewritten:
/// the traversal never revisits a recorded question. Serializes as a JSON
/// object keyed by stringified ids in insertion (traversal) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(QuestionId, String)>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer to `question`. Empty strings are valid answers.
    pub fn record(&mut self, question: QuestionId, answer: impl Into<String>) {
        debug_assert!(
            self.get(question).is_none(),
            "answer recorded twice for question {question}"
        );
        self.entries.push((question, answer.into()));
    }

    /// The recorded answer to `question`, if it was presented.
    pub fn get(&self, question: QuestionId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| *id == question)
            .map(|(_, answer)| answer.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &str)> {
        self.entries.iter().map(|(id, answer)| (*id, answer.as_str()))
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, answer) in &self.entries {
            map.serialize_entry(&id.to_string(), answer)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new(1), "Jane Doe");
        answers.record(QuestionId::new(2), "");
        assert_eq!(answers.get(QuestionId::new(1)), Some("Jane Doe"));
        assert_eq!(answers.get(QuestionId::new(2)), Some(""));
        assert_eq!(answers.get(QuestionId::new(3)), None);
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new(1), "a");
        answers.record(QuestionId::new(2), "b");
        answers.record(QuestionId::new(4), "no");
        answers.record(QuestionId::new(6), "yes");
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":"a","2":"b","4":"no","6":"yes"}"#);
    }

    #[test]
    fn test_pretty_print_two_space_indent() {
        let mut answers = AnswerSet::new();
        answers.record(QuestionId::new(1), "Jane");
        answers.record(QuestionId::new(4), "no");
        let json = serde_json::to_string_pretty(&answers).unwrap();
        assert_eq!(json, "{\n  \"1\": \"Jane\",\n  \"4\": \"no\"\n}");
    }

    #[test]
    fn test_empty_set_serializes_to_empty_object() {
        let json = serde_json::to_string(&AnswerSet::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
