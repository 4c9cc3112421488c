//! Question records.

use serde::{Deserialize, Serialize};

/// Stable identifier of a question within a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(pub i64);

impl QuestionId {
    /// Create a new question ID.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Question({})", self.0)
    }
}

/// A yes/no question.
///
/// Values handed out by the store are copies; only the store flips `used`
/// on its own entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub category: i64,
    pub difficulty: i64,
    pub used: bool,
    /// The factually correct answer. Recorded and displayed, but the strike
    /// rule ignores it.
    pub correct_answer: bool,
}

impl Question {
    /// Create an unused question.
    #[must_use]
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        category: i64,
        difficulty: i64,
        correct_answer: bool,
    ) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            difficulty,
            used: false,
            correct_answer,
        }
    }

    /// Set the used flag (builder pattern).
    #[must_use]
    pub fn with_used(mut self, used: bool) -> Self {
        self.used = used;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_question_is_unused() {
        let q = Question::new(QuestionId::new(3), "Is water wet?", 1, 2, true);
        assert_eq!(q.id.raw(), 3);
        assert!(!q.used);
        assert!(q.correct_answer);
        assert!(q.with_used(true).used);
    }

    #[test]
    fn test_question_id_display() {
        assert_eq!(QuestionId::new(12).to_string(), "Question(12)");
    }
}
