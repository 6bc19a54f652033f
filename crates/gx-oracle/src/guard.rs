//! Repeated-question guard.
//!
//! Questions are compared after trimming and lowercasing. The key ignores
//! the date and the category, so the same words asked tomorrow or under a
//! different category are still a repeat. Empty questions are never
//! recorded.

use std::collections::HashSet;

use crate::error::{OracleError, OracleResult};

/// Remembers which questions were already asked.
#[derive(Debug, Clone, Default)]
pub struct QuestionGuard {
    asked: HashSet<String>,
}

impl QuestionGuard {
    /// An empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    fn normalize(question: &str) -> String {
        question.trim().to_lowercase()
    }

    /// Fail if `question` was already recorded.
    pub fn check(&self, question: &str) -> OracleResult<()> {
        let key = Self::normalize(question);
        if !key.is_empty() && self.asked.contains(&key) {
            tracing::warn!(question = %key, "repeated question rejected");
            return Err(OracleError::RepeatedQuestion(question.trim().to_string()));
        }
        Ok(())
    }

    /// Remember `question`. Returns `false` if it was already known or empty.
    pub fn record(&mut self, question: &str) -> bool {
        let key = Self::normalize(question);
        !key.is_empty() && self.asked.insert(key)
    }

    /// [`check`](Self::check) then [`record`](Self::record).
    pub fn check_and_record(&mut self, question: &str) -> OracleResult<()> {
        self.check(question)?;
        self.record(question);
        Ok(())
    }

    /// Number of distinct questions recorded.
    pub fn len(&self) -> usize {
        self.asked.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.asked.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.asked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ask_passes() {
        let mut g = QuestionGuard::new();
        assert!(g.check_and_record("Will it rain?").is_ok());
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn repeat_is_rejected_after_normalizing() {
        let mut g = QuestionGuard::new();
        g.check_and_record("Will it rain?").unwrap();
        let err = g.check_and_record("  will it RAIN?  ").unwrap_err();
        assert_eq!(err, OracleError::RepeatedQuestion("will it RAIN?".to_string()));
        assert!(err.to_string().contains("初筮告"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn empty_questions_are_not_guarded() {
        let mut g = QuestionGuard::new();
        assert!(g.check_and_record("").is_ok());
        assert!(g.check_and_record("   ").is_ok());
        assert!(g.is_empty());
    }

    #[test]
    fn check_does_not_record() {
        let g = QuestionGuard::new();
        assert!(g.check("会升职吗").is_ok());
        assert!(g.is_empty());
    }

    #[test]
    fn clear_forgets() {
        let mut g = QuestionGuard::new();
        g.record("会升职吗");
        assert!(!g.record("会升职吗"));
        g.clear();
        assert!(g.check("会升职吗").is_ok());
    }
}
