//! Configuration for a divination session.

use crate::context::QuestionType;

/// Configuration for a divination session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Reject a question that was already asked in this session.
    pub repeat_guard: bool,
    /// Attach mantra guidance to readings.
    pub guidance: bool,
    /// Attach the Xiao Liu Ren palace to readings.
    pub xiaoliuren: bool,
    /// Category used until the session changes it.
    pub question_type: QuestionType,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            repeat_guard: true,
            guidance: true,
            xiaoliuren: true,
            question_type: QuestionType::General,
        }
    }
}

impl SessionConfig {
    /// Enable or disable the repeated-question guard.
    pub fn with_repeat_guard(mut self, enabled: bool) -> Self {
        self.repeat_guard = enabled;
        self
    }

    /// Enable or disable mantra guidance.
    pub fn with_guidance(mut self, enabled: bool) -> Self {
        self.guidance = enabled;
        self
    }

    /// Enable or disable the Xiao Liu Ren cast.
    pub fn with_xiaoliuren(mut self, enabled: bool) -> Self {
        self.xiaoliuren = enabled;
        self
    }

    /// Set the starting question category.
    pub fn with_question_type(mut self, question_type: QuestionType) -> Self {
        self.question_type = question_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert!(cfg.repeat_guard);
        assert!(cfg.guidance);
        assert!(cfg.xiaoliuren);
        assert_eq!(cfg.question_type, QuestionType::General);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_repeat_guard(false)
            .with_guidance(false)
            .with_xiaoliuren(false)
            .with_question_type(QuestionType::Love);
        assert!(!cfg.repeat_guard);
        assert!(!cfg.guidance);
        assert!(!cfg.xiaoliuren);
        assert_eq!(cfg.question_type, QuestionType::Love);
    }
}
