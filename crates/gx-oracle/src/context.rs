//! Divination inputs.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{OracleError, OracleResult};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The category a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Anything.
    #[default]
    General,
    /// Illness and recovery.
    Health,
    /// Worry, unrest, state of mind.
    Mental,
    /// Work and study.
    Career,
    /// Relationships.
    Love,
}

impl QuestionType {
    /// All categories.
    pub fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Health,
            Self::Mental,
            Self::Career,
            Self::Love,
        ]
    }

    /// Parse a category from its English name or Chinese label.
    pub fn parse(s: &str) -> OracleResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" | "一般" => Ok(Self::General),
            "health" | "健康" => Ok(Self::Health),
            "mental" | "心理" | "烦躁" => Ok(Self::Mental),
            "career" | "事业" => Ok(Self::Career),
            "love" | "姻缘" => Ok(Self::Love),
            other => Err(OracleError::InvalidInput(format!(
                "unknown question type '{other}' (expected general, health, mental, career or love)"
            ))),
        }
    }

    /// English name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Health => "health",
            Self::Mental => "mental",
            Self::Career => "career",
            Self::Love => "love",
        }
    }

    /// Chinese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "一般",
            Self::Health => "健康",
            Self::Mental => "心理/烦躁",
            Self::Career => "事业",
            Self::Love => "姻缘",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a local wall-clock timestamp. A bare date means midnight.
pub fn parse_datetime(s: &str) -> OracleResult<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return Err(OracleError::InvalidInput("missing date".to_string()));
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            OracleError::InvalidInput(format!(
                "unparseable date '{s}' (expected YYYY-MM-DD or YYYY-MM-DDTHH:MM)"
            ))
        })
}

/// One divination request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationContext {
    /// Local wall-clock time of the question.
    pub date: NaiveDateTime,
    /// What the asker observed. May be empty.
    pub object_name: String,
    /// Category of the question.
    pub question_type: QuestionType,
}

impl DivinationContext {
    /// Build from already validated parts.
    pub fn new(date: NaiveDateTime, object_name: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            date,
            object_name: object_name.into(),
            question_type,
        }
    }

    /// Build from raw strings, rejecting a bad date or category up front.
    pub fn parse(date: &str, object_name: &str, question_type: &str) -> OracleResult<Self> {
        let date = parse_datetime(date)?;
        let question_type = QuestionType::parse(question_type)?;
        Ok(Self::new(date, object_name, question_type))
    }
}
