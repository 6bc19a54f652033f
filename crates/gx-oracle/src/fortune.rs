//! The three-way fortune verdict shared by hexagram readings and palaces.

use serde::{Deserialize, Serialize};

const BAD_MARKERS: [&str; 3] = ["凶", "险", "闭塞"];
const GOOD_MARKERS: [&str; 3] = ["吉", "亨", "成"];

/// Overall tone of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fortune {
    /// Auspicious.
    Good,
    /// Inauspicious.
    Bad,
    /// Neither.
    Neutral,
}

impl Fortune {
    /// Judge a description text. Bad markers are checked before good ones,
    /// so a text carrying both reads as bad.
    pub fn from_description(text: &str) -> Self {
        if BAD_MARKERS.iter().any(|m| text.contains(m)) {
            Self::Bad
        } else if GOOD_MARKERS.iter().any(|m| text.contains(m)) {
            Self::Good
        } else {
            Self::Neutral
        }
    }

    /// Lowercase English name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Neutral => "neutral",
        }
    }

    /// Chinese label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "吉",
            Self::Bad => "凶",
            Self::Neutral => "平",
        }
    }
}

impl std::fmt::Display for Fortune {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
