use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LanguageError {
    #[error("unknown language: {0}")]
    Unknown(String),
}

/// Language tags understood by the trainer.
///
/// Quizzes run in English or Hindi; Gujarati is offered only for answer explanations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Gujarati,
}

impl Language {
    pub const QUIZ: [Language; 2] = [Language::English, Language::Hindi];
    pub const EXPLANATION: [Language; 3] =
        [Language::English, Language::Hindi, Language::Gujarati];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Gujarati => "gujarati",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Gujarati => "ગુજરાતી",
        }
    }

    #[must_use]
    pub fn is_quiz_language(self) -> bool {
        matches!(self, Language::English | Language::Hindi)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            "gujarati" | "gu" => Ok(Language::Gujarati),
            _ => Err(LanguageError::Unknown(s.to_string())),
        }
    }
}
