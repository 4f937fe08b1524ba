use thiserror::Error;

use crate::model::ids::ChapterId;
use crate::model::language::Language;
use crate::model::score::round_percent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChapterError {
    #[error("chapter name cannot be empty")]
    EmptyName,

    #[error("chapter must contain at least one question")]
    ZeroTotal,

    #[error("completed questions ({completed}) exceed total ({total})")]
    CompletedExceedsTotal { completed: u32, total: u32 },
}

/// A syllabus chapter with its progress counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    id: ChapterId,
    name: String,
    name_hindi: String,
    total_questions: u32,
    completed_questions: u32,
}

impl Chapter {
    /// # Errors
    ///
    /// Returns `ChapterError` if the English name is empty, `total_questions` is zero,
    /// or more questions are completed than exist.
    pub fn new(
        id: ChapterId,
        name: impl Into<String>,
        name_hindi: impl Into<String>,
        total_questions: u32,
        completed_questions: u32,
    ) -> Result<Self, ChapterError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ChapterError::EmptyName);
        }
        if total_questions == 0 {
            return Err(ChapterError::ZeroTotal);
        }
        if completed_questions > total_questions {
            return Err(ChapterError::CompletedExceedsTotal {
                completed: completed_questions,
                total: total_questions,
            });
        }
        Ok(Self {
            id,
            name,
            name_hindi: name_hindi.into(),
            total_questions,
            completed_questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ChapterId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn name_hindi(&self) -> &str {
        &self.name_hindi
    }

    /// Display name in the given language. Falls back to English when no
    /// Hindi name is set; Gujarati always uses English.
    #[must_use]
    pub fn name_in(&self, language: Language) -> &str {
        match language {
            Language::Hindi if !self.name_hindi.is_empty() => &self.name_hindi,
            _ => &self.name,
        }
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn completed_questions(&self) -> u32 {
        self.completed_questions
    }

    #[must_use]
    pub fn remaining_questions(&self) -> u32 {
        self.total_questions - self.completed_questions
    }

    /// `round(100 * completed / total)`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        round_percent(
            u64::from(self.completed_questions),
            u64::from(self.total_questions),
        )
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed_questions >= self.total_questions
    }
}
