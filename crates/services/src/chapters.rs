use std::sync::Arc;

use quiz_core::model::{Chapter, ChapterId, Difficulty};
use storage::repository::{ChapterCatalog, QuestionBank};

use crate::error::ServiceError;

/// Progress figures for one chapter card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterStats {
    pub progress_percent: u8,
    pub completed: u32,
    pub remaining: u32,
    pub total: u32,
    pub questions_per_batch: usize,
    /// Distinct questions in the bank for this chapter.
    pub pool_size: usize,
    pub pool_by_difficulty: Vec<(Difficulty, usize)>,
}

#[derive(Clone)]
pub struct ChapterService {
    chapters: Arc<dyn ChapterCatalog>,
    questions: Arc<dyn QuestionBank>,
    batch_size: usize,
}

impl ChapterService {
    #[must_use]
    pub fn new(
        chapters: Arc<dyn ChapterCatalog>,
        questions: Arc<dyn QuestionBank>,
        batch_size: usize,
    ) -> Self {
        Self {
            chapters,
            questions,
            batch_size,
        }
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the catalog cannot be read.
    pub fn list_chapters(&self) -> Result<Vec<Chapter>, ServiceError> {
        Ok(self.chapters.list_chapters()?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the catalog cannot be read.
    pub fn chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, ServiceError> {
        Ok(self.chapters.get_chapter(id)?)
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the bank cannot be read.
    pub fn stats(&self, chapter: &Chapter) -> Result<ChapterStats, ServiceError> {
        let pool = self.questions.all_chapter_questions(chapter.id())?;
        let pool_by_difficulty = Difficulty::ALL
            .iter()
            .map(|d| (*d, pool.iter().filter(|q| q.difficulty() == *d).count()))
            .collect();
        Ok(ChapterStats {
            progress_percent: chapter.progress_percent(),
            completed: chapter.completed_questions(),
            remaining: chapter.remaining_questions(),
            total: chapter.total_questions(),
            questions_per_batch: self.batch_size,
            pool_size: pool.len(),
            pool_by_difficulty,
        })
    }
}
