use chrono::NaiveDate;
use quiz_core::model::{
    AttemptId, Chapter, ChapterId, Difficulty, LeaderboardEntry, Question, QuizAttempt, Score,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::question_bank::{StaticQuestionBank, cycle_batch};

/// Errors surfaced by data sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Read-only access to the question pool of each chapter.
///
/// Implementors only provide the raw pool; batching and difficulty filtering are
/// derived from it so every source behaves the same way.
pub trait QuestionBank: Send + Sync {
    /// Chapter keys known to the bank, in bank order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read.
    fn chapter_ids(&self) -> Result<Vec<ChapterId>, StorageError>;

    /// The full pool for a chapter. Unknown chapters yield an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read.
    fn all_chapter_questions(&self, chapter: &ChapterId) -> Result<Vec<Question>, StorageError>;

    /// A batch of exactly `count` questions, cycling through the pool with
    /// wraparound. Entry `i` is pool entry `i % pool.len()` with id `<poolId>_<i>`.
    /// An empty pool yields an empty batch.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read.
    fn questions_by_chapter(
        &self,
        chapter: &ChapterId,
        count: usize,
    ) -> Result<Vec<Question>, StorageError> {
        let pool = self.all_chapter_questions(chapter)?;
        Ok(cycle_batch(&pool, count))
    }

    /// Pool entries with the given difficulty, in pool order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read.
    fn questions_by_difficulty(
        &self,
        chapter: &ChapterId,
        difficulty: Difficulty,
    ) -> Result<Vec<Question>, StorageError> {
        let mut pool = self.all_chapter_questions(chapter)?;
        pool.retain(|q| q.difficulty() == difficulty);
        Ok(pool)
    }
}

pub trait ChapterCatalog: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn list_chapters(&self) -> Result<Vec<Chapter>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, StorageError>;
}

/// Quiz history, newest attempt first.
pub trait QuizHistoryRepository: Send + Sync {
    /// Up to `limit` attempts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be read.
    fn list_attempts(&self, limit: usize) -> Result<Vec<QuizAttempt>, StorageError>;

    /// Record a finished attempt and return its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the attempt cannot be stored.
    fn append_attempt(
        &self,
        quiz_name: &str,
        score: Score,
        date: NaiveDate,
    ) -> Result<AttemptId, StorageError>;
}

pub trait LeaderboardRepository: Send + Sync {
    /// Entries in the order the source ranks them.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the board cannot be read.
    fn list_entries(&self) -> Result<Vec<LeaderboardEntry>, StorageError>;
}

/// In-memory chapters, history and leaderboard. History appends live for the
/// lifetime of the process only.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    chapters: Arc<Vec<Chapter>>,
    attempts: Arc<Mutex<Vec<QuizAttempt>>>,
    leaderboard: Arc<Vec<LeaderboardEntry>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chapters(mut self, chapters: Vec<Chapter>) -> Self {
        self.chapters = Arc::new(chapters);
        self
    }

    /// Seed the history; `attempts` must already be newest first.
    #[must_use]
    pub fn with_attempts(self, attempts: Vec<QuizAttempt>) -> Self {
        Self {
            attempts: Arc::new(Mutex::new(attempts)),
            ..self
        }
    }

    #[must_use]
    pub fn with_leaderboard(mut self, entries: Vec<LeaderboardEntry>) -> Self {
        self.leaderboard = Arc::new(entries);
        self
    }
}

impl ChapterCatalog for InMemoryRepository {
    fn list_chapters(&self) -> Result<Vec<Chapter>, StorageError> {
        Ok(self.chapters.as_ref().clone())
    }

    fn get_chapter(&self, id: &ChapterId) -> Result<Option<Chapter>, StorageError> {
        Ok(self.chapters.iter().find(|c| c.id() == id).cloned())
    }
}

impl QuizHistoryRepository for InMemoryRepository {
    fn list_attempts(&self, limit: usize) -> Result<Vec<QuizAttempt>, StorageError> {
        let guard = self
            .attempts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.iter().take(limit).cloned().collect())
    }

    fn append_attempt(
        &self,
        quiz_name: &str,
        score: Score,
        date: NaiveDate,
    ) -> Result<AttemptId, StorageError> {
        let mut guard = self
            .attempts
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let next = guard
            .iter()
            .map(|a| a.id().value())
            .max()
            .unwrap_or(0)
            + 1;
        let id = AttemptId::new(next);
        guard.insert(0, QuizAttempt::new(id, quiz_name, score, date));
        Ok(id)
    }
}

impl LeaderboardRepository for InMemoryRepository {
    fn list_entries(&self) -> Result<Vec<LeaderboardEntry>, StorageError> {
        Ok(self.leaderboard.as_ref().clone())
    }
}

/// Aggregates the data sources behind trait objects so a real backend can be swapped in.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionBank>,
    pub chapters: Arc<dyn ChapterCatalog>,
    pub history: Arc<dyn QuizHistoryRepository>,
    pub leaderboard: Arc<dyn LeaderboardRepository>,
}

impl Storage {
    /// Built-in mock data: the embedded question bank plus static chapters,
    /// history and leaderboard.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the embedded data fails to parse or validate.
    pub fn mock() -> Result<Self, StorageError> {
        let bank = StaticQuestionBank::builtin()?;
        let repo = InMemoryRepository::new()
            .with_chapters(crate::mock::chapters()?)
            .with_attempts(crate::mock::history()?)
            .with_leaderboard(crate::mock::leaderboard()?);
        Ok(Self::from_parts(bank, repo))
    }

    /// Sources with no data at all.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts(StaticQuestionBank::default(), InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_parts(bank: StaticQuestionBank, repo: InMemoryRepository) -> Self {
        let questions: Arc<dyn QuestionBank> = Arc::new(bank);
        let chapters: Arc<dyn ChapterCatalog> = Arc::new(repo.clone());
        let history: Arc<dyn QuizHistoryRepository> = Arc::new(repo.clone());
        let leaderboard: Arc<dyn LeaderboardRepository> = Arc::new(repo);
        Self {
            questions,
            chapters,
            history,
            leaderboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::time::fixed_now;

    fn score(v: u8) -> Score {
        Score::new(v).unwrap()
    }

    #[test]
    fn appended_attempts_come_first_with_fresh_ids() {
        let today = fixed_now().date_naive();
        let repo = InMemoryRepository::new().with_attempts(vec![QuizAttempt::new(
            AttemptId::new(3),
            "Computer Memory",
            score(78),
            today,
        )]);

        let id = repo.append_attempt("Spreadsheet", score(64), today).unwrap();
        assert_eq!(id, AttemptId::new(4));

        let attempts = repo.list_attempts(10).unwrap();
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].quiz_name(), "Spreadsheet");
        assert_eq!(attempts[1].id(), AttemptId::new(3));
    }

    #[test]
    fn list_attempts_respects_limit() {
        let today = fixed_now().date_naive();
        let repo = InMemoryRepository::new();
        for _ in 0..4 {
            repo.append_attempt("Presentation", score(50), today).unwrap();
        }
        assert_eq!(repo.list_attempts(3).unwrap().len(), 3);
    }

    #[test]
    fn clones_share_history() {
        let repo = InMemoryRepository::new();
        let other = repo.clone();
        other
            .append_attempt("Presentation", score(80), fixed_now().date_naive())
            .unwrap();
        assert_eq!(repo.list_attempts(5).unwrap().len(), 1);
    }

    #[test]
    fn empty_storage_has_nothing() {
        let storage = Storage::empty();
        assert!(storage.chapters.list_chapters().unwrap().is_empty());
        assert!(storage.leaderboard.list_entries().unwrap().is_empty());
        assert!(storage.questions.chapter_ids().unwrap().is_empty());
    }
}
