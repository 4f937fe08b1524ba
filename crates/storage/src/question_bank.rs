use quiz_core::model::{ChapterId, Difficulty, Question, QuestionId};
use serde::Deserialize;

use crate::repository::{QuestionBank, StorageError};

const BUILTIN_BANK: &str = include_str!("../data/question_bank.json");

/// Build a batch of `count` questions from `pool`, wrapping around as needed.
///
/// Position `i` holds `pool[i % pool.len()]` re-identified as `<poolId>_<i>`.
#[must_use]
pub fn cycle_batch(pool: &[Question], count: usize) -> Vec<Question> {
    if pool.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|position| pool[position % pool.len()].instance(position))
        .collect()
}

#[derive(Debug, Deserialize)]
struct BankFile {
    chapters: Vec<ChapterRecord>,
}

#[derive(Debug, Deserialize)]
struct ChapterRecord {
    id: ChapterId,
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
    difficulty: Difficulty,
    topic: String,
}

impl QuestionRecord {
    fn into_question(self, chapter: &ChapterId) -> Result<Question, StorageError> {
        let id = self.id.clone();
        Question::new(
            self.id,
            chapter.clone(),
            self.prompt,
            self.options,
            self.correct_answer,
            self.difficulty,
            self.topic,
        )
        .map_err(|e| StorageError::InvalidRecord(format!("{id}: {e}")))
    }
}

/// Question bank held entirely in memory, keyed by chapter in insertion order.
#[derive(Debug, Clone, Default)]
pub struct StaticQuestionBank {
    chapters: Vec<(ChapterId, Vec<Question>)>,
}

impl StaticQuestionBank {
    /// Group `questions` by their owning chapter, keeping first-seen chapter order.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let mut chapters: Vec<(ChapterId, Vec<Question>)> = Vec::new();
        for question in questions {
            match chapters.iter_mut().find(|(id, _)| id == question.chapter()) {
                Some((_, pool)) => pool.push(question),
                None => chapters.push((question.chapter().clone(), vec![question])),
            }
        }
        Self { chapters }
    }

    /// Parse a bank document of the form `{"chapters": [{"id", "questions": [...]}]}`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` for malformed JSON and
    /// `StorageError::InvalidRecord` for questions that fail validation.
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        let file: BankFile =
            serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;

        let mut chapters = Vec::with_capacity(file.chapters.len());
        for record in file.chapters {
            let pool = record
                .questions
                .into_iter()
                .map(|q| q.into_question(&record.id))
                .collect::<Result<Vec<_>, _>>()?;
            chapters.push((record.id, pool));
        }
        Ok(Self { chapters })
    }

    /// The bank shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the embedded document is invalid.
    pub fn builtin() -> Result<Self, StorageError> {
        Self::from_json(BUILTIN_BANK)
    }

    /// Total number of pool questions across chapters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chapters.iter().map(|(_, pool)| pool.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl QuestionBank for StaticQuestionBank {
    fn chapter_ids(&self) -> Result<Vec<ChapterId>, StorageError> {
        Ok(self.chapters.iter().map(|(id, _)| id.clone()).collect())
    }

    fn all_chapter_questions(&self, chapter: &ChapterId) -> Result<Vec<Question>, StorageError> {
        Ok(self
            .chapters
            .iter()
            .find(|(id, _)| id == chapter)
            .map(|(_, pool)| pool.clone())
            .unwrap_or_default())
    }
}
