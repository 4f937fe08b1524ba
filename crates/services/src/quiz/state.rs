use quiz_core::model::{Chapter, ChapterId, Language, Question, QuizSummary, UserProfile};

use super::progress::QuizProgress;
use super::screen::Screen;

/// Mutable state of one trainer session.
///
/// Only `QuizFlowService` mutates it; views read it through the getters.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) screen: Screen,
    pub(crate) user: Option<UserProfile>,
    pub(crate) chapter_id: Option<ChapterId>,
    pub(crate) chapter: Option<Chapter>,
    pub(crate) language: Language,
    pub(crate) current_index: usize,
    pub(crate) staged: Option<usize>,
    pub(crate) answers: Vec<Option<usize>>,
    pub(crate) time_remaining: u32,
    pub(crate) batch: Vec<Question>,
    pub(crate) summary: Option<QuizSummary>,
}

impl SessionState {
    /// A fresh session on the welcome screen with a full countdown.
    #[must_use]
    pub fn new(time_limit_secs: u32) -> Self {
        Self {
            screen: Screen::Welcome,
            user: None,
            chapter_id: None,
            chapter: None,
            language: Language::English,
            current_index: 0,
            staged: None,
            answers: Vec::new(),
            time_remaining: time_limit_secs,
            batch: Vec::new(),
            summary: None,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn chapter_id(&self) -> Option<&ChapterId> {
        self.chapter_id.as_ref()
    }

    /// Catalog entry of the selected chapter, if the catalog knows it.
    #[must_use]
    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapter.as_ref()
    }

    /// Display name of the selected chapter in English, falling back to its id.
    #[must_use]
    pub fn chapter_name(&self) -> &str {
        match (&self.chapter, &self.chapter_id) {
            (Some(chapter), _) => chapter.name(),
            (None, Some(id)) => id.as_str(),
            (None, None) => "",
        }
    }

    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn staged_answer(&self) -> Option<usize> {
        self.staged
    }

    /// Committed answers by position. Shorter than the batch until the quiz ends.
    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.time_remaining == 0
    }

    #[must_use]
    pub fn batch(&self) -> &[Question] {
        &self.batch
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.batch.get(self.current_index)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.batch.is_empty() && self.current_index + 1 >= self.batch.len()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(self.current_index, self.batch.len())
    }

    /// Whether Next/Submit is enabled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.screen == Screen::Quiz && self.staged.is_some() && self.current_question().is_some()
    }

    /// Summary of the last submitted quiz.
    #[must_use]
    pub fn summary(&self) -> Option<&QuizSummary> {
        self.summary.as_ref()
    }

    /// Whether "Start Next Batch" is offered. Batches repeat the same pool, so this
    /// is always true.
    #[must_use]
    pub fn has_next_batch(&self) -> bool {
        true
    }

    /// Write `answer` at `index`, padding earlier gaps with `None`.
    pub(crate) fn commit(&mut self, index: usize, answer: usize) {
        if self.answers.len() <= index {
            self.answers.resize(index + 1, None);
        }
        self.answers[index] = Some(answer);
    }

    pub(crate) fn reset_quiz(&mut self, time_limit_secs: u32) {
        self.current_index = 0;
        self.staged = None;
        self.answers.clear();
        self.summary = None;
        self.time_remaining = time_limit_secs;
    }
}
