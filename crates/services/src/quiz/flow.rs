use std::sync::Arc;

use quiz_core::model::{ChapterId, Language, LoginForm, QuizSummary, Score, UserId, UserProfile};
use storage::Storage;
use storage::repository::{ChapterCatalog, QuestionBank, QuizHistoryRepository};
use tracing::{debug, info, warn};

use super::screen::Screen;
use super::state::SessionState;
use crate::Clock;
use crate::config::QuizConfig;
use crate::error::QuizFlowError;

/// Result of pressing Next/Submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the next question.
    Next,
    /// The last question was answered and the quiz was submitted.
    Submitted(Score),
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not on the quiz screen; nothing changed.
    Idle,
    Running { remaining: u32 },
    /// The countdown is at zero and the quiz stays open.
    Expired,
    /// The countdown reached zero and the quiz was submitted.
    Submitted(Score),
}

/// Drives the screen state machine of a trainer session.
///
/// Every transition takes the session explicitly and leaves it untouched on error.
#[derive(Clone)]
pub struct QuizFlowService {
    clock: Clock,
    config: QuizConfig,
    questions: Arc<dyn QuestionBank>,
    chapters: Arc<dyn ChapterCatalog>,
    history: Arc<dyn QuizHistoryRepository>,
}

impl QuizFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        config: QuizConfig,
        questions: Arc<dyn QuestionBank>,
        chapters: Arc<dyn ChapterCatalog>,
        history: Arc<dyn QuizHistoryRepository>,
    ) -> Self {
        Self {
            clock,
            config,
            questions,
            chapters,
            history,
        }
    }

    #[must_use]
    pub fn from_storage(clock: Clock, config: QuizConfig, storage: &Storage) -> Self {
        Self::new(
            clock,
            config,
            Arc::clone(&storage.questions),
            Arc::clone(&storage.chapters),
            Arc::clone(&storage.history),
        )
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
    }

    /// A fresh session on the welcome screen.
    #[must_use]
    pub fn new_session(&self) -> SessionState {
        SessionState::new(self.config.time_limit_secs())
    }

    /// Register the student and open the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::Login` if a field is empty, or
    /// `QuizFlowError::InvalidTransition` when not on the welcome screen.
    pub fn login(&self, state: &mut SessionState, form: LoginForm) -> Result<(), QuizFlowError> {
        guard(state, "login", &[Screen::Welcome])?;
        let id = UserId::new(self.clock.timestamp_millis());
        let user = UserProfile::register(id, form)?;
        info!(user_id = %user.id(), "student logged in");
        state.user = Some(user);
        state.screen = Screen::Dashboard;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizFlowError::InvalidTransition` when not on the dashboard.
    pub fn start_quiz_flow(&self, state: &mut SessionState) -> Result<(), QuizFlowError> {
        guard(state, "start quiz", &[Screen::Dashboard])?;
        state.screen = Screen::QuizSelection;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizFlowError::InvalidTransition` when not on the dashboard.
    pub fn view_leaderboard(&self, state: &mut SessionState) -> Result<(), QuizFlowError> {
        guard(state, "view leaderboard", &[Screen::Dashboard])?;
        state.screen = Screen::Leaderboard;
        Ok(())
    }

    /// Load a fresh batch for `chapter` and start the quiz.
    ///
    /// An unknown chapter yields an empty batch rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::UnsupportedLanguage` for a non-quiz language,
    /// `QuizFlowError::Storage` if the sources cannot be read, or
    /// `QuizFlowError::InvalidTransition` when not on the selection screen.
    pub fn select_chapter(
        &self,
        state: &mut SessionState,
        chapter: &ChapterId,
        language: Language,
    ) -> Result<(), QuizFlowError> {
        guard(state, "select chapter", &[Screen::QuizSelection])?;
        if !language.is_quiz_language() {
            return Err(QuizFlowError::UnsupportedLanguage(language));
        }

        let batch = self
            .questions
            .questions_by_chapter(chapter, self.config.batch_size())?;
        let catalog_entry = self.chapters.get_chapter(chapter)?;
        if batch.is_empty() {
            warn!(chapter = %chapter, "no questions for chapter");
        }
        info!(
            chapter = %chapter,
            language = language.as_str(),
            questions = batch.len(),
            "quiz started"
        );

        state.chapter_id = Some(chapter.clone());
        state.chapter = catalog_entry;
        state.language = language;
        state.batch = batch;
        state.reset_quiz(self.config.time_limit_secs());
        state.screen = Screen::Quiz;
        Ok(())
    }

    /// Stage `option` for the current question. May be called repeatedly.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoQuestion` for an empty batch,
    /// `QuizFlowError::OptionOutOfRange` for a bad index, or
    /// `QuizFlowError::InvalidTransition` when not on the quiz screen.
    pub fn select_answer(&self, state: &mut SessionState, option: usize) -> Result<(), QuizFlowError> {
        guard(state, "select answer", &[Screen::Quiz])?;
        let question = state.current_question().ok_or(QuizFlowError::NoQuestion)?;
        let count = question.option_count();
        if option >= count {
            return Err(QuizFlowError::OptionOutOfRange {
                index: option,
                count,
            });
        }
        state.staged = Some(option);
        Ok(())
    }

    /// Commit the staged answer and move on, submitting on the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::NoAnswerSelected` if nothing is staged,
    /// `QuizFlowError::NoQuestion` for an empty batch, or
    /// `QuizFlowError::InvalidTransition` when not on the quiz screen.
    pub fn advance(&self, state: &mut SessionState) -> Result<AdvanceOutcome, QuizFlowError> {
        guard(state, "advance", &[Screen::Quiz])?;
        if state.current_question().is_none() {
            return Err(QuizFlowError::NoQuestion);
        }
        let answer = state.staged.ok_or(QuizFlowError::NoAnswerSelected)?;

        if state.is_last_question() {
            return self.submit(state).map(AdvanceOutcome::Submitted);
        }

        state.commit(state.current_index, answer);
        state.current_index += 1;
        state.staged = None;
        Ok(AdvanceOutcome::Next)
    }

    /// Commit any staged answer, score the batch and show the results.
    ///
    /// The attempt is recorded in the quiz history on a best-effort basis.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::InvalidTransition` when not on the quiz screen.
    pub fn submit(&self, state: &mut SessionState) -> Result<Score, QuizFlowError> {
        guard(state, "submit", &[Screen::Quiz])?;
        if let Some(answer) = state.staged.take() {
            if state.current_question().is_some() {
                state.commit(state.current_index, answer);
            }
        }

        let summary = QuizSummary::score_answers(&state.batch, &state.answers);
        let score = summary.score();
        info!(
            chapter = state.chapter_name(),
            score = score.value(),
            correct = summary.correct_count(),
            total = summary.total(),
            "quiz submitted"
        );
        self.record_attempt(state, score);

        state.summary = Some(summary);
        state.screen = Screen::Results;
        Ok(score)
    }

    fn record_attempt(&self, state: &SessionState, score: Score) {
        if state.batch.is_empty() {
            debug!("empty batch, attempt not recorded");
            return;
        }
        if let Err(err) = self
            .history
            .append_attempt(state.chapter_name(), score, self.clock.today())
        {
            warn!(error = %err, "failed to record quiz attempt");
        }
    }

    /// Count the quiz timer down by one second.
    ///
    /// # Errors
    ///
    /// Propagates `submit` failures when auto-submit is enabled.
    pub fn tick(&self, state: &mut SessionState) -> Result<TickOutcome, QuizFlowError> {
        if state.screen != Screen::Quiz {
            return Ok(TickOutcome::Idle);
        }
        if state.time_remaining == 0 {
            return Ok(TickOutcome::Expired);
        }

        state.time_remaining -= 1;
        if state.time_remaining > 0 {
            return Ok(TickOutcome::Running {
                remaining: state.time_remaining,
            });
        }

        info!(chapter = state.chapter_name(), "quiz time expired");
        if self.config.auto_submit_on_expiry() {
            return self.submit(state).map(TickOutcome::Submitted);
        }
        Ok(TickOutcome::Expired)
    }

    /// Back to chapter selection for another batch.
    ///
    /// # Errors
    ///
    /// Returns `QuizFlowError::InvalidTransition` when not on the results screen.
    pub fn next_batch(&self, state: &mut SessionState) -> Result<(), QuizFlowError> {
        guard(state, "next batch", &[Screen::Results])?;
        state.screen = Screen::QuizSelection;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizFlowError::InvalidTransition` on the welcome screen.
    pub fn back_to_dashboard(&self, state: &mut SessionState) -> Result<(), QuizFlowError> {
        guard(
            state,
            "back to dashboard",
            &[
                Screen::Dashboard,
                Screen::QuizSelection,
                Screen::Quiz,
                Screen::Results,
                Screen::Leaderboard,
            ],
        )?;
        state.screen = Screen::Dashboard;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizFlowError::InvalidTransition` when not on the quiz screen.
    pub fn back_to_selection(&self, state: &mut SessionState) -> Result<(), QuizFlowError> {
        guard(state, "back to selection", &[Screen::Quiz])?;
        state.screen = Screen::QuizSelection;
        Ok(())
    }
}

fn guard(state: &SessionState, action: &'static str, allowed: &[Screen]) -> Result<(), QuizFlowError> {
    if allowed.contains(&state.screen) {
        Ok(())
    } else {
        Err(QuizFlowError::InvalidTransition {
            action,
            screen: state.screen,
        })
    }
}
