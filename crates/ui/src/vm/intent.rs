use quiz_core::model::{ChapterId, Language, LoginForm};
use services::{QuizFlowError, QuizFlowService, SessionState};

/// Every user action the screens can raise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Login(LoginForm),
    StartQuiz,
    ViewLeaderboard,
    SelectChapter { chapter: ChapterId, language: Language },
    SelectAnswer(usize),
    Advance,
    Submit,
    Tick,
    NextBatch,
    BackToDashboard,
    BackToSelection,
}

impl QuizIntent {
    /// Whether success of this intent dismisses a pending error toast.
    /// Background ticks leave it alone.
    #[must_use]
    pub fn clears_error(&self) -> bool {
        !matches!(self, QuizIntent::Tick)
    }
}

/// Route an intent to the matching `QuizFlowService` transition.
///
/// # Errors
///
/// Returns the transition's `QuizFlowError`; the state is left unchanged.
pub fn apply_intent(
    quiz: &QuizFlowService,
    state: &mut SessionState,
    intent: QuizIntent,
) -> Result<(), QuizFlowError> {
    match intent {
        QuizIntent::Login(form) => quiz.login(state, form),
        QuizIntent::StartQuiz => quiz.start_quiz_flow(state),
        QuizIntent::ViewLeaderboard => quiz.view_leaderboard(state),
        QuizIntent::SelectChapter { chapter, language } => {
            quiz.select_chapter(state, &chapter, language)
        }
        QuizIntent::SelectAnswer(option) => quiz.select_answer(state, option),
        QuizIntent::Advance => quiz.advance(state).map(|_| ()),
        QuizIntent::Submit => quiz.submit(state).map(|_| ()),
        QuizIntent::Tick => quiz.tick(state).map(|_| ()),
        QuizIntent::NextBatch => quiz.next_batch(state),
        QuizIntent::BackToDashboard => quiz.back_to_dashboard(state),
        QuizIntent::BackToSelection => quiz.back_to_selection(state),
    }
}
