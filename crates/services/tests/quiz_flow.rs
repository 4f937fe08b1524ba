use quiz_core::model::{ChapterId, Language, LoginError, LoginField, LoginForm};
use quiz_core::time::fixed_clock;
use services::{AdvanceOutcome, AppServices, QuizConfig, QuizFlowError, Screen, SessionState};

fn app(config: QuizConfig) -> AppServices {
    AppServices::new_mock(fixed_clock(), config).unwrap()
}

fn form() -> LoginForm {
    LoginForm::new("Asha Verma", "9876543210", "asha@example.com")
}

fn start(app: &AppServices, chapter: &str) -> SessionState {
    let quiz = app.quiz();
    let mut state = quiz.new_session();
    quiz.login(&mut state, form()).unwrap();
    quiz.start_quiz_flow(&mut state).unwrap();
    quiz.select_chapter(&mut state, &ChapterId::new(chapter), Language::English)
        .unwrap();
    state
}

#[test]
fn login_requires_every_field() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = quiz.new_session();

    let err = quiz
        .login(&mut state, LoginForm::new("Asha", "", "asha@example.com"))
        .unwrap_err();
    assert!(matches!(
        err,
        QuizFlowError::Login(LoginError::MissingField(LoginField::Mobile))
    ));
    assert_eq!(state.screen(), Screen::Welcome);
    assert!(state.user().is_none());

    quiz.login(&mut state, form()).unwrap();
    assert_eq!(state.screen(), Screen::Dashboard);
    let user = state.user().unwrap();
    assert_eq!(user.name(), "Asha Verma");
    assert_eq!(user.id().value(), 1_700_000_000_000);
}

#[test]
fn perfect_run_scores_full_marks_and_is_recorded() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = start(&app, "intro-computer");

    assert_eq!(state.batch().len(), 50);
    assert_eq!(state.time_remaining(), 1800);
    assert_eq!(state.chapter_name(), "Introduction to Computer");

    loop {
        let correct = state.current_question().unwrap().correct_answer();
        quiz.select_answer(&mut state, correct).unwrap();
        match quiz.advance(&mut state).unwrap() {
            AdvanceOutcome::Next => {}
            AdvanceOutcome::Submitted(score) => {
                assert_eq!(score.value(), 100);
                break;
            }
        }
    }

    assert_eq!(state.screen(), Screen::Results);
    let summary = state.summary().unwrap();
    assert_eq!(summary.correct_count(), 50);
    assert_eq!(summary.unanswered_count(), 0);

    let overview = app.dashboard().overview(5).unwrap();
    assert_eq!(overview.total_quizzes, 4);
    assert_eq!(overview.best_score.value(), 100);
    assert_eq!(overview.recent[0].quiz_name(), "Introduction to Computer");
}

#[test]
fn advance_commits_staged_answer_at_pre_advance_index() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = start(&app, "operating-system");

    quiz.select_answer(&mut state, 3).unwrap();
    quiz.select_answer(&mut state, 1).unwrap();
    assert_eq!(quiz.advance(&mut state).unwrap(), AdvanceOutcome::Next);

    assert_eq!(state.answers(), &[Some(1)]);
    assert_eq!(state.current_index(), 1);
    assert_eq!(state.staged_answer(), None);
    assert!(!state.can_advance());
    assert_eq!(state.progress().position, 2);
    assert_eq!(state.progress().percent, 4);
}

#[test]
fn advance_without_answer_is_rejected() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = start(&app, "intro-computer");

    let err = quiz.advance(&mut state).unwrap_err();
    assert!(matches!(err, QuizFlowError::NoAnswerSelected));
    assert_eq!(state.current_index(), 0);
    assert!(state.answers().is_empty());
}

#[test]
fn early_submit_counts_missing_answers_as_wrong() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = start(&app, "intro-computer");

    for _ in 0..2 {
        let correct = state.current_question().unwrap().correct_answer();
        quiz.select_answer(&mut state, correct).unwrap();
        quiz.advance(&mut state).unwrap();
    }
    // staged but not yet committed
    let correct = state.current_question().unwrap().correct_answer();
    quiz.select_answer(&mut state, correct).unwrap();

    let score = quiz.submit(&mut state).unwrap();
    assert_eq!(score.value(), 6);
    let summary = state.summary().unwrap();
    assert_eq!(summary.correct_count(), 3);
    assert_eq!(summary.unanswered_count(), 47);
    assert_eq!(summary.results()[3].user_answer, None);
}

#[test]
fn selecting_a_chapter_resets_previous_quiz() {
    let config = QuizConfig::new(2, 60, false, 5).unwrap();
    let app = app(config);
    let quiz = app.quiz();
    let mut state = start(&app, "intro-computer");

    quiz.tick(&mut state).unwrap();
    quiz.select_answer(&mut state, 2).unwrap();
    quiz.advance(&mut state).unwrap();
    quiz.select_answer(&mut state, 0).unwrap();
    quiz.advance(&mut state).unwrap();
    assert_eq!(state.screen(), Screen::Results);
    assert!(state.has_next_batch());

    quiz.next_batch(&mut state).unwrap();
    assert_eq!(state.screen(), Screen::QuizSelection);
    quiz.select_chapter(&mut state, &ChapterId::new("spreadsheet"), Language::Hindi)
        .unwrap();

    assert_eq!(state.screen(), Screen::Quiz);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.staged_answer(), None);
    assert!(state.answers().is_empty());
    assert!(state.summary().is_none());
    assert_eq!(state.time_remaining(), 60);
    assert_eq!(state.language(), Language::Hindi);
    assert_eq!(state.batch()[1].id().as_str(), "ss002_1");
}

#[test]
fn leaving_mid_quiz_and_reselecting_starts_fresh() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = start(&app, "operating-system");

    for _ in 0..3 {
        quiz.tick(&mut state).unwrap();
    }
    for _ in 0..2 {
        quiz.select_answer(&mut state, 0).unwrap();
        quiz.advance(&mut state).unwrap();
    }
    quiz.select_answer(&mut state, 2).unwrap();
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.staged_answer(), Some(2));
    assert_eq!(state.time_remaining(), 1797);

    quiz.back_to_selection(&mut state).unwrap();
    quiz.select_chapter(&mut state, &ChapterId::new("operating-system"), Language::English)
        .unwrap();

    assert_eq!(state.screen(), Screen::Quiz);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.staged_answer(), None);
    assert!(state.answers().is_empty());
    assert_eq!(state.time_remaining(), 1800);
    assert!(!state.can_advance());
}

#[test]
fn unknown_chapter_loads_an_empty_batch() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = start(&app, "quantum-computing");

    assert_eq!(state.screen(), Screen::Quiz);
    assert!(state.batch().is_empty());
    assert!(state.current_question().is_none());
    assert_eq!(state.chapter_name(), "quantum-computing");
    assert!(matches!(
        quiz.select_answer(&mut state, 0),
        Err(QuizFlowError::NoQuestion)
    ));
    assert!(matches!(quiz.advance(&mut state), Err(QuizFlowError::NoQuestion)));
}

#[test]
fn navigation_between_screens() {
    let app = app(QuizConfig::default());
    let quiz = app.quiz();
    let mut state = quiz.new_session();
    quiz.login(&mut state, form()).unwrap();

    quiz.view_leaderboard(&mut state).unwrap();
    assert_eq!(state.screen(), Screen::Leaderboard);
    assert!(quiz.start_quiz_flow(&mut state).is_err());
    quiz.back_to_dashboard(&mut state).unwrap();
    assert_eq!(state.screen(), Screen::Dashboard);

    quiz.start_quiz_flow(&mut state).unwrap();
    quiz.select_chapter(&mut state, &ChapterId::new("presentation"), Language::English)
        .unwrap();
    quiz.back_to_selection(&mut state).unwrap();
    assert_eq!(state.screen(), Screen::QuizSelection);
    assert!(quiz.back_to_selection(&mut state).is_err());
    quiz.back_to_dashboard(&mut state).unwrap();
    quiz.back_to_dashboard(&mut state).unwrap();
    assert_eq!(state.screen(), Screen::Dashboard);
}

#[test]
fn mock_leaderboard_stats() {
    let app = app(QuizConfig::default());
    let board = app.leaderboard().board().unwrap();
    assert_eq!(board.entries.len(), 5);
    assert_eq!(board.podium()[0].name(), "Raj Patel");
    assert_eq!(board.stats.average, 93);
    assert_eq!(board.stats.highest, 98);
}
