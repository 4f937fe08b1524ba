use quiz_core::model::{ChapterId, Language, LoginForm};
use services::{QuizConfig, QuizFlowService, SessionState};

use super::test_harness::{empty_services, mock_services, setup_app_harness, setup_view_harness};

fn login(quiz: &QuizFlowService, state: &mut SessionState) {
    quiz.login(state, LoginForm::new("Kiran Shah", "9812345670", "kiran@example.com"))
        .unwrap();
}

fn open_chapter(quiz: &QuizFlowService, state: &mut SessionState, chapter: &str) {
    login(quiz, state);
    quiz.start_quiz_flow(state).unwrap();
    quiz.select_chapter(state, &ChapterId::new(chapter), Language::English)
        .unwrap();
}

#[tokio::test(flavor = "current_thread")]
async fn app_smoke_starts_on_welcome() {
    let mut harness = setup_app_harness(mock_services(QuizConfig::default()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("CCC Quiz World"), "missing title in {html}");
    assert!(html.contains("Full Name *"), "missing form in {html}");
    assert!(html.contains("Start Learning"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_history() {
    let mut harness = setup_view_harness(mock_services(QuizConfig::default()), login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Kiran Shah"), "missing user in {html}");
    assert!(html.contains("92%"), "missing best score in {html}");
    assert!(html.contains("Active"), "missing status in {html}");
    assert!(html.contains("Computer Memory"), "missing attempt in {html}");
    assert!(html.contains("Completed on 1/15/2024"), "missing date in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(empty_services(), login);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No quizzes taken yet"), "missing empty state in {html}");
    assert!(html.contains("Getting Started"), "missing status in {html}");
    assert!(html.contains("Take Your First Quiz"), "missing cta in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn selection_view_smoke_renders_chapters() {
    let mut harness = setup_view_harness(mock_services(QuizConfig::default()), |quiz, state| {
        login(quiz, state);
        quiz.start_quiz_flow(state).unwrap();
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Choose Your Chapter"), "missing header in {html}");
    assert!(html.contains("Introduction to Computer"), "missing chapter in {html}");
    assert!(html.contains("45 / 250 Questions Completed"), "missing progress in {html}");
    assert!(html.contains("Completed"), "missing completed chapter in {html}");
    assert!(html.contains("Practice with 50 questions per batch"), "missing batch info in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(mock_services(QuizConfig::default()), |quiz, state| {
        open_chapter(quiz, state, "intro-computer");
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("What does CPU stand for?"), "missing prompt in {html}");
    assert!(html.contains("Question 1 of 50"), "missing position in {html}");
    assert!(html.contains("2% Complete"), "missing progress in {html}");
    assert!(html.contains("30:00"), "missing timer in {html}");
    assert!(html.contains("Central Processing Unit"), "missing option in {html}");
    assert!(html.contains("Next Question"), "missing next in {html}");
    assert!(html.contains("Chapter Statistics"), "missing stats in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_marks_staged_answer() {
    let mut harness = setup_view_harness(mock_services(QuizConfig::default()), |quiz, state| {
        open_chapter(quiz, state, "intro-computer");
        quiz.select_answer(state, 1).unwrap();
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("option selected"), "missing selected option in {html}");
    assert!(html.contains("Answer selected"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_loading_for_unknown_chapter() {
    let mut harness = setup_view_harness(mock_services(QuizConfig::default()), |quiz, state| {
        open_chapter(quiz, state, "robotics");
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading quiz..."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_review() {
    let config = QuizConfig::new(2, 1800, false, 5).unwrap();
    let mut harness = setup_view_harness(mock_services(config), |quiz, state| {
        open_chapter(quiz, state, "intro-computer");
        for _ in 0..2 {
            let correct = state.current_question().unwrap().correct_answer();
            quiz.select_answer(state, correct).unwrap();
            quiz.advance(state).unwrap();
        }
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Excellent Work!"), "missing headline in {html}");
    assert!(html.contains("100%"), "missing score in {html}");
    assert!(html.contains("Review Your Answers"), "missing review in {html}");
    assert!(html.contains("Question 2"), "missing second item in {html}");
    assert!(html.contains("Start Next Batch"), "missing next batch in {html}");
    assert!(html.contains("option correct"), "missing correct mark in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaderboard_view_smoke_renders_board() {
    let mut harness = setup_view_harness(mock_services(QuizConfig::default()), |quiz, state| {
        login(quiz, state);
        quiz.view_leaderboard(state).unwrap();
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Hall of Fame"), "missing podium in {html}");
    assert!(html.contains("Raj Patel"), "missing leader in {html}");
    assert!(html.contains("Rank #1"), "missing rank badge in {html}");
    assert!(html.contains("93%"), "missing average in {html}");
    assert!(html.contains("98%"), "missing highest in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaderboard_view_smoke_renders_empty_board() {
    let mut harness = setup_view_harness(empty_services(), |quiz, state| {
        login(quiz, state);
        quiz.view_leaderboard(state).unwrap();
    });
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No scores yet"), "missing empty state in {html}");
    assert!(!html.contains("Hall of Fame"), "unexpected podium in {html}");
}
