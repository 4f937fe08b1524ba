use dioxus::prelude::*;
use services::{Screen, SessionState};

use crate::context::AppContext;
use crate::views::{
    DashboardView, LeaderboardView, QuizView, ResultsView, SelectionView, ViewError, WelcomeView,
};
use crate::vm::{ChapterStatsVm, QuizIntent, QuizVm, ResultsVm, apply_intent};

const STYLE: &str = include_str!("../assets/style.css");

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(|| ctx.quiz().new_session());

    rsx! {
        document::Title { "CCC Quiz World" }
        style { {STYLE} }

        div { class: "app-root",
            QuizShell { session }
        }
    }
}

/// Renders the active screen and routes every intent through the quiz service.
#[component]
pub fn QuizShell(session: Signal<SessionState>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut error = use_signal(|| None::<ViewError>);

    let on_intent = {
        let quiz = ctx.quiz();
        use_callback(move |intent: QuizIntent| {
            let mut session = session;
            let clears_error = intent.clears_error();
            let result = apply_intent(&quiz, &mut *session.write(), intent);
            match result {
                Ok(()) => {
                    if clears_error && error.peek().is_some() {
                        error.set(None);
                    }
                }
                Err(err) => error.set(Some(ViewError::from(err))),
            }
        })
    };

    let state = session.read();
    let screen = match state.screen() {
        Screen::Welcome => rsx! {
            WelcomeView { on_intent }
        },
        Screen::Dashboard => {
            let user_name = state.user().map(|u| u.name().to_string()).unwrap_or_default();
            rsx! {
                DashboardView { user_name, on_intent }
            }
        }
        Screen::QuizSelection => rsx! {
            SelectionView { on_intent }
        },
        Screen::Quiz => {
            let vm = QuizVm::from_state(&state);
            let stats = state
                .chapter()
                .and_then(|chapter| ctx.chapters().stats(chapter).ok())
                .map(|stats| ChapterStatsVm::from(&stats));
            rsx! {
                QuizView { vm, stats, on_intent }
            }
        }
        Screen::Results => match state.summary() {
            Some(summary) => {
                let vm = ResultsVm::new(state.chapter_name(), summary);
                let has_next_batch = state.has_next_batch();
                rsx! {
                    ResultsView { vm, has_next_batch, on_intent }
                }
            }
            None => rsx! {
                p { class: "error", "{ViewError::Unknown.message()}" }
            },
        },
        Screen::Leaderboard => {
            let current_user = state.user().map(|u| u.id());
            rsx! {
                LeaderboardView { current_user, on_intent }
            }
        }
    };

    rsx! {
        if let Some(err) = error() {
            div { class: "toast error", role: "alert", "{err.message()}" }
        }
        {screen}
    }
}
