use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{AttemptRowVm, DashboardVm, QuizIntent};

#[component]
pub fn DashboardView(user_name: String, on_intent: Callback<QuizIntent>) -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(
        ctx.dashboard()
            .overview(ctx.history_limit())
            .map(|overview| DashboardVm::from(&overview))
            .map_err(ViewError::from),
    );

    rsx! {
        div { class: "page dashboard",
            header {
                h1 { "Welcome back, " span { class: "accent", "{user_name}" } "! 🎉" }
                p { class: "muted", "Ready to continue your CCC preparation?" }
            }

            match state {
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    div { class: "stats",
                        div { class: "stat",
                            h3 { "Best Score" }
                            p { class: "value", "{vm.best_score_label}" }
                            p { class: "muted", "Your highest achievement" }
                        }
                        div { class: "stat",
                            h3 { "Quizzes Taken" }
                            p { class: "value", "{vm.total_quizzes}" }
                            p { class: "muted", "Total attempts" }
                        }
                        div { class: "stat",
                            h3 { "Progress" }
                            p { class: "value", "{vm.status_label}" }
                            p { class: "muted", "Learning status" }
                        }
                    }

                    div { class: "actions",
                        button { class: "btn hero", onclick: move |_| on_intent.call(QuizIntent::StartQuiz),
                            "Start New Quiz"
                        }
                        button { class: "btn outline", onclick: move |_| on_intent.call(QuizIntent::ViewLeaderboard),
                            "View Leaderboard"
                        }
                    }

                    section { class: "card history",
                        h2 { "Recent Quiz Attempts" }
                        p { class: "muted", "Your learning journey so far" }
                        if vm.recent.is_empty() {
                            div { class: "empty",
                                h3 { "No quizzes taken yet" }
                                p { "Start your first quiz to see your progress here!" }
                                button { class: "btn hero", onclick: move |_| on_intent.call(QuizIntent::StartQuiz),
                                    "Take Your First Quiz"
                                }
                            }
                        } else {
                            ul {
                                for row in vm.recent {
                                    AttemptRow { key: "{row.key}", row }
                                }
                            }
                            if let Some(label) = vm.view_all_label {
                                button { class: "btn outline small", "{label}" }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn AttemptRow(row: AttemptRowVm) -> Element {
    rsx! {
        li { class: "attempt",
            div {
                h4 { "{row.quiz_name}" }
                p { class: "muted", "{row.completed_on}" }
            }
            span { class: row.badge_class, "{row.score_label}" }
        }
    }
}
