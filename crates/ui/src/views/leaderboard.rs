use dioxus::prelude::*;
use quiz_core::model::UserId;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{LeaderboardVm, QuizIntent, RankRowVm, map_leaderboard};

#[component]
pub fn LeaderboardView(current_user: Option<UserId>, on_intent: Callback<QuizIntent>) -> Element {
    let ctx = use_context::<AppContext>();
    let state = view_state_from_result(
        ctx.leaderboard()
            .board()
            .map(|board| map_leaderboard(&board, current_user))
            .map_err(ViewError::from),
    );

    rsx! {
        div { class: "page leaderboard",
            header {
                button { class: "btn ghost", onclick: move |_| on_intent.call(QuizIntent::BackToDashboard),
                    "← Back to Dashboard"
                }
                h1 { "Leaderboard" }
                p { class: "muted", "Top performers in CCC Quiz World" }
            }

            match state {
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(vm) => rsx! {
                    Board { vm }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn Board(vm: LeaderboardVm) -> Element {
    rsx! {
        if !vm.podium.is_empty() {
            section { class: "podium",
                h2 { "🏆 Hall of Fame 🏆" }
                div { class: "podium-cards",
                    for row in vm.podium.clone() {
                        div { key: "{row.key}", class: "card podium-card rank-{row.rank}",
                            span { class: "icon", "{row.icon}" }
                            h3 { "{row.name}" }
                            span { class: row.badge_class, "Rank #{row.rank}" }
                            p { class: "value", "{row.score_label}" }
                            p { class: "muted", "Best Score" }
                        }
                    }
                }
            }
        }

        section { class: "card rankings",
            h2 { "Complete Rankings" }
            p { class: "muted", "All participants ranked by their highest quiz scores" }
            if vm.rows.is_empty() {
                div { class: "empty",
                    h3 { "No scores yet" }
                    p { "Be the first to complete a quiz and claim the top spot!" }
                }
            } else {
                ul {
                    for row in vm.rows.clone() {
                        RankRow { key: "{row.key}", row }
                    }
                }
            }
        }

        div { class: "stats",
            div { class: "stat",
                p { class: "value", "{vm.participants}" }
                p { class: "muted", "Total Participants" }
            }
            div { class: "stat",
                p { class: "value", "{vm.average_label}" }
                p { class: "muted", "Average Score" }
            }
            div { class: "stat",
                p { class: "value", "{vm.highest_label}" }
                p { class: "muted", "Highest Score" }
            }
        }
    }
}

#[component]
fn RankRow(row: RankRowVm) -> Element {
    rsx! {
        li { class: row.row_class(),
            span { class: "icon", "{row.icon}" }
            span { class: row.badge_class, "#{row.rank}" }
            h4 {
                "{row.name}"
                if row.is_current_user {
                    span { class: "accent", " (You)" }
                }
            }
            span { class: "value", "{row.score_label}" }
            span { class: "muted", "Best Score" }
        }
    }
}
