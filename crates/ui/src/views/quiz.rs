use std::time::Duration;

use dioxus::prelude::*;

use crate::vm::{ChapterStatsVm, QuizIntent, QuizOptionVm, QuizVm};

const TICK: Duration = Duration::from_secs(1);

/// The running quiz. Ticks the countdown once a second while mounted.
#[component]
pub fn QuizView(
    vm: Option<QuizVm>,
    stats: Option<ChapterStatsVm>,
    on_intent: Callback<QuizIntent>,
) -> Element {
    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            on_intent.call(QuizIntent::Tick);
        }
    });

    let Some(vm) = vm else {
        return rsx! {
            div { class: "page quiz loading",
                div { class: "spinner" }
                p { class: "muted", "Loading quiz..." }
            }
        };
    };

    let is_last = vm.is_last;
    let timer_class = if vm.expired {
        "badge outline timer expired"
    } else {
        "badge outline timer"
    };
    rsx! {
        div { class: "page quiz",
            header { class: "quiz-header",
                button { class: "btn ghost", onclick: move |_| on_intent.call(QuizIntent::BackToSelection),
                    "← Back to Selection"
                }
                div { class: "badges",
                    span { class: timer_class, "⏱ {vm.timer_label}" }
                    span { class: "badge high", "{vm.chapter_name}" }
                }
            }

            div { class: "progress-row",
                span { "{vm.question_label}" }
                span { "{vm.progress_label}" }
            }
            progress { max: "100", value: "{vm.progress_percent}" }

            div { class: "quiz-body",
                section { class: "card question",
                    h2 { "{vm.prompt}" }
                    div { class: "options",
                        for option in vm.options.clone() {
                            OptionButton { key: "{option.index}", option, on_intent }
                        }
                    }
                }
                if let Some(stats) = stats {
                    StatsPanel { stats }
                }
            }

            footer { class: "quiz-nav",
                p { class: "muted", "{vm.selection_hint()}" }
                button {
                    class: "btn hero",
                    disabled: !vm.can_advance,
                    onclick: move |_| {
                        let intent = if is_last { QuizIntent::Submit } else { QuizIntent::Advance };
                        on_intent.call(intent);
                    },
                    "{vm.advance_label()}"
                }
            }

            div { class: "card instructions",
                p { "• Select one answer from the options above" }
                p { "• You can change your answer before clicking Next" }
                p { "• All questions must be answered to complete the quiz" }
            }
        }
    }
}

#[component]
fn OptionButton(option: QuizOptionVm, on_intent: Callback<QuizIntent>) -> Element {
    let index = option.index;
    rsx! {
        button {
            class: if option.selected { "btn option selected" } else { "btn option" },
            onclick: move |_| on_intent.call(QuizIntent::SelectAnswer(index)),
            span { class: "letter", "{option.letter}" }
            span { class: "text", "{option.text}" }
        }
    }
}

#[component]
fn StatsPanel(stats: ChapterStatsVm) -> Element {
    rsx! {
        aside { class: "card stats-panel",
            h3 { "Chapter Statistics" }
            div { class: "progress-row",
                span { "Overall Progress" }
                span { "{stats.progress_label}" }
            }
            progress { max: "100", value: "{stats.progress_percent}" }
            p { "Completed: {stats.completed}" }
            p { "Remaining: {stats.remaining}" }
            p { "Current Batch " span { class: "badge high", "{stats.batch_label}" } }
            p { "Difficulty Level " span { class: "badge outline", "{stats.difficulty_label}" } }
        }
    }
}
