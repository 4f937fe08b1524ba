use dioxus::prelude::*;
use quiz_core::model::{Language, QuestionId};
use services::explain;

use crate::vm::{QuizIntent, ResultsVm, ReviewItemVm};

#[component]
pub fn ResultsView(vm: ResultsVm, has_next_batch: bool, on_intent: Callback<QuizIntent>) -> Element {
    let explaining = use_signal(|| None::<QuestionId>);
    let explanation_language = use_signal(Language::default);

    rsx! {
        div { class: "page results",
            section { class: "card summary tone-{vm.tone}",
                div { class: "emoji", "{vm.emoji}" }
                h1 { "{vm.headline}" }
                p { class: "muted", "You've completed the quiz for " strong { "{vm.chapter_name}" } }
                div { class: "stats",
                    div { class: "stat",
                        p { class: "value", "{vm.score_label}" }
                        p { class: "muted", "Final Score" }
                    }
                    div { class: "stat",
                        p { class: "value", "{vm.correct}" }
                        p { class: "muted", "Correct Answers" }
                    }
                    div { class: "stat",
                        p { class: "value", "{vm.total}" }
                        p { class: "muted", "Total Questions" }
                    }
                }
            }

            div { class: "actions",
                button { class: "btn outline", onclick: move |_| on_intent.call(QuizIntent::BackToDashboard),
                    "Back to Dashboard"
                }
                if has_next_batch {
                    button { class: "btn hero", onclick: move |_| on_intent.call(QuizIntent::NextBatch),
                        "Start Next Batch"
                    }
                }
            }

            section { class: "card review",
                h2 { "Review Your Answers" }
                p { class: "muted", "Go through each question to understand the correct answers" }
                for item in vm.review.clone() {
                    ReviewItem { key: "{item.key()}", item, explaining, explanation_language }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(
    item: ReviewItemVm,
    explaining: Signal<Option<QuestionId>>,
    explanation_language: Signal<Language>,
) -> Element {
    let question_id = item.result.question_id.clone();
    let open = explaining.read().as_ref() == Some(&question_id);
    let language = explanation_language();
    let explanation = explain(&item.result, language);

    rsx! {
        div { class: "review-item",
            div { class: "review-head",
                span { class: "badge outline", "Question {item.number}" }
                span { class: if item.result.is_correct { "mark correct" } else { "mark incorrect" },
                    if item.result.is_correct { "✔" } else { "✘" }
                }
                p { "{item.result.prompt}" }
                button { class: "btn outline small", onclick: move |_| {
                        let mut explaining = explaining;
                        let next = (!open).then(|| question_id.clone());
                        explaining.set(next);
                    },
                    "Explain"
                }
            }
            div { class: "options",
                for option in item.options.clone() {
                    div { key: "{option.letter}", class: option.mark.class(),
                        span { class: "letter", "{option.letter}" }
                        span { class: "text", "{option.text}" }
                    }
                }
            }
            if open {
                div { class: "explanation",
                    h4 { "AI Explanation" }
                    p { class: "muted", "Understanding why this is the correct answer" }
                    div { class: "language-toggle",
                        span { "Language:" }
                        for option in Language::EXPLANATION {
                            button {
                                key: "{option.as_str()}",
                                class: if option == language { "btn toggle active" } else { "btn toggle" },
                                onclick: move |_| {
                                    let mut explanation_language = explanation_language;
                                    explanation_language.set(option);
                                },
                                "{option.native_label()}"
                            }
                        }
                    }
                    p { class: "explanation-text", "{explanation}" }
                }
            }
        }
    }
}
