use dioxus::prelude::*;
use quiz_core::model::Language;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_result};
use crate::vm::{ChapterCardVm, QuizIntent, map_chapter_cards};

#[component]
pub fn SelectionView(on_intent: Callback<QuizIntent>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut language = use_signal(Language::default);
    let current = language();
    let batch_size = ctx.quiz().config().batch_size();

    let state = view_state_from_result(
        ctx.chapters()
            .list_chapters()
            .map(|chapters| map_chapter_cards(&chapters, current))
            .map_err(ViewError::from),
    );

    rsx! {
        div { class: "page selection",
            header {
                button { class: "btn ghost", onclick: move |_| on_intent.call(QuizIntent::BackToDashboard),
                    "← Back to Dashboard"
                }
                h1 { "Choose Your Chapter" }
                p { class: "muted", "Select a chapter and language to start practicing" }
                div { class: "language-toggle",
                    span { "Language:" }
                    for option in Language::QUIZ {
                        button {
                            key: "{option.as_str()}",
                            class: if option == current { "btn toggle active" } else { "btn toggle" },
                            onclick: move |_| language.set(option),
                            "{option.native_label()}"
                        }
                    }
                }
            }

            match state {
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "chapters",
                        for card in cards {
                            ChapterCard { key: "{card.id}", card, language: current, on_intent }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "error", "{err.message()}" }
                },
            }

            section { class: "card how-it-works",
                h2 { "How It Works" }
                ol {
                    li { h4 { "Choose Chapter" } p { "Select any chapter to start practicing" } }
                    li { h4 { "Answer Questions" } p { "Practice with {batch_size} questions per batch" } }
                    li { h4 { "Track Progress" } p { "Monitor your learning journey" } }
                }
            }
        }
    }
}

#[component]
fn ChapterCard(card: ChapterCardVm, language: Language, on_intent: Callback<QuizIntent>) -> Element {
    let chapter = card.id.clone();
    rsx! {
        div { class: if card.is_completed { "card chapter completed" } else { "card chapter" },
            h3 { "{card.title}" }
            p { class: "muted", "{card.completed_label}" }
            if card.is_completed {
                span { class: "badge high", "Complete" }
            }
            div { class: "progress-row",
                span { "Progress" }
                span { "{card.progress_percent}%" }
            }
            progress { max: "100", value: "{card.progress_percent}" }
            p { class: "muted", "Total: {card.total} · Remaining: {card.remaining}" }
            button {
                class: if card.is_completed { "btn outline" } else { "btn hero" },
                disabled: card.is_completed,
                onclick: move |_| {
                    on_intent.call(QuizIntent::SelectChapter {
                        chapter: chapter.clone(),
                        language,
                    });
                },
                "{card.action_label()}"
            }
        }
    }
}
