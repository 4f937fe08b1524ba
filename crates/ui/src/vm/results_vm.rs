use quiz_core::model::{QuizResult, QuizSummary, ScoreBand};

use crate::vm::quiz_vm::option_letter;

/// Headline figures of the results screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub chapter_name: String,
    pub emoji: &'static str,
    pub headline: &'static str,
    pub tone: &'static str,
    pub score_label: String,
    pub correct: usize,
    pub total: usize,
    pub review: Vec<ReviewItemVm>,
}

impl ResultsVm {
    #[must_use]
    pub fn new(chapter_name: &str, summary: &QuizSummary) -> Self {
        let band = ScoreBand::from_score(summary.score());
        Self {
            chapter_name: chapter_name.to_string(),
            emoji: band.emoji(),
            headline: band.message(),
            tone: band.tone(),
            score_label: summary.score().to_string(),
            correct: summary.correct_count(),
            total: summary.total(),
            review: map_review_items(summary.results()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewMark {
    Correct,
    /// The student's wrong pick.
    Incorrect,
    Plain,
}

impl ReviewMark {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ReviewMark::Correct => "option correct",
            ReviewMark::Incorrect => "option incorrect",
            ReviewMark::Plain => "option",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOptionVm {
    pub letter: char,
    pub text: String,
    pub mark: ReviewMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub result: QuizResult,
    pub options: Vec<ReviewOptionVm>,
}

impl ReviewItemVm {
    #[must_use]
    pub fn key(&self) -> &str {
        self.result.question_id.as_str()
    }
}

#[must_use]
pub fn map_review_items(results: &[QuizResult]) -> Vec<ReviewItemVm> {
    results
        .iter()
        .enumerate()
        .map(|(position, result)| {
            let options = result
                .options
                .iter()
                .enumerate()
                .map(|(index, text)| {
                    let mark = if index == result.correct_answer {
                        ReviewMark::Correct
                    } else if result.user_answer == Some(index) {
                        ReviewMark::Incorrect
                    } else {
                        ReviewMark::Plain
                    };
                    ReviewOptionVm {
                        letter: option_letter(index),
                        text: text.clone(),
                        mark,
                    }
                })
                .collect();
            ReviewItemVm {
                number: position + 1,
                result: result.clone(),
                options,
            }
        })
        .collect()
}
