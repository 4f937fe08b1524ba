use services::SessionState;

use crate::vm::time_fmt::format_countdown;

/// `0 -> 'A'`, `1 -> 'B'`, ...
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

/// Everything the quiz screen renders for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub chapter_name: String,
    pub timer_label: String,
    pub expired: bool,
    pub question_label: String,
    pub progress_label: String,
    pub progress_percent: u8,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub can_advance: bool,
    pub is_last: bool,
}

impl QuizVm {
    /// `None` while the batch is empty.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        let question = state.current_question()?;
        let progress = state.progress();
        let staged = state.staged_answer();

        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| QuizOptionVm {
                index,
                letter: option_letter(index),
                text: text.clone(),
                selected: staged == Some(index),
            })
            .collect();

        let expired = state.is_expired();
        let timer_label = if expired {
            "Time's up".to_string()
        } else {
            format_countdown(state.time_remaining())
        };

        Some(Self {
            chapter_name: state.chapter_name().to_string(),
            timer_label,
            expired,
            question_label: format!("Question {} of {}", progress.position, progress.total),
            progress_label: format!("{}% Complete", progress.percent),
            progress_percent: progress.percent,
            prompt: question.prompt().to_string(),
            options,
            can_advance: state.can_advance(),
            is_last: state.is_last_question(),
        })
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.is_last {
            "Submit Quiz"
        } else {
            "Next Question"
        }
    }

    #[must_use]
    pub fn selection_hint(&self) -> &'static str {
        if self.can_advance {
            "Answer selected"
        } else {
            "Please select an answer to continue"
        }
    }
}
