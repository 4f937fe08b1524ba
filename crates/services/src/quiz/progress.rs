use quiz_core::model::round_percent;

/// Position within the active batch, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// One-based position of the current question.
    pub position: usize,
    pub total: usize,
    pub percent: u8,
}

impl QuizProgress {
    #[must_use]
    pub fn new(index: usize, total: usize) -> Self {
        let position = if total == 0 { 0 } else { index + 1 };
        Self {
            position,
            total,
            percent: round_percent(position as u64, total as u64),
        }
    }
}
