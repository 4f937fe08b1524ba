use chrono::NaiveDate;

use crate::model::ids::AttemptId;
use crate::model::score::{Score, ScoreTier};

/// A finished quiz as it appears in the user's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAttempt {
    id: AttemptId,
    quiz_name: String,
    score: Score,
    date: NaiveDate,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(id: AttemptId, quiz_name: impl Into<String>, score: Score, date: NaiveDate) -> Self {
        Self {
            id,
            quiz_name: quiz_name.into(),
            score,
            date,
        }
    }

    #[must_use]
    pub fn id(&self) -> AttemptId {
        self.id
    }

    #[must_use]
    pub fn quiz_name(&self) -> &str {
        &self.quiz_name
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.score)
    }
}
