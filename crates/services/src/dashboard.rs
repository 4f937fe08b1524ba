use std::sync::Arc;

use quiz_core::model::{QuizAttempt, Score};
use storage::repository::QuizHistoryRepository;

use crate::error::ServiceError;

/// Whether the student has taken any quiz yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityStatus {
    Active,
    GettingStarted,
}

impl ActivityStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActivityStatus::Active => "Active",
            ActivityStatus::GettingStarted => "Getting Started",
        }
    }
}

/// Stats shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardOverview {
    pub best_score: Score,
    pub total_quizzes: usize,
    pub status: ActivityStatus,
    /// Newest first.
    pub recent: Vec<QuizAttempt>,
}

impl DashboardOverview {
    /// Derive the overview from `attempts` (newest first), keeping `limit` recent ones.
    #[must_use]
    pub fn from_attempts(attempts: &[QuizAttempt], limit: usize) -> Self {
        let best_score = attempts
            .iter()
            .map(QuizAttempt::score)
            .max()
            .unwrap_or_default();
        let status = if attempts.is_empty() {
            ActivityStatus::GettingStarted
        } else {
            ActivityStatus::Active
        };
        Self {
            best_score,
            total_quizzes: attempts.len(),
            status,
            recent: attempts.iter().take(limit).cloned().collect(),
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    history: Arc<dyn QuizHistoryRepository>,
}

impl DashboardService {
    #[must_use]
    pub fn new(history: Arc<dyn QuizHistoryRepository>) -> Self {
        Self { history }
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the history cannot be read.
    pub fn overview(&self, limit: usize) -> Result<DashboardOverview, ServiceError> {
        let attempts = self.history.list_attempts(usize::MAX)?;
        Ok(DashboardOverview::from_attempts(&attempts, limit))
    }
}
