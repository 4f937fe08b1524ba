use quiz_core::model::{QuizAttempt, ScoreTier};
use services::DashboardOverview;

use crate::vm::time_fmt::format_date;

#[must_use]
pub fn tier_class(tier: ScoreTier) -> &'static str {
    match tier {
        ScoreTier::High => "badge high",
        ScoreTier::Mid => "badge mid",
        ScoreTier::Low => "badge low",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptRowVm {
    pub key: u64,
    pub quiz_name: String,
    pub completed_on: String,
    pub score_label: String,
    pub badge_class: &'static str,
}

impl From<&QuizAttempt> for AttemptRowVm {
    fn from(attempt: &QuizAttempt) -> Self {
        Self {
            key: attempt.id().value(),
            quiz_name: attempt.quiz_name().to_string(),
            completed_on: format!("Completed on {}", format_date(attempt.date())),
            score_label: attempt.score().to_string(),
            badge_class: tier_class(attempt.tier()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub best_score_label: String,
    pub total_quizzes: usize,
    pub status_label: &'static str,
    pub recent: Vec<AttemptRowVm>,
    /// Set when more attempts exist than are listed.
    pub view_all_label: Option<String>,
}

impl From<&DashboardOverview> for DashboardVm {
    fn from(overview: &DashboardOverview) -> Self {
        let recent: Vec<AttemptRowVm> = overview.recent.iter().map(AttemptRowVm::from).collect();
        let view_all_label = (overview.total_quizzes > recent.len())
            .then(|| format!("View All {} Attempts", overview.total_quizzes));
        Self {
            best_score_label: overview.best_score.to_string(),
            total_quizzes: overview.total_quizzes,
            status_label: overview.status.label(),
            recent,
            view_all_label,
        }
    }
}
