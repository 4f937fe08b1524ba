use std::sync::Arc;

use services::{ChapterService, DashboardService, LeaderboardService, QuizFlowService};

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizFlowService>;
    fn dashboard(&self) -> Arc<DashboardService>;
    fn leaderboard(&self) -> Arc<LeaderboardService>;
    fn chapters(&self) -> Arc<ChapterService>;

    /// Attempts listed on the dashboard.
    fn history_limit(&self) -> usize;
}

#[derive(Clone)]
pub struct AppContext {
    history_limit: usize,

    quiz: Arc<QuizFlowService>,
    dashboard: Arc<DashboardService>,
    leaderboard: Arc<LeaderboardService>,
    chapters: Arc<ChapterService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            history_limit: app.history_limit(),
            quiz: app.quiz(),
            dashboard: app.dashboard(),
            leaderboard: app.leaderboard(),
            chapters: app.chapters(),
        }
    }

    #[must_use]
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }

    #[must_use]
    pub fn leaderboard(&self) -> Arc<LeaderboardService> {
        Arc::clone(&self.leaderboard)
    }

    #[must_use]
    pub fn chapters(&self) -> Arc<ChapterService> {
        Arc::clone(&self.chapters)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
