use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::chapters::ChapterService;
use crate::config::QuizConfig;
use crate::dashboard::DashboardService;
use crate::error::AppServicesError;
use crate::leaderboard::LeaderboardService;
use crate::quiz::QuizFlowService;

/// Assembles app-facing services from shared data sources.
#[derive(Clone)]
pub struct AppServices {
    config: QuizConfig,
    quiz: Arc<QuizFlowService>,
    dashboard: Arc<DashboardService>,
    leaderboard: Arc<LeaderboardService>,
    chapters: Arc<ChapterService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage, clock: Clock, config: QuizConfig) -> Self {
        let quiz = Arc::new(QuizFlowService::from_storage(clock, config, storage));
        let dashboard = Arc::new(DashboardService::new(Arc::clone(&storage.history)));
        let leaderboard = Arc::new(LeaderboardService::new(Arc::clone(&storage.leaderboard)));
        let chapters = Arc::new(ChapterService::new(
            Arc::clone(&storage.chapters),
            Arc::clone(&storage.questions),
            config.batch_size(),
        ));

        Self {
            config,
            quiz,
            dashboard,
            leaderboard,
            chapters,
        }
    }

    /// Build services over the built-in mock data.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if the embedded data is invalid.
    pub fn new_mock(clock: Clock, config: QuizConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::mock()?;
        Ok(Self::new(&storage, clock, config))
    }

    #[must_use]
    pub fn config(&self) -> QuizConfig {
        self.config
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
