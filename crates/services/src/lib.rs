#![forbid(unsafe_code)]

pub mod app_services;
pub mod chapters;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod explanation;
pub mod leaderboard;
pub mod quiz;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use chapters::{ChapterService, ChapterStats};
pub use config::QuizConfig;
pub use dashboard::{ActivityStatus, DashboardOverview, DashboardService};
pub use error::{AppServicesError, ConfigError, QuizFlowError, ServiceError};
pub use explanation::explain;
pub use leaderboard::{LeaderboardBoard, LeaderboardService};
pub use quiz::{AdvanceOutcome, QuizFlowService, QuizProgress, Screen, SessionState, TickOutcome};
