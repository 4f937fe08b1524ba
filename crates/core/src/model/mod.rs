mod attempt;
mod chapter;
mod ids;
mod language;
mod leaderboard;
mod question;
mod score;
mod summary;
mod user;

pub use ids::{AttemptId, ChapterId, ParseIdError, ParticipantId, QuestionId, UserId};

pub use attempt::QuizAttempt;
pub use chapter::{Chapter, ChapterError};
pub use language::{Language, LanguageError};
pub use leaderboard::{LeaderboardEntry, LeaderboardError, LeaderboardStats, Medal, RankTier};
pub use question::{Difficulty, OPTION_COUNT, Question, QuestionError};
pub use score::{Score, ScoreBand, ScoreError, ScoreTier, round_mean, round_percent};
pub use summary::{QuizResult, QuizSummary};
pub use user::{LoginError, LoginField, LoginForm, UserProfile};
