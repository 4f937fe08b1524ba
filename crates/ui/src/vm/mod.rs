mod dashboard_vm;
mod intent;
mod leaderboard_vm;
mod quiz_vm;
mod results_vm;
mod selection_vm;
mod time_fmt;

pub use dashboard_vm::{AttemptRowVm, DashboardVm, tier_class};
pub use intent::{QuizIntent, apply_intent};
pub use leaderboard_vm::{LeaderboardVm, RankRowVm, map_leaderboard};
pub use quiz_vm::{QuizOptionVm, QuizVm, option_letter};
pub use results_vm::{ResultsVm, ReviewItemVm, ReviewMark, ReviewOptionVm, map_review_items};
pub use selection_vm::{ChapterCardVm, ChapterStatsVm, map_chapter_cards};
pub use time_fmt::{format_countdown, format_date};
