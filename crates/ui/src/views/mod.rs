mod dashboard;
mod leaderboard;
mod quiz;
mod results;
mod selection;
mod state;
mod welcome;

pub use dashboard::DashboardView;
pub use leaderboard::LeaderboardView;
pub use quiz::QuizView;
pub use results::ResultsView;
pub use selection::SelectionView;
pub use state::{ViewError, ViewState, view_state_from_result};
pub use welcome::WelcomeView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
