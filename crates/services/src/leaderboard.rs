use std::sync::Arc;

use quiz_core::model::{LeaderboardEntry, LeaderboardStats};
use storage::repository::LeaderboardRepository;

use crate::error::ServiceError;

const PODIUM_SIZE: usize = 3;

/// Leaderboard in source order with its aggregate stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardBoard {
    pub entries: Vec<LeaderboardEntry>,
    pub stats: LeaderboardStats,
}

impl LeaderboardBoard {
    #[must_use]
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        let stats = LeaderboardStats::from_entries(&entries);
        Self { entries, stats }
    }

    /// The first three entries.
    #[must_use]
    pub fn podium(&self) -> &[LeaderboardEntry] {
        &self.entries[..self.entries.len().min(PODIUM_SIZE)]
    }

    #[must_use]
    pub fn others(&self) -> &[LeaderboardEntry] {
        &self.entries[self.entries.len().min(PODIUM_SIZE)..]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone)]
pub struct LeaderboardService {
    entries: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardService {
    #[must_use]
    pub fn new(entries: Arc<dyn LeaderboardRepository>) -> Self {
        Self { entries }
    }

    /// # Errors
    ///
    /// Returns `ServiceError::Storage` if the board cannot be read.
    pub fn board(&self) -> Result<LeaderboardBoard, ServiceError> {
        Ok(LeaderboardBoard::new(self.entries.list_entries()?))
    }
}
