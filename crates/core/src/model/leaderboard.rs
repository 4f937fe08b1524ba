use thiserror::Error;

use crate::model::ids::ParticipantId;
use crate::model::score::{Score, round_mean};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LeaderboardError {
    #[error("participant name cannot be empty")]
    EmptyName,

    #[error("rank must start at 1")]
    ZeroRank,
}

/// One row of the global leaderboard.
///
/// Rank is supplied by the data source (1-based, ordered by score descending);
/// it is never recomputed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    id: ParticipantId,
    name: String,
    score: Score,
    rank: u32,
}

impl LeaderboardEntry {
    /// # Errors
    ///
    /// Returns `LeaderboardError` for an empty name or a zero rank.
    pub fn new(
        id: ParticipantId,
        name: impl Into<String>,
        score: Score,
        rank: u32,
    ) -> Result<Self, LeaderboardError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LeaderboardError::EmptyName);
        }
        if rank == 0 {
            return Err(LeaderboardError::ZeroRank);
        }
        Ok(Self {
            id,
            name,
            score,
            rank,
        })
    }

    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn rank(&self) -> u32 {
        self.rank
    }

    #[must_use]
    pub fn tier(&self) -> RankTier {
        RankTier::from_rank(self.rank)
    }

    #[must_use]
    pub fn medal(&self) -> Option<Medal> {
        Medal::for_rank(self.rank)
    }
}

/// Badge tier for a rank: top three, top ten, everyone else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankTier {
    Podium,
    TopTen,
    Field,
}

impl RankTier {
    #[must_use]
    pub fn from_rank(rank: u32) -> Self {
        match rank {
            0..=3 => RankTier::Podium,
            4..=10 => RankTier::TopTen,
            _ => RankTier::Field,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    #[must_use]
    pub fn for_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// Aggregate figures shown under the leaderboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeaderboardStats {
    pub participants: usize,
    /// `round(mean(scores))`, 0 for an empty board.
    pub average: u8,
    /// `max(scores)`, 0 for an empty board.
    pub highest: u8,
}

impl LeaderboardStats {
    #[must_use]
    pub fn from_entries(entries: &[LeaderboardEntry]) -> Self {
        let sum: u64 = entries.iter().map(|e| u64::from(e.score.value())).sum();
        let count = u64::try_from(entries.len()).unwrap_or(u64::MAX);
        let average = u8::try_from(round_mean(sum, count)).unwrap_or(100);
        let highest = entries
            .iter()
            .map(|e| e.score.value())
            .max()
            .unwrap_or(0);
        Self {
            participants: entries.len(),
            average,
            highest,
        }
    }
}
