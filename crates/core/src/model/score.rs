use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("score must be between 0 and 100, got {0}")]
    OutOfRange(u8),
}

/// Rounds `100 * part / whole` half-up; an empty whole yields 0.
#[must_use]
pub fn round_percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    // floor(100p/w + 1/2) in integers
    let rounded = (part * 200 + whole) / (whole * 2);
    u8::try_from(rounded).unwrap_or(100)
}

/// Integer mean rounded half-up; an empty set yields 0.
#[must_use]
pub fn round_mean(sum: u64, count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    (sum * 2 + count) / (count * 2)
}

/// A quiz score as a whole percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: Score = Score(100);

    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` for values above 100.
    pub fn new(value: u8) -> Result<Self, ScoreError> {
        if value > 100 {
            return Err(ScoreError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// `round(100 * correct / total)`; zero questions score 0.
    #[must_use]
    pub fn from_ratio(correct: usize, total: usize) -> Self {
        let correct = u64::try_from(correct).unwrap_or(u64::MAX);
        let total = u64::try_from(total).unwrap_or(u64::MAX);
        Self(round_percent(correct, total))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Headline shown on the results screen for a given score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Excellent,
    Great,
    Good,
    KeepPracticing,
    DontGiveUp,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            90.. => ScoreBand::Excellent,
            80..=89 => ScoreBand::Great,
            70..=79 => ScoreBand::Good,
            60..=69 => ScoreBand::KeepPracticing,
            _ => ScoreBand::DontGiveUp,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent Work!",
            ScoreBand::Great => "Great Job!",
            ScoreBand::Good => "Good Progress!",
            ScoreBand::KeepPracticing => "Keep Practicing!",
            ScoreBand::DontGiveUp => "Don't Give Up!",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "🏆",
            ScoreBand::Great => "🎉",
            ScoreBand::Good => "👍",
            ScoreBand::KeepPracticing => "💪",
            ScoreBand::DontGiveUp => "🌟",
        }
    }

    /// Bands at 80 and above are celebrated, 60–79 get a nudge.
    #[must_use]
    pub fn tone(self) -> &'static str {
        match self {
            ScoreBand::Excellent | ScoreBand::Great => "success",
            ScoreBand::Good | ScoreBand::KeepPracticing => "warning",
            ScoreBand::DontGiveUp => "default",
        }
    }
}

/// Badge tier for a score in attempt lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            90.. => ScoreTier::High,
            70..=89 => ScoreTier::Mid,
            _ => ScoreTier::Low,
        }
    }
}
