use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BATCH_SIZE: usize = 50;
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30 * 60;
pub const DEFAULT_HISTORY_LIMIT: usize = 5;

/// Tunables for a quiz session.
///
/// Deserializing goes through [`QuizConfig::new`]; missing fields take their
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuizConfig")]
pub struct QuizConfig {
    batch_size: usize,
    time_limit_secs: u32,
    auto_submit_on_expiry: bool,
    history_limit: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            auto_submit_on_expiry: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawQuizConfig {
    batch_size: usize,
    time_limit_secs: u32,
    auto_submit_on_expiry: bool,
    history_limit: usize,
}

impl Default for RawQuizConfig {
    fn default() -> Self {
        let config = QuizConfig::default();
        Self {
            batch_size: config.batch_size,
            time_limit_secs: config.time_limit_secs,
            auto_submit_on_expiry: config.auto_submit_on_expiry,
            history_limit: config.history_limit,
        }
    }
}

impl TryFrom<RawQuizConfig> for QuizConfig {
    type Error = ConfigError;

    fn try_from(raw: RawQuizConfig) -> Result<Self, Self::Error> {
        QuizConfig::new(
            raw.batch_size,
            raw.time_limit_secs,
            raw.auto_submit_on_expiry,
            raw.history_limit,
        )
    }
}

impl QuizConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if any size or limit is zero.
    pub fn new(
        batch_size: usize,
        time_limit_secs: u32,
        auto_submit_on_expiry: bool,
        history_limit: usize,
    ) -> Result<Self, ConfigError> {
        if batch_size == 0 {
            return Err(ConfigError::ZeroBatchSize);
        }
        if time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        Ok(Self {
            batch_size,
            time_limit_secs,
            auto_submit_on_expiry,
            history_limit,
        })
    }

    /// Questions served per quiz.
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Countdown length in seconds.
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    /// Whether the tick that reaches zero submits the quiz.
    #[must_use]
    pub fn auto_submit_on_expiry(&self) -> bool {
        self.auto_submit_on_expiry
    }

    /// Attempts listed on the dashboard.
    #[must_use]
    pub fn history_limit(&self) -> usize {
        self.history_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_exam_format() {
        let config = QuizConfig::default();
        assert_eq!(config.batch_size(), 50);
        assert_eq!(config.time_limit_secs(), 1800);
        assert!(!config.auto_submit_on_expiry());
        assert_eq!(config.history_limit(), 5);
    }

    #[test]
    fn rejects_zero_values() {
        assert_eq!(QuizConfig::new(0, 60, false, 5), Err(ConfigError::ZeroBatchSize));
        assert_eq!(QuizConfig::new(10, 0, false, 5), Err(ConfigError::ZeroTimeLimit));
        assert_eq!(QuizConfig::new(10, 60, false, 0), Err(ConfigError::ZeroHistoryLimit));
    }

    #[test]
    fn round_trips_through_json() {
        let config = QuizConfig::new(10, 120, true, 3).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: QuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn deserializing_rejects_zero_values() {
        let err = serde_json::from_str::<QuizConfig>(
            r#"{"batch_size":0,"time_limit_secs":0,"auto_submit_on_expiry":false,"history_limit":0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("batch size"), "{err}");

        let err = serde_json::from_str::<QuizConfig>(r#"{"time_limit_secs":0}"#).unwrap_err();
        assert!(err.to_string().contains("time limit"), "{err}");
    }

    #[test]
    fn deserializing_fills_missing_fields_with_defaults() {
        let config: QuizConfig = serde_json::from_str(r#"{"batch_size":10}"#).unwrap();
        assert_eq!(config.batch_size(), 10);
        assert_eq!(config.time_limit_secs(), DEFAULT_TIME_LIMIT_SECS);
        assert_eq!(config.history_limit(), DEFAULT_HISTORY_LIMIT);
        assert!(!config.auto_submit_on_expiry());
    }
}
