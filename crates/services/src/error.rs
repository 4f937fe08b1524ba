//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{Language, LoginError};
use storage::StorageError;

use crate::quiz::Screen;

/// Errors emitted by `QuizFlowService` transitions.
///
/// A failed transition leaves the session state untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizFlowError {
    #[error("{action} is not available on the {screen} screen")]
    InvalidTransition { action: &'static str, screen: Screen },
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error("{0} cannot be used as a quiz language")]
    UnsupportedLanguage(Language),
    #[error("option {index} is out of range for {count} options")]
    OptionOutOfRange { index: usize, count: usize },
    #[error("no answer selected")]
    NoAnswerSelected,
    #[error("no question loaded")]
    NoQuestion,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the read-side services (dashboard, leaderboard, chapters).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while validating `QuizConfig`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("batch size must be > 0")]
    ZeroBatchSize,
    #[error("time limit must be > 0 seconds")]
    ZeroTimeLimit,
    #[error("history limit must be > 0")]
    ZeroHistoryLimit,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
