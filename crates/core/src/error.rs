use thiserror::Error;

use crate::model::{
    ChapterError, LanguageError, LeaderboardError, LoginError, QuestionError, ScoreError,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Chapter(#[from] ChapterError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Language(#[from] LanguageError),
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
    #[error(transparent)]
    Login(#[from] LoginError),
}
