#![forbid(unsafe_code)]

pub mod mock;
pub mod question_bank;
pub mod repository;

pub use question_bank::{StaticQuestionBank, cycle_batch};
pub use repository::{InMemoryRepository, Storage, StorageError};
