//! Placeholder data served until a real backend exists.

use chrono::NaiveDate;
use quiz_core::model::{
    AttemptId, Chapter, ChapterId, LeaderboardEntry, ParticipantId, QuizAttempt, Score,
};

use crate::repository::StorageError;

/// (id, English name, Hindi name, completed of 250)
const CHAPTERS: [(&str, &str, &str, u32); 10] = [
    ("intro-computer", "Introduction to Computer", "कंप्यूटर का परिचय", 45),
    ("operating-system", "Operating System", "ऑपरेटिंग सिस्टम", 120),
    ("word-processing", "Word Processing", "वर्ड प्रोसेसिंग", 0),
    ("spreadsheet", "Spreadsheet", "स्प्रेडशीट", 250),
    ("presentation", "Presentation", "प्रेजेंटेशन", 75),
    ("internet-www", "Internet and WWW", "इंटरनेट और वर्ल्ड वाइड वेब", 30),
    (
        "email-social",
        "E-mail, Social Networking and e-Governance",
        "ई-मेल, सोशल नेटवर्किंग और ई-गवर्नेंस",
        0,
    ),
    (
        "digital-financial",
        "Digital Financial Tools and Applications",
        "डिजिटल वित्तीय उपकरण और अनुप्रयोग",
        10,
    ),
    ("cyber-security", "Overview of Cyber Security", "साइबर सुरक्षा का अवलोकन", 0),
    (
        "future-skills-ai",
        "Future Skills and Artificial Intelligence",
        "फ्यूचर स्किल्स और आर्टिफिशियल इंटेलिजेंस",
        0,
    ),
];

const QUESTIONS_PER_CHAPTER: u32 = 250;

const HISTORY: [(u64, &str, u8, (i32, u32, u32)); 3] = [
    (1, "Basic Computer Concepts", 85, (2024, 1, 15)),
    (2, "Input & Output Devices", 92, (2024, 1, 14)),
    (3, "Computer Memory", 78, (2024, 1, 13)),
];

const LEADERBOARD: [(u64, &str, u8, u32); 5] = [
    (1, "Raj Patel", 98, 1),
    (2, "Priya Singh", 95, 2),
    (3, "Amit Kumar", 94, 3),
    (4, "Sneha Sharma", 91, 4),
    (5, "Rohit Verma", 89, 5),
];

fn invalid(e: impl std::fmt::Display) -> StorageError {
    StorageError::InvalidRecord(e.to_string())
}

/// # Errors
///
/// Returns `StorageError::InvalidRecord` if a built-in chapter fails validation.
pub fn chapters() -> Result<Vec<Chapter>, StorageError> {
    CHAPTERS
        .iter()
        .map(|(id, name, hindi, completed)| {
            Chapter::new(
                ChapterId::new(*id),
                *name,
                *hindi,
                QUESTIONS_PER_CHAPTER,
                *completed,
            )
            .map_err(invalid)
        })
        .collect()
}

/// Newest first.
///
/// # Errors
///
/// Returns `StorageError::InvalidRecord` if a built-in attempt fails validation.
pub fn history() -> Result<Vec<QuizAttempt>, StorageError> {
    HISTORY
        .iter()
        .map(|(id, name, score, (y, m, d))| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)
                .ok_or_else(|| invalid(format!("bad date for attempt {id}")))?;
            let score = Score::new(*score).map_err(invalid)?;
            Ok(QuizAttempt::new(AttemptId::new(*id), *name, score, date))
        })
        .collect()
}

/// # Errors
///
/// Returns `StorageError::InvalidRecord` if a built-in entry fails validation.
pub fn leaderboard() -> Result<Vec<LeaderboardEntry>, StorageError> {
    LEADERBOARD
        .iter()
        .map(|(id, name, score, rank)| {
            let score = Score::new(*score).map_err(invalid)?;
            LeaderboardEntry::new(ParticipantId::new(*id), *name, score, *rank).map_err(invalid)
        })
        .collect()
}
