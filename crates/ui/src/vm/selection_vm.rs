use quiz_core::model::{Chapter, ChapterId, Difficulty, Language};
use services::ChapterStats;

/// A chapter card on the selection screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterCardVm {
    pub id: ChapterId,
    pub title: String,
    pub completed_label: String,
    pub progress_percent: u8,
    pub total: u32,
    pub remaining: u32,
    pub is_completed: bool,
}

impl ChapterCardVm {
    #[must_use]
    pub fn new(chapter: &Chapter, language: Language) -> Self {
        Self {
            id: chapter.id().clone(),
            title: chapter.name_in(language).to_string(),
            completed_label: format!(
                "{} / {} Questions Completed",
                chapter.completed_questions(),
                chapter.total_questions()
            ),
            progress_percent: chapter.progress_percent(),
            total: chapter.total_questions(),
            remaining: chapter.remaining_questions(),
            is_completed: chapter.is_completed(),
        }
    }

    /// Completed chapters cannot be started again.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else if self.remaining == self.total {
            "Start"
        } else {
            "Continue"
        }
    }
}

#[must_use]
pub fn map_chapter_cards(chapters: &[Chapter], language: Language) -> Vec<ChapterCardVm> {
    chapters
        .iter()
        .map(|chapter| ChapterCardVm::new(chapter, language))
        .collect()
}

/// The "Chapter Statistics" panel shown beside a running quiz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterStatsVm {
    pub progress_label: String,
    pub progress_percent: u8,
    pub completed: u32,
    pub remaining: u32,
    pub batch_label: String,
    pub difficulty_label: &'static str,
}

impl From<&ChapterStats> for ChapterStatsVm {
    fn from(stats: &ChapterStats) -> Self {
        Self {
            progress_label: format!("{}%", stats.progress_percent),
            progress_percent: stats.progress_percent,
            completed: stats.completed,
            remaining: stats.remaining,
            batch_label: format!("{} Questions", stats.questions_per_batch),
            difficulty_label: dominant_difficulty(&stats.pool_by_difficulty).label(),
        }
    }
}

/// Most common difficulty in the pool; ties go to the easier level.
fn dominant_difficulty(counts: &[(Difficulty, usize)]) -> Difficulty {
    counts
        .iter()
        .fold(None::<(Difficulty, usize)>, |best, &(difficulty, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((difficulty, count)),
        })
        .map_or(Difficulty::Easy, |(difficulty, _)| difficulty)
}
