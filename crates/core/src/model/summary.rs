use crate::model::ids::QuestionId;
use crate::model::question::Question;
use crate::model::score::Score;

/// Review line for one question of a submitted batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub question_id: QuestionId,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    /// `None` when the question was never answered.
    pub user_answer: Option<usize>,
    pub is_correct: bool,
}

impl QuizResult {
    #[must_use]
    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_answer)
            .map_or("", String::as_str)
    }
}

/// Score summary of a submitted batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    score: Score,
    correct: usize,
    results: Vec<QuizResult>,
}

impl QuizSummary {
    /// Scores `answers` against `questions` position by position.
    ///
    /// Positions beyond the end of `answers`, or holding `None`, count as unanswered
    /// and therefore incorrect.
    #[must_use]
    pub fn score_answers(questions: &[Question], answers: &[Option<usize>]) -> Self {
        let results: Vec<QuizResult> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let user_answer = answers.get(index).copied().flatten();
                QuizResult {
                    question_id: question.id().clone(),
                    prompt: question.prompt().to_string(),
                    options: question.options().to_vec(),
                    correct_answer: question.correct_answer(),
                    user_answer,
                    is_correct: question.is_correct(user_answer),
                }
            })
            .collect();

        let correct = results.iter().filter(|r| r.is_correct).count();
        Self {
            score: Score::from_ratio(correct, results.len()),
            correct,
            results,
        }
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.results.iter().filter(|r| r.user_answer.is_none()).count()
    }

    #[must_use]
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }
}
