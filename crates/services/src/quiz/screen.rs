use std::fmt;

/// Screens of the trainer. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Welcome,
    Dashboard,
    QuizSelection,
    Quiz,
    Results,
    Leaderboard,
}

impl Screen {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Dashboard => "dashboard",
            Screen::QuizSelection => "quiz-selection",
            Screen::Quiz => "quiz",
            Screen::Results => "results",
            Screen::Leaderboard => "leaderboard",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
