mod flow;
mod progress;
mod screen;
mod state;

// Public API of the quiz subsystem.
pub use flow::{AdvanceOutcome, QuizFlowService, TickOutcome};
pub use progress::QuizProgress;
pub use screen::Screen;
pub use state::SessionState;
