mod progress;
mod service;
mod view;

// Public API of the study subsystem.
pub use progress::ChallengeProgress;
pub use service::{StudyMode, StudySession};
pub use view::{
    AnswerFeedback, AnswerOption, AnswerOptionMark, CategoryOption, ChallengeView,
    CompletionView, HistoryRow, LearnView, ObjectionItem, ScenarioView,
};
