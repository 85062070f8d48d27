#![forbid(unsafe_code)]

pub mod catalog;
pub mod celebration;
pub mod config;
pub mod error;
pub mod study;

pub use objection_core::Clock;

pub use catalog::{load_catalog, parse_catalog, read_catalog};
pub use celebration::Celebration;
pub use config::StudyConfig;
pub use error::{ConfigError, StudyError};
pub use study::{
    AnswerFeedback, AnswerOption, AnswerOptionMark, CategoryOption, ChallengeProgress,
    ChallengeView, CompletionView, HistoryRow, LearnView, ObjectionItem, ScenarioView,
    StudyMode, StudySession,
};
