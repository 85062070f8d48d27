#![forbid(unsafe_code)]

pub mod catalog;
pub mod challenge;
pub mod content;
pub mod filter;
pub mod grading;
pub mod model;
pub mod progress;
pub mod time;

pub use catalog::{Catalog, CatalogDraft, CatalogError};
pub use challenge::{
    AdvanceOutcome, AnswerRecord, ChallengePhase, ChallengeSession, ChallengeSnapshot,
    CompletionSummary, GradedAnswer, ScoreBand, SubmitOutcome,
};
pub use filter::filter;
pub use grading::grade;
pub use progress::ProgressTracker;
pub use time::Clock;
