//! Scored challenge run over the catalog's scenarios.
//!
//! The session is an explicit state machine:
//!
//! ```text
//! AwaitingAnswer --submit--> AnswerRevealed --advance--> AwaitingAnswer
//!                                           --advance (last)--> Complete
//! any --reset--> AwaitingAnswer (index 0, empty history)
//! ```
//!
//! Calls that do not apply to the current phase are ignored and reported as
//! such rather than failing.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::grading::grade;
use crate::model::{ChallengeSettings, Scenario, ScenarioId};

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengePhase {
    #[default]
    AwaitingAnswer,
    AnswerRevealed,
    Complete,
}

/// One graded attempt, appended to the session history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub scenario_id: ScenarioId,
    pub scenario_text: String,
    pub chosen_name: String,
    pub correct_name: String,
    pub is_correct: bool,
}

/// Complete, serializable state of a challenge run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ChallengeSnapshot {
    pub current_index: usize,
    pub score: usize,
    pub total_attempts: usize,
    pub selected_answer: Option<String>,
    pub phase: ChallengePhase,
    pub history: Vec<AnswerRecord>,
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of grading a submission, for immediate feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradedAnswer {
    pub is_correct: bool,
    pub correct_name: String,
    pub explanation: String,
    /// Advisory celebration cue for correct answers: how long to show it.
    pub celebrate_for: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Graded(GradedAnswer),
    /// Submission arrived outside `AwaitingAnswer`; nothing changed.
    Ignored(ChallengePhase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved on to the scenario at `index`.
    Next { index: usize },
    Completed,
    /// Advance arrived outside `AnswerRevealed`; nothing changed.
    Ignored(ChallengePhase),
}

//
// ─── COMPLETION ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Perfect,
    Pass,
    Practice,
}

impl ScoreBand {
    /// Perfect when every scenario is correct, pass at `pass_ratio` of the
    /// scenario count or better, practice otherwise.
    #[must_use]
    pub fn classify(score: usize, scenario_count: usize, pass_ratio: f64) -> Self {
        if score == scenario_count {
            ScoreBand::Perfect
        } else if score as f64 >= scenario_count as f64 * pass_ratio {
            ScoreBand::Pass
        } else {
            ScoreBand::Practice
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::Perfect => "Perfect Score!",
            ScoreBand::Pass => "Great Job!",
            ScoreBand::Practice => "Keep Practicing!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionSummary {
    pub score: usize,
    pub scenario_count: usize,
    pub band: ScoreBand,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ChallengeSession {
    catalog: Arc<Catalog>,
    settings: ChallengeSettings,
    state: ChallengeSnapshot,
}

impl ChallengeSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: ChallengeSettings) -> Self {
        Self {
            catalog,
            settings,
            state: ChallengeSnapshot::default(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ChallengeSettings {
        &self.settings
    }

    #[must_use]
    pub fn snapshot(&self) -> &ChallengeSnapshot {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> ChallengePhase {
        self.state.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.phase == ChallengePhase::Complete
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.catalog.scenario_count()
    }

    /// Scenario at the current index. Stays on the last scenario once complete.
    #[must_use]
    pub fn current_scenario(&self) -> &Scenario {
        &self.catalog.scenarios()[self.state.current_index]
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.state.score
    }

    #[must_use]
    pub fn total_attempts(&self) -> usize {
        self.state.total_attempts
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.state.selected_answer.as_deref()
    }

    #[must_use]
    pub fn history(&self) -> &[AnswerRecord] {
        &self.state.history
    }

    /// Record for the answer currently on display, if one has been revealed.
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&AnswerRecord> {
        match self.state.phase {
            ChallengePhase::AwaitingAnswer => None,
            ChallengePhase::AnswerRevealed | ChallengePhase::Complete => self.state.history.last(),
        }
    }

    /// Grade `name` against the current scenario and reveal the answer.
    pub fn submit_answer(&mut self, name: &str) -> SubmitOutcome {
        if self.state.phase != ChallengePhase::AwaitingAnswer {
            return SubmitOutcome::Ignored(self.state.phase);
        }

        let scenario = &self.catalog.scenarios()[self.state.current_index];
        let is_correct = grade(name, scenario);
        let graded = GradedAnswer {
            is_correct,
            correct_name: scenario.correct_objection().to_string(),
            explanation: scenario.explanation().to_string(),
            celebrate_for: is_correct.then(|| self.settings.celebration()),
        };
        let record = AnswerRecord {
            scenario_id: scenario.id(),
            scenario_text: scenario.prompt().to_string(),
            chosen_name: name.to_string(),
            correct_name: scenario.correct_objection().to_string(),
            is_correct,
        };

        self.state.total_attempts += 1;
        if is_correct {
            self.state.score += 1;
        }
        self.state.history.push(record);
        self.state.selected_answer = Some(name.to_string());
        self.state.phase = ChallengePhase::AnswerRevealed;

        SubmitOutcome::Graded(graded)
    }

    /// Move past a revealed answer: to the next scenario, or to `Complete`
    /// after the last one.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.state.phase != ChallengePhase::AnswerRevealed {
            return AdvanceOutcome::Ignored(self.state.phase);
        }

        if self.state.current_index + 1 >= self.scenario_count() {
            self.state.phase = ChallengePhase::Complete;
            return AdvanceOutcome::Completed;
        }

        self.state.current_index += 1;
        self.state.selected_answer = None;
        self.state.phase = ChallengePhase::AwaitingAnswer;
        AdvanceOutcome::Next {
            index: self.state.current_index,
        }
    }

    /// Discard the run and start over from the first scenario.
    pub fn reset(&mut self) {
        self.state = ChallengeSnapshot::default();
    }

    /// Share of scenarios already advanced past; the one on screen is not counted.
    #[must_use]
    pub fn progress_ratio(&self) -> f64 {
        self.state.current_index as f64 / self.scenario_count() as f64
    }

    /// `(score, denominator)` where the denominator never drops below 1.
    #[must_use]
    pub fn score_display(&self) -> (usize, usize) {
        (self.state.score, self.state.total_attempts.max(1))
    }

    #[must_use]
    pub fn completion_summary(&self) -> Option<CompletionSummary> {
        if !self.is_complete() {
            return None;
        }
        let scenario_count = self.scenario_count();
        Some(CompletionSummary {
            score: self.state.score,
            scenario_count,
            band: ScoreBand::classify(self.state.score, scenario_count, self.settings.pass_ratio()),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
