use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use objection_core::model::{
    CategoryError, CategoryFilter, ChallengeSettings, Objection, ObjectionId,
};
use objection_core::{
    AdvanceOutcome, Catalog, ChallengeSession, ProgressTracker, SubmitOutcome, filter,
};

use super::progress::ChallengeProgress;
use crate::Clock;
use crate::catalog::load_catalog;
use crate::celebration::Celebration;
use crate::config::StudyConfig;
use crate::error::StudyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyMode {
    #[default]
    Learn,
    Challenge,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Everything a study screen needs: learn-mode browsing state, the progress
/// tracker, and the current challenge run.
///
/// The tracker and the challenge are independent; switching modes never
/// touches learn progress.
pub struct StudySession {
    clock: Clock,
    catalog: Arc<Catalog>,
    mode: StudyMode,
    category: CategoryFilter,
    expanded: Option<ObjectionId>,
    progress: ProgressTracker,
    challenge: ChallengeSession,
    celebration: Option<Celebration>,
}

impl StudySession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: ChallengeSettings, clock: Clock) -> Self {
        Self {
            clock,
            progress: ProgressTracker::new(&catalog),
            challenge: ChallengeSession::new(Arc::clone(&catalog), settings),
            catalog,
            mode: StudyMode::Learn,
            category: CategoryFilter::All,
            expanded: None,
            celebration: None,
        }
    }

    /// Load the catalog and settings described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `StudyError` for invalid settings or an unreadable/invalid catalog.
    pub fn from_config(config: &StudyConfig, clock: Clock) -> Result<Self, StudyError> {
        let settings = config.challenge_settings()?;
        let catalog = load_catalog(config)?;
        Ok(Self::new(catalog, settings, clock))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    #[must_use]
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    #[must_use]
    pub fn expanded(&self) -> Option<ObjectionId> {
        self.expanded
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    #[must_use]
    pub fn challenge(&self) -> &ChallengeSession {
        &self.challenge
    }

    /// Switch modes. Entering challenge mode always starts a fresh run.
    pub fn select_mode(&mut self, mode: StudyMode) {
        tracing::debug!(from = ?self.mode, to = ?mode, "mode selected");
        self.mode = mode;
        if mode == StudyMode::Challenge {
            self.reset();
        }
    }

    //
    // ─── LEARN ─────────────────────────────────────────────────────────────────
    //

    pub fn select_category(&mut self, selection: CategoryFilter) {
        tracing::debug!(category = %selection, "category selected");
        self.category = selection;
    }

    /// Select by selector id (`"all"`, `"basic"`, ...).
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::Unknown` and keeps the current selection if the
    /// id names no category.
    pub fn select_category_id(&mut self, id: &str) -> Result<(), CategoryError> {
        let selection = id.parse::<CategoryFilter>()?;
        self.select_category(selection);
        Ok(())
    }

    #[must_use]
    pub fn visible_objections(&self) -> Vec<&Objection> {
        filter(&self.catalog, self.category)
    }

    /// Toggle the detail panel of `id`. Opening an objection marks it seen;
    /// closing it leaves the flag alone.
    ///
    /// Returns whether `id` is expanded afterwards.
    pub fn expand(&mut self, id: ObjectionId) -> bool {
        if !self.catalog.contains_objection(id) {
            tracing::warn!(%id, "expand ignored: unknown objection");
            return false;
        }
        if self.expanded == Some(id) {
            self.expanded = None;
            tracing::debug!(%id, "objection collapsed");
            return false;
        }

        self.expanded = Some(id);
        let first_view = self.progress.mark_seen(id);
        tracing::debug!(
            %id,
            first_view,
            mastery = self.progress.mastery_percentage(),
            "objection expanded"
        );
        true
    }

    #[must_use]
    pub fn is_seen(&self, id: ObjectionId) -> bool {
        self.progress.is_seen(id)
    }

    #[must_use]
    pub fn mastery_percentage(&self) -> u8 {
        self.progress.mastery_percentage()
    }

    //
    // ─── CHALLENGE ─────────────────────────────────────────────────────────────
    //

    /// Grade `name` against the current scenario. A correct answer raises a
    /// celebration stamped with the session clock.
    pub fn submit_answer(&mut self, name: &str) -> SubmitOutcome {
        let index = self.challenge.current_index();
        let outcome = self.challenge.submit_answer(name);
        match &outcome {
            SubmitOutcome::Graded(graded) => {
                tracing::debug!(
                    index,
                    answer = name,
                    correct = graded.is_correct,
                    score = self.challenge.score(),
                    attempts = self.challenge.total_attempts(),
                    "answer graded"
                );
                if let Some(display_for) = graded.celebrate_for {
                    self.celebration = Some(Celebration::new(self.clock.now(), display_for));
                }
            }
            SubmitOutcome::Ignored(phase) => {
                tracing::debug!(index, answer = name, ?phase, "submit ignored");
            }
        }
        outcome
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        let outcome = self.challenge.advance();
        match outcome {
            AdvanceOutcome::Next { index } => tracing::debug!(index, "advanced to scenario"),
            AdvanceOutcome::Completed => tracing::debug!(
                score = self.challenge.score(),
                total = self.challenge.scenario_count(),
                "challenge complete"
            ),
            AdvanceOutcome::Ignored(phase) => tracing::debug!(?phase, "advance ignored"),
        }
        outcome
    }

    /// Start the challenge over and drop any pending celebration.
    pub fn reset(&mut self) {
        tracing::debug!(
            discarded_attempts = self.challenge.total_attempts(),
            "challenge reset"
        );
        self.challenge.reset();
        self.celebration = None;
    }

    #[must_use]
    pub fn challenge_progress(&self) -> ChallengeProgress {
        let (score, attempts) = self.challenge.score_display();
        ChallengeProgress {
            position: self.challenge.current_index() + 1,
            total: self.challenge.scenario_count(),
            ratio: self.challenge.progress_ratio(),
            score,
            attempts,
            is_complete: self.challenge.is_complete(),
        }
    }

    /// Celebration still on display according to the session clock.
    #[must_use]
    pub fn celebration(&self) -> Option<Celebration> {
        self.celebration_at(self.clock.now())
    }

    #[must_use]
    pub fn celebration_at(&self, now: DateTime<Utc>) -> Option<Celebration> {
        self.celebration.filter(|cue| cue.is_active_at(now))
    }
}

impl fmt::Debug for StudySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudySession")
            .field("mode", &self.mode)
            .field("category", &self.category)
            .field("expanded", &self.expanded)
            .field("mastery", &self.progress.mastery_percentage())
            .field("phase", &self.challenge.phase())
            .field("current_index", &self.challenge.current_index())
            .field("score", &self.challenge.score())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
