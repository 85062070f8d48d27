/// Aggregated view of challenge progress, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeProgress {
    /// 1-based position of the scenario on screen.
    pub position: usize,
    pub total: usize,
    /// Share of scenarios already advanced past, in [0, 1).
    pub ratio: f64,
    pub score: usize,
    /// Attempts, floored at 1 for display.
    pub attempts: usize,
    pub is_complete: bool,
}

impl ChallengeProgress {
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Scenario {} of {}", self.position, self.total)
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}/{}", self.score, self.attempts)
    }
}
