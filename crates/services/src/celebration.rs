use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

/// Transient "correct answer" cue.
///
/// Advisory only: it lives outside the challenge state, and losing or
/// ignoring it changes nothing about scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Celebration {
    raised_at: DateTime<Utc>,
    display_for: Duration,
}

impl Celebration {
    #[must_use]
    pub fn new(raised_at: DateTime<Utc>, display_for: Duration) -> Self {
        Self {
            raised_at,
            display_for,
        }
    }

    #[must_use]
    pub fn raised_at(&self) -> DateTime<Utc> {
        self.raised_at
    }

    #[must_use]
    pub fn display_for(&self) -> Duration {
        self.display_for
    }

    /// `None` if the duration does not fit in a timestamp.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        TimeDelta::from_std(self.display_for)
            .ok()
            .and_then(|delta| self.raised_at.checked_add_signed(delta))
    }

    /// A cue whose expiry cannot be represented counts as already expired.
    #[must_use]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(end) => now < end,
            None => false,
        }
    }

    /// Resolves once the display duration has elapsed, measured from the call.
    ///
    /// Meant to be spawned right after the cue is raised so a UI can drop the
    /// effect without polling.
    pub async fn expired(self) {
        tokio::time::sleep(self.display_for).await;
    }
}
