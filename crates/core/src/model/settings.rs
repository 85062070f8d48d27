use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChallengeSettingsError {
    #[error("pass ratio must be in (0, 1], got {0}")]
    InvalidPassRatio(f64),

    #[error("celebration duration must be > 0")]
    ZeroCelebration,

    #[error("celebration duration must be at most {max:?}, got {provided:?}")]
    CelebrationTooLong { provided: Duration, max: Duration },
}

/// Tunables for a challenge run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChallengeSettings {
    pass_ratio: f64,
    celebration: Duration,
}

impl ChallengeSettings {
    /// Share of scenarios that must be correct for the "pass" band.
    pub const DEFAULT_PASS_RATIO: f64 = 0.7;

    /// How long a correct-answer celebration stays on screen.
    pub const DEFAULT_CELEBRATION: Duration = Duration::from_secs(2);

    /// Longest celebration a run will show.
    pub const MAX_CELEBRATION: Duration = Duration::from_secs(60);

    /// # Errors
    ///
    /// Returns `ChallengeSettingsError` if the ratio is not a finite value in
    /// (0, 1] or the celebration duration is zero or above `MAX_CELEBRATION`.
    pub fn new(pass_ratio: f64, celebration: Duration) -> Result<Self, ChallengeSettingsError> {
        if !pass_ratio.is_finite() || pass_ratio <= 0.0 || pass_ratio > 1.0 {
            return Err(ChallengeSettingsError::InvalidPassRatio(pass_ratio));
        }
        if celebration.is_zero() {
            return Err(ChallengeSettingsError::ZeroCelebration);
        }
        if celebration > Self::MAX_CELEBRATION {
            return Err(ChallengeSettingsError::CelebrationTooLong {
                provided: celebration,
                max: Self::MAX_CELEBRATION,
            });
        }
        Ok(Self {
            pass_ratio,
            celebration,
        })
    }

    #[must_use]
    pub fn pass_ratio(&self) -> f64 {
        self.pass_ratio
    }

    #[must_use]
    pub fn celebration(&self) -> Duration {
        self.celebration
    }
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            pass_ratio: Self::DEFAULT_PASS_RATIO,
            celebration: Self::DEFAULT_CELEBRATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let settings = ChallengeSettings::default();
        assert_eq!(settings.pass_ratio(), 0.7);
        assert_eq!(settings.celebration(), Duration::from_secs(2));
    }

    #[test]
    fn pass_ratio_bounds_are_enforced() {
        assert!(ChallengeSettings::new(1.0, Duration::from_millis(1)).is_ok());
        for bad in [0.0, -0.5, 1.01, f64::NAN] {
            assert!(matches!(
                ChallengeSettings::new(bad, Duration::from_secs(1)),
                Err(ChallengeSettingsError::InvalidPassRatio(_))
            ));
        }
    }

    #[test]
    fn zero_celebration_is_rejected() {
        assert_eq!(
            ChallengeSettings::new(0.5, Duration::ZERO).unwrap_err(),
            ChallengeSettingsError::ZeroCelebration
        );
    }

    #[test]
    fn celebration_must_stay_short() {
        assert!(ChallengeSettings::new(0.7, ChallengeSettings::MAX_CELEBRATION).is_ok());
        assert_eq!(
            ChallengeSettings::new(0.7, Duration::from_millis(u64::MAX)).unwrap_err(),
            ChallengeSettingsError::CelebrationTooLong {
                provided: Duration::from_millis(u64::MAX),
                max: ChallengeSettings::MAX_CELEBRATION,
            }
        );
    }
}
