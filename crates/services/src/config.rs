use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use objection_core::model::ChallengeSettings;

use crate::error::ConfigError;

/// Environment variable overriding `catalog_path`.
pub const CATALOG_ENV: &str = "OBJECTION_CATALOG";
/// Environment variable overriding `pass_ratio`.
pub const PASS_RATIO_ENV: &str = "OBJECTION_PASS_RATIO";

/// Study tool configuration, read from TOML.
///
/// ```toml
/// catalog_path = "content/objections.json"
/// pass_ratio = 0.7
/// celebration_ms = 2000
/// ```
///
/// Every key is optional; missing keys fall back to the bundled catalog and
/// `ChallengeSettings::default()`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudyConfig {
    pub catalog_path: Option<PathBuf>,
    pub pass_ratio: Option<f64>,
    pub celebration_ms: Option<u64>,
}

impl StudyConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` for malformed input or unknown keys.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Load from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply `OBJECTION_CATALOG` / `OBJECTION_PASS_RATIO` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnv` if the pass ratio is not a number.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(
            std::env::var(CATALOG_ENV).ok(),
            std::env::var(PASS_RATIO_ENV).ok(),
        )
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnv` if `pass_ratio` does not parse.
    pub fn with_overrides(
        mut self,
        catalog_path: Option<String>,
        pass_ratio: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = catalog_path.filter(|p| !p.trim().is_empty()) {
            self.catalog_path = Some(PathBuf::from(path.trim()));
        }
        if let Some(raw) = pass_ratio {
            let ratio = raw.trim().parse::<f64>().map_err(|_| ConfigError::InvalidEnv {
                var: PASS_RATIO_ENV,
                value: raw.clone(),
            })?;
            self.pass_ratio = Some(ratio);
        }
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Settings` if the configured values are out of range.
    pub fn challenge_settings(&self) -> Result<ChallengeSettings, ConfigError> {
        let pass_ratio = self
            .pass_ratio
            .unwrap_or(ChallengeSettings::DEFAULT_PASS_RATIO);
        let celebration = self
            .celebration_ms
            .map_or(ChallengeSettings::DEFAULT_CELEBRATION, Duration::from_millis);
        Ok(ChallengeSettings::new(pass_ratio, celebration)?)
    }
}
