use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::ScenarioId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScenarioError {
    #[error("scenario {id} has an empty prompt")]
    EmptyPrompt { id: ScenarioId },

    #[error("scenario {id} names no correct objection")]
    EmptyCorrectObjection { id: ScenarioId },

    #[error("scenario {id} has an empty explanation")]
    EmptyExplanation { id: ScenarioId },
}

/// Unvalidated challenge scenario as it appears in catalog content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioDraft {
    pub id: ScenarioId,
    #[serde(rename = "scenario")]
    pub prompt: String,
    #[serde(alias = "correctObjection")]
    pub correct_objection: String,
    pub explanation: String,
}

impl ScenarioDraft {
    /// # Errors
    ///
    /// Returns `ScenarioError` if the prompt, answer, or explanation is blank.
    pub fn validate(self) -> Result<Scenario, ScenarioError> {
        let id = self.id;
        if self.prompt.trim().is_empty() {
            return Err(ScenarioError::EmptyPrompt { id });
        }
        let correct_objection = self.correct_objection.trim().to_string();
        if correct_objection.is_empty() {
            return Err(ScenarioError::EmptyCorrectObjection { id });
        }
        if self.explanation.trim().is_empty() {
            return Err(ScenarioError::EmptyExplanation { id });
        }

        Ok(Scenario {
            id,
            prompt: self.prompt,
            correct_objection,
            explanation: self.explanation,
        })
    }
}

/// A courtroom exchange the user must match to the right objection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    id: ScenarioId,
    prompt: String,
    correct_objection: String,
    explanation: String,
}

impl Scenario {
    #[must_use]
    pub fn id(&self) -> ScenarioId {
        self.id
    }

    /// Prompt text; may contain line breaks separating a question and answer.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Name of the objection that answers this scenario.
    #[must_use]
    pub fn correct_objection(&self) -> &str {
        &self.correct_objection
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}
