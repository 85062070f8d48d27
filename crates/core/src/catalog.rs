//! Immutable reference content: objections for learn mode and scenarios for
//! challenge mode.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::{
    Objection, ObjectionDraft, ObjectionError, ObjectionId, Scenario, ScenarioDraft,
    ScenarioError, ScenarioId,
};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Load-time configuration errors. A catalog that fails any of these checks
/// is never handed to a session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no objections")]
    NoObjections,

    #[error("catalog has no scenarios")]
    NoScenarios,

    #[error("duplicate objection id {0}")]
    DuplicateObjectionId(ObjectionId),

    #[error("duplicate objection name {0:?}")]
    DuplicateObjectionName(String),

    #[error("duplicate scenario id {0}")]
    DuplicateScenarioId(ScenarioId),

    #[error("scenario {scenario} expects unknown objection {name:?}")]
    UnknownCorrectObjection { scenario: ScenarioId, name: String },

    #[error(transparent)]
    Objection(#[from] ObjectionError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Serialized catalog layout: `{ "objections": [...], "scenarios": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogDraft {
    pub objections: Vec<ObjectionDraft>,
    pub scenarios: Vec<ScenarioDraft>,
}

impl CatalogDraft {
    /// # Errors
    ///
    /// See [`Catalog::new`].
    pub fn validate(self) -> Result<Catalog, CatalogError> {
        let objections = self
            .objections
            .into_iter()
            .map(ObjectionDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        let scenarios = self
            .scenarios
            .into_iter()
            .map(ScenarioDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Catalog::new(objections, scenarios)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    objections: Vec<Objection>,
    scenarios: Vec<Scenario>,
}

impl Catalog {
    /// Build a catalog, enforcing identity and referential integrity.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if either list is empty, an id or objection name
    /// repeats, or a scenario's correct objection is not in the catalog.
    pub fn new(objections: Vec<Objection>, scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        if objections.is_empty() {
            return Err(CatalogError::NoObjections);
        }
        if scenarios.is_empty() {
            return Err(CatalogError::NoScenarios);
        }

        let mut ids = HashSet::with_capacity(objections.len());
        let mut names = HashSet::with_capacity(objections.len());
        for objection in &objections {
            if !ids.insert(objection.id()) {
                return Err(CatalogError::DuplicateObjectionId(objection.id()));
            }
            if !names.insert(objection.name()) {
                return Err(CatalogError::DuplicateObjectionName(
                    objection.name().to_string(),
                ));
            }
        }

        let mut scenario_ids = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if !scenario_ids.insert(scenario.id()) {
                return Err(CatalogError::DuplicateScenarioId(scenario.id()));
            }
            if !names.contains(scenario.correct_objection()) {
                return Err(CatalogError::UnknownCorrectObjection {
                    scenario: scenario.id(),
                    name: scenario.correct_objection().to_string(),
                });
            }
        }

        Ok(Self {
            objections,
            scenarios,
        })
    }

    #[must_use]
    pub fn objections(&self) -> &[Objection] {
        &self.objections
    }

    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    #[must_use]
    pub fn objection_count(&self) -> usize {
        self.objections.len()
    }

    /// Always at least one for a constructed catalog.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn objection(&self, id: ObjectionId) -> Option<&Objection> {
        self.objections.iter().find(|objection| objection.id() == id)
    }

    #[must_use]
    pub fn contains_objection(&self, id: ObjectionId) -> bool {
        self.objection(id).is_some()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::Category;

    pub(crate) fn objection(id: u64, name: &str, categories: &[Category]) -> Objection {
        ObjectionDraft {
            id: ObjectionId::new(id),
            name: name.to_string(),
            description: format!("{name} description"),
            response: format!("{name} response"),
            examples: vec![format!("{name} example")],
            categories: categories.to_vec(),
        }
        .validate()
        .unwrap()
    }

    pub(crate) fn scenario(id: u64, answer: &str) -> Scenario {
        ScenarioDraft {
            id: ScenarioId::new(id),
            prompt: format!("Scenario {id}"),
            correct_objection: answer.to_string(),
            explanation: format!("Because {answer}"),
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn valid_catalog_exposes_lookups() {
        let catalog = Catalog::new(
            vec![
                objection(1, "Relevance", &[Category::Basic]),
                objection(2, "Hearsay", &[Category::Evidence]),
            ],
            vec![scenario(1, "Hearsay")],
        )
        .unwrap();

        assert_eq!(catalog.objection_count(), 2);
        assert_eq!(catalog.scenario_count(), 1);
        assert_eq!(
            catalog.objection(ObjectionId::new(2)).map(Objection::name),
            Some("Hearsay")
        );
        assert!(catalog.contains_objection(ObjectionId::new(1)));
        assert!(!catalog.contains_objection(ObjectionId::new(3)));
    }

    #[test]
    fn unknown_correct_objection_fails_fast() {
        let err = Catalog::new(
            vec![objection(1, "Relevance", &[Category::Basic])],
            vec![scenario(9, "Hearsay")],
        )
        .unwrap_err();

        assert_eq!(
            err,
            CatalogError::UnknownCorrectObjection {
                scenario: ScenarioId::new(9),
                name: "Hearsay".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_ids_and_names_are_rejected() {
        let dup_id = Catalog::new(
            vec![
                objection(1, "Relevance", &[Category::Basic]),
                objection(1, "Hearsay", &[Category::Evidence]),
            ],
            vec![scenario(1, "Relevance")],
        )
        .unwrap_err();
        assert_eq!(dup_id, CatalogError::DuplicateObjectionId(ObjectionId::new(1)));

        let dup_name = Catalog::new(
            vec![
                objection(1, "Relevance", &[Category::Basic]),
                objection(2, "Relevance", &[Category::Evidence]),
            ],
            vec![scenario(1, "Relevance")],
        )
        .unwrap_err();
        assert_eq!(
            dup_name,
            CatalogError::DuplicateObjectionName("Relevance".to_string())
        );

        let dup_scenario = Catalog::new(
            vec![objection(1, "Relevance", &[Category::Basic])],
            vec![scenario(4, "Relevance"), scenario(4, "Relevance")],
        )
        .unwrap_err();
        assert_eq!(
            dup_scenario,
            CatalogError::DuplicateScenarioId(ScenarioId::new(4))
        );
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert_eq!(
            Catalog::new(Vec::new(), vec![scenario(1, "X")]).unwrap_err(),
            CatalogError::NoObjections
        );
        assert_eq!(
            Catalog::new(vec![objection(1, "X", &[Category::Basic])], Vec::new()).unwrap_err(),
            CatalogError::NoScenarios
        );
    }

    #[test]
    fn draft_deserializes_and_validates() {
        let json = r#"{
            "objections": [{
                "id": 1,
                "name": "Speculation",
                "description": "Guessing.",
                "response": "Facts only.",
                "examples": ["What do you think happened?"],
                "categories": ["questioning", "intermediate"]
            }],
            "scenarios": [{
                "id": 1,
                "scenario": "What would he have done?",
                "correct_objection": "Speculation",
                "explanation": "Hypothetical."
            }]
        }"#;

        let draft: CatalogDraft = serde_json::from_str(json).unwrap();
        let catalog = draft.validate().unwrap();
        assert_eq!(catalog.objections()[0].name(), "Speculation");
    }
}
