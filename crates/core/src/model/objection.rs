use serde::Deserialize;
use thiserror::Error;

use crate::model::category::Category;
use crate::model::ids::ObjectionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ObjectionError {
    #[error("objection id must be positive")]
    ZeroId,

    #[error("objection name cannot be empty")]
    EmptyName,

    #[error("objection {name:?} has an empty description")]
    EmptyDescription { name: String },

    #[error("objection {name:?} has an empty response")]
    EmptyResponse { name: String },

    #[error("objection {name:?} needs at least one example")]
    NoExamples { name: String },

    #[error("objection {name:?} needs at least one category")]
    NoCategories { name: String },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated objection as it appears in catalog content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObjectionDraft {
    pub id: ObjectionId,
    pub name: String,
    pub description: String,
    pub response: String,
    pub examples: Vec<String>,
    pub categories: Vec<Category>,
}

impl ObjectionDraft {
    /// Validate the draft into an immutable `Objection`.
    ///
    /// Names are trimmed; blank examples are dropped and repeated categories
    /// collapse to their first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `ObjectionError` if the id is zero or any required field is empty.
    pub fn validate(self) -> Result<Objection, ObjectionError> {
        if self.id.value() == 0 {
            return Err(ObjectionError::ZeroId);
        }

        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ObjectionError::EmptyName);
        }
        if self.description.trim().is_empty() {
            return Err(ObjectionError::EmptyDescription { name });
        }
        if self.response.trim().is_empty() {
            return Err(ObjectionError::EmptyResponse { name });
        }

        let examples: Vec<String> = self
            .examples
            .into_iter()
            .filter(|example| !example.trim().is_empty())
            .collect();
        if examples.is_empty() {
            return Err(ObjectionError::NoExamples { name });
        }

        let mut categories: Vec<Category> = Vec::with_capacity(self.categories.len());
        for category in self.categories {
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        if categories.is_empty() {
            return Err(ObjectionError::NoCategories { name });
        }

        Ok(Objection {
            id: self.id,
            name,
            description: self.description,
            response: self.response,
            examples,
            categories,
        })
    }
}

//
// ─── OBJECTION ─────────────────────────────────────────────────────────────────
//

/// A reference entry in the learn catalog.
///
/// `name` doubles as the answer token in challenge grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objection {
    id: ObjectionId,
    name: String,
    description: String,
    response: String,
    examples: Vec<String>,
    categories: Vec<Category>,
}

impl Objection {
    #[must_use]
    pub fn id(&self) -> ObjectionId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Suggested way to argue or respond to the objection.
    #[must_use]
    pub fn response(&self) -> &str {
        &self.response
    }

    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn has_category(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }
}
