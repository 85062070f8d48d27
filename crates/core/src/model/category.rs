use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("unknown category: {0:?}")]
    Unknown(String),
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Tag describing the difficulty or subject area of an objection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Basic,
    Intermediate,
    Advanced,
    Questioning,
    Evidence,
    Testimony,
    Procedure,
}

impl Category {
    /// Every category, in selector order.
    pub const ALL: [Category; 7] = [
        Category::Basic,
        Category::Intermediate,
        Category::Advanced,
        Category::Questioning,
        Category::Evidence,
        Category::Testimony,
        Category::Procedure,
    ];

    /// Wire token used in catalog files and category selection.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Basic => "basic",
            Category::Intermediate => "intermediate",
            Category::Advanced => "advanced",
            Category::Questioning => "questioning",
            Category::Evidence => "evidence",
            Category::Testimony => "testimony",
            Category::Procedure => "procedure",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Basic => "Basic",
            Category::Intermediate => "Intermediate",
            Category::Advanced => "Advanced",
            Category::Questioning => "Questioning",
            Category::Evidence => "Evidence",
            Category::Testimony => "Testimony",
            Category::Procedure => "Procedure",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}

//
// ─── CATEGORY FILTER ───────────────────────────────────────────────────────────
//

/// Category selection for the learn view: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Selector id meaning "no filtering".
    pub const ALL_ID: &'static str = "all";

    /// Filter options in the order a category picker shows them.
    #[must_use]
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Objections",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Returns true if an item tagged with `categories` passes this filter.
    #[must_use]
    pub fn matches(self, categories: &[Category]) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => categories.contains(&category),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_ID {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}
