mod category;
mod ids;
mod objection;
mod scenario;
mod settings;

pub use category::{Category, CategoryError, CategoryFilter};
pub use ids::{ObjectionId, ScenarioId};
pub use objection::{Objection, ObjectionDraft, ObjectionError};
pub use scenario::{Scenario, ScenarioDraft, ScenarioError};
pub use settings::{ChallengeSettings, ChallengeSettingsError};
