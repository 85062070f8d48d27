//! Presentation-facing snapshots of a `StudySession`.
//!
//! Items carry raw values plus the few fixed labels the screens show; layout,
//! icons and colors stay with the UI.

use objection_core::model::{CategoryFilter, ObjectionId, ScenarioId};
use objection_core::{AnswerRecord, ChallengePhase, CompletionSummary, ScoreBand};

use super::progress::ChallengeProgress;
use super::service::StudySession;

/// Length of the scenario preview in the completion history.
const HISTORY_PREVIEW_CHARS: usize = 60;

//
// ─── LEARN ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectionItem {
    pub id: ObjectionId,
    pub name: String,
    pub description: String,
    pub seen: bool,
    pub expanded: bool,
    pub examples: Vec<String>,
    pub response: String,
    /// Comma-separated category tokens, e.g. `"questioning, basic"`.
    pub categories: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnView {
    pub mastery_percent: u8,
    pub categories: Vec<CategoryOption>,
    pub objections: Vec<ObjectionItem>,
}

//
// ─── CHALLENGE ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOptionMark {
    /// Answer not revealed yet; the option can be picked.
    Selectable,
    /// The right answer, shown after reveal.
    Correct,
    /// The user's pick, when it was wrong.
    WrongChoice,
    /// Any other option after reveal.
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub name: String,
    pub mark: AnswerOptionMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub chosen_name: String,
    pub correct_name: String,
    pub explanation: String,
}

impl AnswerFeedback {
    #[must_use]
    pub fn headline(&self) -> String {
        if self.is_correct {
            "Correct!".to_string()
        } else {
            format!(
                "Incorrect. The correct objection is \"{}\"",
                self.correct_name
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioView {
    pub scenario_id: ScenarioId,
    pub prompt: String,
    pub progress: ChallengeProgress,
    pub options: Vec<AnswerOption>,
    pub feedback: Option<AnswerFeedback>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// 1-based scenario number.
    pub number: usize,
    pub preview: String,
    pub chosen_name: String,
    /// Present only for wrong answers.
    pub correct_name: Option<String>,
    pub is_correct: bool,
}

impl HistoryRow {
    fn from_record(index: usize, record: &AnswerRecord) -> Self {
        Self {
            number: index + 1,
            preview: preview(&record.scenario_text),
            chosen_name: record.chosen_name.clone(),
            correct_name: (!record.is_correct).then(|| record.correct_name.clone()),
            is_correct: record.is_correct,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionView {
    pub score: usize,
    pub scenario_count: usize,
    pub band: ScoreBand,
    pub history: Vec<HistoryRow>,
}

impl CompletionView {
    #[must_use]
    pub fn band_label(&self) -> &'static str {
        self.band.label()
    }

    #[must_use]
    pub fn score_line(&self) -> String {
        format!(
            "Your final score: {} out of {}",
            self.score, self.scenario_count
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChallengeView {
    InProgress(ScenarioView),
    Complete(CompletionView),
}

//
// ─── BUILDERS ──────────────────────────────────────────────────────────────────
//

impl StudySession {
    #[must_use]
    pub fn learn_view(&self) -> LearnView {
        let selected = self.category();
        let categories = CategoryFilter::options()
            .into_iter()
            .map(|filter| CategoryOption {
                filter,
                label: filter.label(),
                selected: filter == selected,
            })
            .collect();

        let objections = self
            .visible_objections()
            .into_iter()
            .map(|objection| ObjectionItem {
                id: objection.id(),
                name: objection.name().to_string(),
                description: objection.description().to_string(),
                seen: self.is_seen(objection.id()),
                expanded: self.expanded() == Some(objection.id()),
                examples: objection.examples().to_vec(),
                response: objection.response().to_string(),
                categories: objection
                    .categories()
                    .iter()
                    .map(|category| category.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect();

        LearnView {
            mastery_percent: self.mastery_percentage(),
            categories,
            objections,
        }
    }

    #[must_use]
    pub fn challenge_view(&self) -> ChallengeView {
        let challenge = self.challenge();
        if let Some(summary) = challenge.completion_summary() {
            return ChallengeView::Complete(completion_view(summary, challenge.history()));
        }

        let scenario = challenge.current_scenario();
        let revealed = challenge.phase() == ChallengePhase::AnswerRevealed;
        let selected = challenge.selected_answer();

        let options = self
            .catalog()
            .objections()
            .iter()
            .map(|objection| {
                let name = objection.name();
                let mark = if !revealed {
                    AnswerOptionMark::Selectable
                } else if name == scenario.correct_objection() {
                    AnswerOptionMark::Correct
                } else if Some(name) == selected {
                    AnswerOptionMark::WrongChoice
                } else {
                    AnswerOptionMark::Neutral
                };
                AnswerOption {
                    name: name.to_string(),
                    mark,
                }
            })
            .collect();

        let feedback = challenge.revealed_answer().map(|record| AnswerFeedback {
            is_correct: record.is_correct,
            chosen_name: record.chosen_name.clone(),
            correct_name: record.correct_name.clone(),
            explanation: scenario.explanation().to_string(),
        });

        ChallengeView::InProgress(ScenarioView {
            scenario_id: scenario.id(),
            prompt: scenario.prompt().to_string(),
            progress: self.challenge_progress(),
            options,
            feedback,
        })
    }
}

fn completion_view(summary: CompletionSummary, history: &[AnswerRecord]) -> CompletionView {
    CompletionView {
        score: summary.score,
        scenario_count: summary.scenario_count,
        band: summary.band,
        history: history
            .iter()
            .enumerate()
            .map(|(index, record)| HistoryRow::from_record(index, record))
            .collect(),
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(HISTORY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::StudyMode;
    use objection_core::content;
    use objection_core::model::{Category, ChallengeSettings};
    use objection_core::time::fixed_clock;
    use std::sync::Arc;

    fn session() -> StudySession {
        StudySession::new(
            Arc::new(content::builtin().unwrap()),
            ChallengeSettings::default(),
            fixed_clock(),
        )
    }

    #[test]
    fn learn_view_marks_selection_seen_and_expanded() {
        let mut session = session();
        session.select_category(CategoryFilter::Only(Category::Advanced));
        session.expand(ObjectionId::new(3));

        let view = session.learn_view();
        assert_eq!(view.mastery_percent, 8);
        assert_eq!(view.categories.len(), 8);
        let selected: Vec<_> = view.categories.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "Advanced");

        assert_eq!(view.objections.len(), 1);
        let hearsay = &view.objections[0];
        assert_eq!(hearsay.name, "Hearsay");
        assert!(hearsay.seen);
        assert!(hearsay.expanded);
        assert_eq!(hearsay.categories, "evidence, advanced");
    }

    #[test]
    fn options_are_selectable_before_reveal() {
        let mut session = session();
        session.select_mode(StudyMode::Challenge);
        let ChallengeView::InProgress(view) = session.challenge_view() else {
            panic!("expected scenario view");
        };
        assert_eq!(view.options.len(), 12);
        assert!(view
            .options
            .iter()
            .all(|option| option.mark == AnswerOptionMark::Selectable));
        assert!(view.feedback.is_none());
    }

    #[test]
    fn reveal_marks_correct_and_wrong_choice() {
        let mut session = session();
        session.select_mode(StudyMode::Challenge);
        session.submit_answer("Argumentative");

        let ChallengeView::InProgress(view) = session.challenge_view() else {
            panic!("expected scenario view");
        };
        let mark_of = |name: &str| {
            view.options
                .iter()
                .find(|option| option.name == name)
                .map(|option| option.mark)
        };
        assert_eq!(mark_of("Leading Question"), Some(AnswerOptionMark::Correct));
        assert_eq!(mark_of("Argumentative"), Some(AnswerOptionMark::WrongChoice));
        assert_eq!(mark_of("Hearsay"), Some(AnswerOptionMark::Neutral));

        let feedback = view.feedback.unwrap();
        assert_eq!(
            feedback.headline(),
            "Incorrect. The correct objection is \"Leading Question\""
        );
        assert!(feedback.explanation.starts_with("This is a leading question"));
    }

    #[test]
    fn completion_view_lists_history_with_previews() {
        let mut session = session();
        session.select_mode(StudyMode::Challenge);
        for index in 0..12 {
            let answer = if index == 0 {
                "Relevance".to_string()
            } else {
                session
                    .challenge()
                    .current_scenario()
                    .correct_objection()
                    .to_string()
            };
            session.submit_answer(&answer);
            session.advance();
        }

        let ChallengeView::Complete(view) = session.challenge_view() else {
            panic!("expected completion view");
        };
        assert_eq!(view.score, 11);
        assert_eq!(view.band_label(), "Great Job!");
        assert_eq!(view.score_line(), "Your final score: 11 out of 12");
        assert_eq!(view.history.len(), 12);

        let first = &view.history[0];
        assert_eq!(first.number, 1);
        assert!(!first.is_correct);
        assert_eq!(first.correct_name.as_deref(), Some("Leading Question"));
        assert!(first.preview.ends_with("..."));
        assert_eq!(first.preview.chars().count(), HISTORY_PREVIEW_CHARS + 3);
        assert_eq!(view.history[1].correct_name, None);
    }

    #[test]
    fn preview_keeps_short_text_intact() {
        assert_eq!(preview("Short prompt"), "Short prompt");
        assert_eq!(preview(&"é".repeat(61)).chars().count(), 63);
    }
}
