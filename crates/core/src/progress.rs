use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Catalog;
use crate::model::ObjectionId;

/// Learn-mode record of which objections the user has opened.
///
/// Flags only ever go from unseen to seen; nothing clears them short of
/// dropping the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressTracker {
    known: BTreeSet<ObjectionId>,
    seen: BTreeMap<ObjectionId, bool>,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            known: catalog.objections().iter().map(|o| o.id()).collect(),
            seen: BTreeMap::new(),
        }
    }

    /// Marks `id` as seen. Returns true the first time an id is marked.
    ///
    /// Ids outside the catalog are ignored so the seen count never exceeds
    /// the catalog size.
    pub fn mark_seen(&mut self, id: ObjectionId) -> bool {
        if !self.known.contains(&id) {
            return false;
        }
        let flag = self.seen.entry(id).or_insert(false);
        let newly_seen = !*flag;
        *flag = true;
        newly_seen
    }

    #[must_use]
    pub fn is_seen(&self, id: ObjectionId) -> bool {
        self.seen.get(&id).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.values().filter(|flag| **flag).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.known.len()
    }

    /// `round(100 * seen / total)` with halves rounded up; 0 for an empty catalog.
    #[must_use]
    pub fn mastery_percentage(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let seen = self.seen_count().min(total);
        let percent = (200 * seen + total) / (2 * total);
        u8::try_from(percent).unwrap_or(100)
    }
}
