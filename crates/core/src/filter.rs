use crate::catalog::Catalog;
use crate::model::{CategoryFilter, Objection};

/// Objections visible under `selection`, in catalog order.
///
/// Pure and idempotent: safe to call on every render.
#[must_use]
pub fn filter(catalog: &Catalog, selection: CategoryFilter) -> Vec<&Objection> {
    catalog
        .objections()
        .iter()
        .filter(|objection| selection.matches(objection.categories()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::model::Category;

    #[test]
    fn all_returns_full_catalog_in_order() {
        let catalog = content::builtin().unwrap();
        let visible = filter(&catalog, CategoryFilter::All);
        let expected: Vec<&Objection> = catalog.objections().iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn single_category_keeps_only_tagged_items_in_relative_order() {
        let catalog = content::builtin().unwrap();
        for category in Category::ALL {
            let visible = filter(&catalog, CategoryFilter::Only(category));
            assert!(visible.iter().all(|objection| objection.has_category(category)));

            let ids: Vec<u64> = visible.iter().map(|objection| objection.id().value()).collect();
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            assert_eq!(ids, sorted);

            let tagged = catalog
                .objections()
                .iter()
                .filter(|objection| objection.has_category(category))
                .count();
            assert_eq!(visible.len(), tagged);
        }
    }

    #[test]
    fn evidence_filter_matches_reference_content() {
        let catalog = content::builtin().unwrap();
        let names: Vec<&str> = filter(&catalog, CategoryFilter::Only(Category::Evidence))
            .into_iter()
            .map(Objection::name)
            .collect();
        assert_eq!(names, vec!["Relevance", "Hearsay", "Lack of Foundation"]);
    }
}
