use crate::model::Scenario;

/// Exact, case-sensitive comparison of a submitted objection name against the
/// scenario's answer. No partial credit.
#[must_use]
pub fn grade(submitted: &str, scenario: &Scenario) -> bool {
    submitted == scenario.correct_objection()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::scenario;

    #[test]
    fn exact_name_is_correct() {
        assert!(grade("Hearsay", &scenario(1, "Hearsay")));
    }

    #[test]
    fn near_misses_are_wrong() {
        let target = scenario(1, "Hearsay");
        assert!(!grade("hearsay", &target));
        assert!(!grade("Hearsay ", &target));
        assert!(!grade("", &target));
        assert!(!grade("Relevance", &target));
    }
}
