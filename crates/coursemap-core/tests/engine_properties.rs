//! Property tests for the evaluation and sequencing invariants.

use proptest::prelude::*;

use coursemap_core::{completion_set_before, evaluate, CompletionSet, TermCalendar};
use coursemap_types::{Plan, RequirementExpression};

const CODE_POOL: &[&str] = &[
    "CS1114", "CS2114", "CS2505", "CS2506", "CS3114", "MATH1225", "MATH1226", "STAT3005",
];

const LABEL_POOL: &[&str] = &[
    "Fall2025",
    "Spring2026",
    "Fall2026",
    "Spring2027",
    "not a term",
];

fn codes() -> Vec<String> {
    CODE_POOL.iter().map(|code| code.to_string()).collect()
}

fn grouped_requirement() -> impl Strategy<Value = RequirementExpression> {
    prop::collection::vec(prop::sample::subsequence(codes(), 1..4), 0..4)
        .prop_map(RequirementExpression::Grouped)
}

fn placements() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (
            prop::sample::select(LABEL_POOL).prop_map(str::to_string),
            prop::sample::select(CODE_POOL).prop_map(str::to_string),
        ),
        0..12,
    )
}

proptest! {
    // A flat list and the same list as singleton groups are the same
    // requirement.
    #[test]
    fn flat_equals_singleton_groups(
        required in prop::sample::subsequence(codes(), 0..6),
        completed in prop::sample::subsequence(codes(), 0..8),
    ) {
        let completed: CompletionSet = completed.into_iter().collect();
        let flat = RequirementExpression::Flat(required.clone());
        let grouped = RequirementExpression::Grouped(
            required.iter().map(|code| vec![code.clone()]).collect(),
        );

        let flat_eval = evaluate(&flat, &completed);
        let grouped_eval = evaluate(&grouped, &completed);
        prop_assert_eq!(flat_eval.satisfied, grouped_eval.satisfied);
        prop_assert_eq!(flat_eval.missing_codes(), grouped_eval.missing_codes());
    }

    // Completing more courses never revokes satisfaction.
    #[test]
    fn satisfaction_is_monotone(
        requirement in grouped_requirement(),
        completed in prop::sample::subsequence(codes(), 0..8),
        extra in prop::sample::subsequence(codes(), 0..8),
    ) {
        let completed: CompletionSet = completed.into_iter().collect();
        let mut superset = completed.clone();
        superset.extend(extra);

        if evaluate(&requirement, &completed).satisfied {
            prop_assert!(evaluate(&requirement, &superset).satisfied);
        }
    }

    // The completion set depends on chronology, not on the order courses
    // were placed into the plan.
    #[test]
    fn completion_set_ignores_placement_order(
        (ordered, shuffled) in placements()
            .prop_flat_map(|p| (Just(p.clone()), Just(p).prop_shuffle())),
        target in prop::sample::select(LABEL_POOL),
    ) {
        let calendar = TermCalendar::fall_spring();

        let mut plan_a = Plan::new("a", "u", "ordered");
        for (label, code) in &ordered {
            plan_a.place(label.clone(), code.as_str());
        }
        let mut plan_b = Plan::new("b", "u", "shuffled");
        for (label, code) in &shuffled {
            plan_b.place(label.clone(), code.as_str());
        }

        prop_assert_eq!(
            completion_set_before(&plan_a, target, &calendar),
            completion_set_before(&plan_b, target, &calendar)
        );
    }

    // Requirement data that is not an array never blocks anything.
    #[test]
    fn junk_requirement_never_blocks(
        junk in "[a-zA-Z ]{0,20}",
        number in any::<i64>(),
        completed in prop::sample::subsequence(codes(), 0..4),
    ) {
        let completed: CompletionSet = completed.into_iter().collect();
        for value in [serde_json::Value::Null, serde_json::json!(junk), serde_json::json!(number)] {
            let expr = RequirementExpression::from_value(&value);
            prop_assert!(expr.is_empty());
            prop_assert!(evaluate(&expr, &completed).satisfied);
        }
    }
}
