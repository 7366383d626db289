//! Plan-wide validation.
//!
//! Walks every term of a plan, evaluates every placed course against the
//! completion set of strictly earlier terms, and aggregates credits,
//! thresholds, and violations into a [`ValidationReport`].

use std::collections::BTreeMap;

use tracing::{debug, warn};

use coursemap_types::{CourseCatalog, Plan};

use crate::calendar::TermCalendar;
use crate::config::DegreeConfig;
use crate::evaluate::evaluate;
use crate::report::{
    PlanSummary, RequirementStatus, TermCredits, ValidationReport, ViolationKind, ViolationRecord,
};
use crate::sequencer::{completion_set_before, courses_in_term};

/// Validate a plan against a catalog and degree configuration.
///
/// Each term's check is independent: the term sees exactly the courses
/// placed strictly before it. Codes the catalog cannot resolve are skipped
/// for both the violation pass and the credit sums - incomplete catalog
/// data must not crash validation. Every threshold evaluates as
/// `current >= required`, and the plan is valid when all thresholds hold
/// and no violations were found.
pub fn validate(
    plan: &Plan,
    catalog: &dyn CourseCatalog,
    config: &DegreeConfig,
    calendar: &TermCalendar,
) -> ValidationReport {
    let mut violations = Vec::new();
    let mut total_credits = 0u32;
    let mut credits_by_category: BTreeMap<String, u32> = BTreeMap::new();
    let mut term_credits = Vec::new();
    let mut total_courses = 0usize;

    for (label, placed) in &plan.semesters {
        total_courses += placed.len();
        let completed = completion_set_before(plan, label, calendar);
        // Corequisites also count same-term placements.
        let mut coreq_window = completed.clone();
        coreq_window.extend(courses_in_term(plan, label, calendar));

        debug!(
            "validating term {label:?}: {} placed, {} completed before",
            placed.len(),
            completed.len()
        );

        let mut credits_this_term = 0u32;
        for placed_course in placed {
            let Some(course) = catalog.lookup(&placed_course.code) else {
                warn!("course {} not in catalog, skipping", placed_course.code);
                continue;
            };

            total_credits += course.credits;
            credits_this_term += course.credits;
            *credits_by_category
                .entry(course.category_or_default().to_string())
                .or_insert(0) += course.credits;

            let prereqs = evaluate(&course.prerequisites, &completed);
            if !prereqs.satisfied {
                violations.push(ViolationRecord {
                    term: label.clone(),
                    course_code: course.code.clone(),
                    course_name: course.name.clone(),
                    kind: ViolationKind::Prerequisite,
                    missing: prereqs.missing.render(),
                });
            }

            let coreqs = evaluate(&course.corequisites, &coreq_window);
            if !coreqs.satisfied {
                violations.push(ViolationRecord {
                    term: label.clone(),
                    course_code: course.code.clone(),
                    course_name: course.name.clone(),
                    kind: ViolationKind::Corequisite,
                    missing: coreqs.missing.render(),
                });
            }
        }

        term_credits.push(TermCredits {
            term: label.clone(),
            credits: credits_this_term,
            over_limit: config
                .term_credit_limit
                .is_some_and(|limit| credits_this_term > limit),
        });
    }

    let requirements: Vec<RequirementStatus> = config
        .requirements
        .iter()
        .map(|requirement| {
            let current = match &requirement.category {
                None => total_credits,
                Some(category) => credits_by_category.get(category).copied().unwrap_or(0),
            };
            RequirementStatus {
                key: requirement.key.clone(),
                label: requirement.label.clone(),
                category: requirement.category.clone(),
                required: requirement.min_credits,
                current,
                met: current >= requirement.min_credits,
            }
        })
        .collect();

    let all_requirements_met = requirements.iter().all(|status| status.met);
    let valid = all_requirements_met && violations.is_empty();

    ValidationReport {
        valid,
        total_credits,
        credits_by_category,
        requirements,
        term_credits,
        summary: PlanSummary {
            total_courses,
            prerequisite_violations: violations.len(),
            all_requirements_met,
        },
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coursemap_types::{Course, InMemoryCatalog, RequirementExpression};

    fn catalog() -> InMemoryCatalog {
        [
            Course::new("CS1114", "Introduction to Software Design", 3).with_category("Core CS"),
            Course::new("CS2114", "Software Design and Data Structures", 3)
                .with_category("Core CS")
                .with_prerequisites(RequirementExpression::Flat(vec!["CS1114".into()])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn unknown_codes_are_skipped_entirely() {
        let mut plan = Plan::new("p", "u", "test");
        plan.place("Fall2025", "CS1114");
        plan.place("Fall2025", "NOPE101");

        let report = validate(
            &plan,
            &catalog(),
            &DegreeConfig::default(),
            &TermCalendar::fall_spring(),
        );
        assert_eq!(report.total_credits, 3);
        assert!(report.violations.is_empty());
        // The placed-but-unresolvable course still counts as placed.
        assert_eq!(report.summary.total_courses, 2);
    }

    #[test]
    fn per_term_credit_cap_flags_overload() {
        let mut plan = Plan::new("p", "u", "test");
        for n in 0..5 {
            plan.place("Fall2025", format!("HEAVY{n}").as_str());
        }
        let catalog: InMemoryCatalog = (0..5)
            .map(|n| Course::new(format!("HEAVY{n}"), "Heavy", 4))
            .collect();

        let mut config = DegreeConfig::default();
        config.term_credit_limit = Some(19);
        let report = validate(&plan, &catalog, &config, &TermCalendar::fall_spring());
        assert_eq!(report.term_credits.len(), 1);
        assert_eq!(report.term_credits[0].credits, 20);
        assert!(report.term_credits[0].over_limit);
    }

    #[test]
    fn empty_plan_reports_zero_against_thresholds() {
        let plan = Plan::new("p", "u", "empty");
        let report = validate(
            &plan,
            &catalog(),
            &DegreeConfig::default(),
            &TermCalendar::fall_spring(),
        );
        assert!(!report.valid);
        assert_eq!(report.total_credits, 0);
        assert!(report.credits_by_category.is_empty());
        assert!(report.violations.is_empty());
        assert!(report.requirements.iter().all(|r| !r.met));
    }

    #[test]
    fn zero_minimum_threshold_is_met_by_empty_plan() {
        let plan = Plan::new("p", "u", "empty");
        let mut config = DegreeConfig::default();
        config.requirements = vec![crate::config::CreditRequirement::new(
            "total_credits",
            "Total",
            0,
        )];
        let report = validate(&plan, &catalog(), &config, &TermCalendar::fall_spring());
        assert!(report.valid);
    }
}
