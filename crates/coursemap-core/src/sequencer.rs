//! Term sequencing: what counts as completed before a given term.

use std::collections::HashSet;

use tracing::warn;

use coursemap_types::{CourseCode, Plan};

use crate::calendar::TermCalendar;

/// Set of course codes considered satisfied at evaluation time.
pub type CompletionSet = HashSet<CourseCode>;

/// Union of all course codes placed in terms strictly before `target_label`.
///
/// Terms whose labels fail to parse are skipped on both sides: they never
/// contribute to the completion set, and an unparseable target yields the
/// empty set. Courses placed in the target term itself are excluded - same
/// -term placement does not satisfy a prerequisite.
///
/// The result depends only on the chronological order the calendar assigns,
/// never on the plan map's iteration order.
pub fn completion_set_before(
    plan: &Plan,
    target_label: &str,
    calendar: &TermCalendar,
) -> CompletionSet {
    let mut completed = CompletionSet::new();
    let Some(target) = calendar.parse(target_label) else {
        return completed;
    };
    for (label, courses) in &plan.semesters {
        let Some(term) = calendar.parse(label) else {
            warn!("skipping unparseable term label {label:?}");
            continue;
        };
        if term.is_before(&target) {
            completed.extend(courses.iter().map(|course| course.code.clone()));
        }
    }
    completed
}

/// Course codes placed in the target term itself (matching by parsed
/// position, so label-case variants of the same term merge). This is the
/// corequisite window: a corequisite may ride in the same term.
pub fn courses_in_term(plan: &Plan, target_label: &str, calendar: &TermCalendar) -> CompletionSet {
    let mut placed = CompletionSet::new();
    let Some(target) = calendar.parse(target_label) else {
        return placed;
    };
    for (label, courses) in &plan.semesters {
        if calendar.parse(label) == Some(target) {
            placed.extend(courses.iter().map(|course| course.code.clone()));
        }
    }
    placed
}
