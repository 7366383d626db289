//! Drag-and-drop placement gate.
//!
//! Before a course lands in a semester, the UI asks whether its
//! requirements would hold there. Prerequisites check against everything
//! placed in strictly earlier terms; corequisites also count courses
//! already sitting in the target term.

use serde::Serialize;

use coursemap_types::{Course, CourseCode, Plan};

use crate::calendar::TermCalendar;
use crate::evaluate::evaluate;
use crate::sequencer::{completion_set_before, courses_in_term};

/// Outcome of a placement check, with a reason string ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementDecision {
    pub allowed: bool,
    pub reason: String,
    /// Flattened missing codes (empty when allowed).
    pub missing_prerequisites: Vec<CourseCode>,
}

impl PlacementDecision {
    fn allowed() -> Self {
        Self {
            allowed: true,
            reason: "All prerequisites met".to_string(),
            missing_prerequisites: Vec::new(),
        }
    }
}

/// Can `course` be added to the term `target_label` of `plan`?
pub fn check_placement(
    course: &Course,
    target_label: &str,
    plan: &Plan,
    calendar: &TermCalendar,
) -> PlacementDecision {
    let completed = completion_set_before(plan, target_label, calendar);

    let prereqs = evaluate(&course.prerequisites, &completed);
    if !prereqs.satisfied {
        return PlacementDecision {
            allowed: false,
            reason: format!("Missing prerequisites: {}", prereqs.missing.render()),
            missing_prerequisites: prereqs.missing_codes(),
        };
    }

    // Corequisites may ride in the same term.
    let mut window = completed;
    window.extend(courses_in_term(plan, target_label, calendar));
    let coreqs = evaluate(&course.corequisites, &window);
    if !coreqs.satisfied {
        return PlacementDecision {
            allowed: false,
            reason: format!("Missing corequisites: {}", coreqs.missing.render()),
            missing_prerequisites: coreqs.missing_codes(),
        };
    }

    PlacementDecision::allowed()
}
