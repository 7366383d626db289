//! Requirement evaluation.
//!
//! Pure functions from (requirement, completion set) to a satisfaction
//! verdict. Total over every documented input shape: malformed requirement
//! data normalized to the empty expression upstream and evaluates as
//! vacuously satisfied here.

use serde::{Deserialize, Serialize};

use coursemap_types::{CourseCode, RequirementExpression};

use crate::sequencer::CompletionSet;

/// Verdict for one requirement expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub satisfied: bool,
    /// What is still missing, in the shape of the input: a flat list of
    /// missing codes, or the entire unsatisfied OR-groups. Groups are kept
    /// whole so diagnostics can say "need CS2064 OR ECE2514".
    pub missing: RequirementExpression,
}

impl Evaluation {
    fn pass() -> Self {
        Self {
            satisfied: true,
            missing: RequirementExpression::empty(),
        }
    }

    /// Flattened view of the missing codes, for simple display.
    pub fn missing_codes(&self) -> Vec<CourseCode> {
        self.missing.flatten()
    }
}

/// Evaluate a requirement expression against a completion set.
///
/// Flat expressions need every code present; grouped expressions need at
/// least one satisfied member per group. An empty expression is vacuously
/// satisfied.
pub fn evaluate(requirement: &RequirementExpression, completed: &CompletionSet) -> Evaluation {
    if requirement.is_empty() {
        return Evaluation::pass();
    }
    let missing = match requirement {
        RequirementExpression::Flat(codes) => {
            let missing: Vec<CourseCode> = codes
                .iter()
                .filter(|code| !completed.contains(*code))
                .cloned()
                .collect();
            RequirementExpression::Flat(missing)
        }
        RequirementExpression::Grouped(groups) => {
            let missing: Vec<Vec<CourseCode>> = groups
                .iter()
                .filter(|group| !group.iter().any(|code| completed.contains(code)))
                .cloned()
                .collect();
            RequirementExpression::Grouped(missing)
        }
    };
    Evaluation {
        satisfied: missing.is_empty(),
        missing,
    }
}

/// Per-course indicator shown next to catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrerequisiteStatus {
    /// The course has no prerequisites at all.
    NoPrereqs,
    /// Prerequisites exist and are met.
    Available,
    /// Prerequisites exist and are not met.
    Locked,
}

/// Status of a course's prerequisites against a completion set.
pub fn prerequisite_status(
    prerequisites: &RequirementExpression,
    completed: &CompletionSet,
) -> PrerequisiteStatus {
    if prerequisites.is_empty() {
        return PrerequisiteStatus::NoPrereqs;
    }
    if evaluate(prerequisites, completed).satisfied {
        PrerequisiteStatus::Available
    } else {
        PrerequisiteStatus::Locked
    }
}
