//! Validation report types.
//!
//! The report is the full picture, not just a verdict: callers render
//! partial progress (credit bars, per-category tallies, the violation list)
//! even when the plan is invalid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use coursemap_types::CourseCode;

/// Which requirement family a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Prerequisite,
    Corequisite,
}

/// One course whose requirements are not met where it is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// Term label the offending course sits in.
    pub term: String,
    pub course_code: CourseCode,
    pub course_name: String,
    pub kind: ViolationKind,
    /// Rendered missing requirement, e.g. `"CS1114 AND (CS2064 OR ECE2514)"`.
    pub missing: String,
}

/// One configured credit threshold, evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementStatus {
    pub key: String,
    pub label: String,
    /// Category the threshold counts, `None` for total credits.
    pub category: Option<String>,
    pub required: u32,
    pub current: u32,
    pub met: bool,
}

/// Credit load of a single term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCredits {
    pub term: String,
    pub credits: u32,
    /// Set when the term exceeds the configured per-term credit cap.
    pub over_limit: bool,
}

/// Headline numbers for the plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_courses: usize,
    pub prerequisite_violations: usize,
    pub all_requirements_met: bool,
}

/// Aggregate result of validating a whole plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Every threshold met and zero violations.
    pub valid: bool,
    pub total_credits: u32,
    pub credits_by_category: BTreeMap<String, u32>,
    pub requirements: Vec<RequirementStatus>,
    pub term_credits: Vec<TermCredits>,
    pub violations: Vec<ViolationRecord>,
    pub summary: PlanSummary,
}

impl ValidationReport {
    /// Degree progress toward the total-credit requirement, capped at 100.
    /// Zero when no total-credit threshold is configured.
    pub fn progress_percent(&self) -> u32 {
        let Some(total) = self.requirements.iter().find(|r| r.category.is_none()) else {
            return 0;
        };
        if total.required == 0 {
            return 100;
        }
        (self.total_credits * 100 / total.required).min(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_with(total_credits: u32, required: u32) -> ValidationReport {
        ValidationReport {
            valid: false,
            total_credits,
            credits_by_category: BTreeMap::new(),
            requirements: vec![RequirementStatus {
                key: "total_credits".into(),
                label: "Total credits".into(),
                category: None,
                required,
                current: total_credits,
                met: total_credits >= required,
            }],
            term_credits: vec![],
            violations: vec![],
            summary: PlanSummary {
                total_courses: 0,
                prerequisite_violations: 0,
                all_requirements_met: false,
            },
        }
    }

    #[test]
    fn progress_is_capped_at_100() {
        assert_eq!(report_with(60, 120).progress_percent(), 50);
        assert_eq!(report_with(150, 120).progress_percent(), 100);
    }

    #[test]
    fn progress_without_total_threshold_is_zero() {
        let mut report = report_with(60, 120);
        report.requirements.clear();
        assert_eq!(report.progress_percent(), 0);
    }
}
