//! coursemap-core: prerequisite engine and plan validator for coursemap
//!
//! This crate contains the pure planning logic with NO database dependencies:
//! - Term calendar and label parsing (academic-year ordering)
//! - Completion-set sequencing (what counts as done before a term)
//! - Requirement evaluation (flat AND lists, AND-of-OR groups)
//! - Placement checks for drag-and-drop
//! - Plan-wide validation and the report types
//! - Degree requirements configuration and YAML loader
//!
//! Everything is a pure function of its inputs; the HTTP layer and the
//! document-store client live elsewhere and inject catalog data through
//! the `CourseCatalog` trait.

pub mod calendar;
pub mod config;
pub mod evaluate;
pub mod placement;
pub mod report;
pub mod sequencer;
pub mod validator;

// Re-export commonly used types
pub use calendar::{ParsedTerm, TermCalendar};
pub use config::{CalendarConfig, ConfigError, ConfigLoader, CreditRequirement, DegreeConfig};
pub use evaluate::{evaluate, prerequisite_status, Evaluation, PrerequisiteStatus};
pub use placement::{check_placement, PlacementDecision};
pub use report::{
    PlanSummary, RequirementStatus, TermCredits, ValidationReport, ViolationKind, ViolationRecord,
};
pub use sequencer::{completion_set_before, courses_in_term, CompletionSet};
pub use validator::validate;
