//! Course catalog records.

use serde::{Deserialize, Serialize};

use crate::requirement::{CourseCode, RequirementExpression};

/// Category bucket for courses whose record carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A course as stored in the catalog collection.
///
/// Seed data is uneven - scraped records miss fields that hand-curated ones
/// carry - so everything beyond code and name defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: CourseCode,
    pub name: String,
    #[serde(default)]
    pub credits: u32,
    /// Degree category ("Core CS", "CS Elective", ...). Absent records
    /// aggregate under [`UNCATEGORIZED`].
    #[serde(default)]
    pub category: Option<String>,
    /// Terms the course is offered in, e.g. `["Fall", "Spring"]`.
    #[serde(default)]
    pub semesters: Vec<String>,
    #[serde(default)]
    pub pathways: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub prerequisites: RequirementExpression,
    /// Corequisites may be satisfied by same-term placement.
    #[serde(default)]
    pub corequisites: RequirementExpression,
}

impl Course {
    pub fn new(code: impl Into<CourseCode>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            category: None,
            semesters: Vec::new(),
            pathways: Vec::new(),
            description: None,
            prerequisites: RequirementExpression::empty(),
            corequisites: RequirementExpression::empty(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_prerequisites(mut self, prerequisites: RequirementExpression) -> Self {
        self.prerequisites = prerequisites;
        self
    }

    pub fn with_corequisites(mut self, corequisites: RequirementExpression) -> Self {
        self.corequisites = corequisites;
        self
    }

    /// Category for aggregation, with the default bucket applied.
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}
