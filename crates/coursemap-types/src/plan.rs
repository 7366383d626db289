//! Degree plan documents.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::requirement::CourseCode;

/// A course placed into a semester of a plan.
///
/// Plans store only the code and a display name snapshot; everything else is
/// resolved against the catalog at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedCourse {
    pub code: CourseCode,
    #[serde(default)]
    pub name: Option<String>,
}

impl PlacedCourse {
    pub fn new(code: impl Into<CourseCode>) -> Self {
        Self {
            code: code.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<&str> for PlacedCourse {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// A degree plan document.
///
/// `semesters` maps term labels ("Fall2025") to the courses placed there.
/// Order within a term is insertion order and carries no meaning for
/// requirement checking; the map itself is sorted so every walk over the
/// plan is deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub semesters: BTreeMap<String, Vec<PlacedCourse>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Plan {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            name: name.into(),
            semesters: BTreeMap::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Append a course to a term, creating the term if needed.
    pub fn place(&mut self, term_label: impl Into<String>, course: impl Into<PlacedCourse>) {
        self.semesters
            .entry(term_label.into())
            .or_default()
            .push(course.into());
    }

    /// Every placed course code, across all terms.
    pub fn course_codes(&self) -> impl Iterator<Item = &CourseCode> {
        self.semesters.values().flatten().map(|c| &c.code)
    }

    /// Total number of placed courses.
    pub fn course_count(&self) -> usize {
        self.semesters.values().map(Vec::len).sum()
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new("", "", "")
    }
}
