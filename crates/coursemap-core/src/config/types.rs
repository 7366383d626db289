//! Configuration types for degree requirements and the term calendar.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::TermCalendar;

/// Configuration validation error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("calendar term cycle must not be empty")]
    EmptyTermCycle,

    #[error("previous-year term index {index} out of range for a cycle of {cycle_len}")]
    PreviousYearTermOutOfRange { index: usize, cycle_len: usize },

    #[error("duplicate requirement key '{0}'")]
    DuplicateRequirementKey(String),
}

/// A minimum-credit threshold over one category (or over everything).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditRequirement {
    /// Stable identifier, e.g. `total_credits`, `core_cs`.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Course category counted toward this threshold; `None` counts every
    /// placed course.
    #[serde(default)]
    pub category: Option<String>,
    pub min_credits: u32,
}

impl CreditRequirement {
    pub fn new(key: impl Into<String>, label: impl Into<String>, min_credits: u32) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            category: None,
            min_credits,
        }
    }

    pub fn for_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Serializable form of [`TermCalendar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Term names in academic-year order.
    pub cycle: Vec<String>,
    /// Cycle indices whose calendar year belongs to the previous academic
    /// year.
    #[serde(default)]
    pub previous_year_terms: Vec<usize>,
}

impl CalendarConfig {
    /// Validate and build the runtime calendar.
    pub fn build(&self) -> Result<TermCalendar, ConfigError> {
        if self.cycle.is_empty() {
            return Err(ConfigError::EmptyTermCycle);
        }
        if let Some(&index) = self
            .previous_year_terms
            .iter()
            .find(|&&index| index >= self.cycle.len())
        {
            return Err(ConfigError::PreviousYearTermOutOfRange {
                index,
                cycle_len: self.cycle.len(),
            });
        }
        Ok(TermCalendar::new(
            self.cycle.iter().cloned(),
            self.previous_year_terms.iter().copied(),
        ))
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            cycle: vec!["fall".to_string(), "spring".to_string()],
            previous_year_terms: vec![1],
        }
    }
}

/// Full degree configuration: thresholds, per-term credit cap, calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeConfig {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub requirements: Vec<CreditRequirement>,
    /// Warn when a single term carries more credits than this.
    #[serde(default)]
    pub term_credit_limit: Option<u32>,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl DegreeConfig {
    /// Check internal consistency. The loader calls this after parsing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = std::collections::HashSet::new();
        for requirement in &self.requirements {
            if !seen.insert(requirement.key.as_str()) {
                return Err(ConfigError::DuplicateRequirementKey(
                    requirement.key.clone(),
                ));
            }
        }
        self.calendar.build().map(|_| ())
    }
}

impl Default for DegreeConfig {
    /// The CS curriculum the seed data targets: 120 total credits, 45 of
    /// Core CS, 12 of CS electives, 19 credits per term before the
    /// overload warning.
    fn default() -> Self {
        Self {
            version: default_version(),
            requirements: vec![
                CreditRequirement::new("total_credits", "Total credits", 120),
                CreditRequirement::new("core_cs", "Core CS credits", 45).for_category("Core CS"),
                CreditRequirement::new("cs_electives", "CS elective credits", 12)
                    .for_category("CS Elective"),
            ],
            term_credit_limit: Some(19),
            calendar: CalendarConfig::default(),
        }
    }
}
