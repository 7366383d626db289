//! Requirement expressions - prerequisites and corequisites.
//!
//! Stored course documents carry requirements in two shapes, used
//! interchangeably by seed data of different vintages:
//!
//! - Flat: `["CS1114", "CS2505"]` - every code required (AND)
//! - Grouped: `[["CS1114"], ["CS2064", "ECE2514"]]` - every group needs at
//!   least one satisfied member (AND of ORs)
//!
//! Some document stores reject directly nested arrays, so the grouped shape
//! occasionally arrives as a JSON-encoded *string* of the array. All three
//! encodings normalize through [`RequirementExpression::from_value`], which
//! never fails: anything that is not a recognizable requirement becomes the
//! empty expression. Missing or mangled requirement data must never block
//! enrollment, so the permissive default is the contract here, not a
//! fallback.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque course identifier, e.g. `"CS2114"`. Compared by exact string
/// match; any normalization of case or separators happens upstream.
pub type CourseCode = String;

/// A prerequisite or corequisite specification.
///
/// The shape is decided once, at the boundary, by inspecting the first
/// element of the incoming array: a scalar first element makes the whole
/// expression flat, an array first element makes it grouped. Elements of
/// the other shape are dropped rather than promoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RequirementExpression {
    /// Every listed code is required (pure AND).
    Flat(Vec<CourseCode>),
    /// Every group needs at least one satisfied member (AND of ORs).
    /// A singleton group degenerates to a single mandatory course.
    Grouped(Vec<Vec<CourseCode>>),
}

impl RequirementExpression {
    /// The empty expression - vacuously satisfied.
    pub fn empty() -> Self {
        RequirementExpression::Flat(Vec::new())
    }

    /// True if there is nothing to satisfy.
    pub fn is_empty(&self) -> bool {
        match self {
            RequirementExpression::Flat(codes) => codes.is_empty(),
            RequirementExpression::Grouped(groups) => groups.is_empty(),
        }
    }

    /// Normalize any stored value into an expression.
    ///
    /// Accepted encodings:
    /// - native array of strings (flat)
    /// - native array of arrays of strings (grouped)
    /// - a JSON string containing either of the above
    ///
    /// Everything else - null, objects, numbers, arrays of junk - becomes
    /// the empty expression. Never an error.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self::from_items(items),
            // Nested arrays sometimes reach us JSON-encoded as a string.
            Value::String(text) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(items)) => Self::from_items(&items),
                _ => Self::empty(),
            },
            _ => Self::empty(),
        }
    }

    fn from_items(items: &[Value]) -> Self {
        let Some(first) = items.first() else {
            return Self::empty();
        };
        if first.is_array() {
            let groups: Vec<Vec<CourseCode>> = items
                .iter()
                .filter_map(Value::as_array)
                .map(|group| {
                    group
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                })
                .filter(|group: &Vec<CourseCode>| !group.is_empty())
                .collect();
            RequirementExpression::Grouped(groups)
        } else {
            // Scalar first element: the whole expression reads as flat.
            let codes: Vec<CourseCode> = items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect();
            RequirementExpression::Flat(codes)
        }
    }

    /// All codes mentioned anywhere in the expression, for chip-style
    /// display. OR structure is lost; use [`render`](Self::render) when the
    /// alternatives matter.
    pub fn flatten(&self) -> Vec<CourseCode> {
        match self {
            RequirementExpression::Flat(codes) => codes.clone(),
            RequirementExpression::Grouped(groups) => groups.iter().flatten().cloned().collect(),
        }
    }

    /// Human-readable rendering.
    ///
    /// Flat lists join with commas: `"CS1114, CS2505"`. Grouped expressions
    /// keep the alternatives visible: `"CS1114 AND (CS2064 OR ECE2514)"`,
    /// with singleton groups rendered bare.
    pub fn render(&self) -> String {
        match self {
            RequirementExpression::Flat(codes) => codes.join(", "),
            RequirementExpression::Grouped(groups) => groups
                .iter()
                .map(|group| {
                    if group.len() == 1 {
                        group[0].clone()
                    } else {
                        format!("({})", group.join(" OR "))
                    }
                })
                .collect::<Vec<_>>()
                .join(" AND "),
        }
    }

    /// View the expression as AND-of-OR groups, with flat codes wrapped as
    /// singleton groups. Satisfaction semantics are identical across both
    /// shapes under this view.
    pub fn groups(&self) -> Vec<Vec<CourseCode>> {
        match self {
            RequirementExpression::Flat(codes) => {
                codes.iter().map(|code| vec![code.clone()]).collect()
            }
            RequirementExpression::Grouped(groups) => groups.clone(),
        }
    }
}

impl Default for RequirementExpression {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'de> Deserialize<'de> for RequirementExpression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
