//! Shared data model for coursemap.
//!
//! This crate is the SINGLE SOURCE OF TRUTH for every shape that crosses the
//! storage boundary: course records, degree plans, and the requirement
//! expressions attached to courses. The document store is schemaless and the
//! seed data has grown organically, so every type here deserializes
//! permissively - absent fields default, and requirement expressions accept
//! all the encodings found in stored documents.
//!
//! Evaluation logic lives in `coursemap-core`; nothing here decides whether
//! a requirement is satisfied.

pub mod catalog;
pub mod course;
pub mod plan;
pub mod requirement;

pub use catalog::{CourseCatalog, InMemoryCatalog};
pub use course::{Course, UNCATEGORIZED};
pub use plan::{PlacedCourse, Plan};
pub use requirement::{CourseCode, RequirementExpression};
