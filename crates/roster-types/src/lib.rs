//! Shared type definitions for the Roster student service.
//!
//! This crate is the single source of truth for the student record and
//! its validation rules. Both the HTTP layer and the generation client
//! depend on it.
//!
//! # Modules
//!
//! - [`ids`] -- Integer identifier wrapper for students
//! - [`student`] -- The student record and its summary projection
//! - [`validation`] -- Field-level validation rules

pub mod ids;
pub mod student;
pub mod validation;

// Re-export all public types at crate root for convenience.
pub use ids::StudentId;
pub use student::{Student, StudentSummary};
pub use validation::{AGE_MAX, AGE_MIN, ValidationError, validate};
