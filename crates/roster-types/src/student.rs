//! The student record.
//!
//! A [`Student`] is both the request body for create/update and the
//! stored value. Absent fields decode to their zero values so that a
//! partial body reaches validation rather than failing to parse.

use serde::{Deserialize, Serialize};

use crate::ids::StudentId;
use crate::validation::{ValidationError, validate};

/// A student record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    /// Store-assigned identifier. Ignored on input.
    pub id: StudentId,
    /// Full name. Must be non-empty.
    pub name: String,
    /// Age in years. Must be within `0..=150`.
    pub age: i64,
    /// Contact email. Must be non-empty; the format is not checked.
    pub email: String,
}

impl Student {
    /// Build an unsaved student (id `0`).
    pub fn new(name: impl Into<String>, age: i64, email: impl Into<String>) -> Self {
        Self {
            id: StudentId::default(),
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    /// Return a copy of this record carrying the given id.
    #[must_use]
    pub fn with_id(mut self, id: StudentId) -> Self {
        self.id = id;
        self
    }

    /// Check this record against the validation rules.
    ///
    /// See [`validate`].
    pub fn validate(&self) -> Vec<ValidationError> {
        validate(self)
    }

    /// One-sentence description of this student.
    pub fn summary(&self) -> StudentSummary {
        StudentSummary {
            summary: format!(
                "Student {} is {} years old with email {}.",
                self.name, self.age, self.email
            ),
        }
    }
}

/// Response body of the summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    /// The formatted sentence.
    pub summary: String,
}
