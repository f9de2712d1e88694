//! Field-level validation rules for [`Student`] records.
//!
//! Validation is a pure function that reports every violated rule instead
//! of stopping at the first one. Rules are checked in field order: name,
//! age, email.

use serde::{Deserialize, Serialize};

use crate::student::Student;

/// Minimum accepted age, inclusive.
pub const AGE_MIN: i64 = 0;

/// Maximum accepted age, inclusive.
pub const AGE_MAX: i64 = 150;

/// A single rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The JSON field name that failed.
    pub field: String,
    /// Human-readable description of the rule.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_owned(),
            message: message.to_owned(),
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a student against all rules.
///
/// Returns one [`ValidationError`] per failing rule; an empty vector means
/// the record is valid. The email format is deliberately not checked.
pub fn validate(student: &Student) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if student.name.is_empty() {
        errors.push(ValidationError::new("name", "Name is required"));
    }

    if !(AGE_MIN..=AGE_MAX).contains(&student.age) {
        errors.push(ValidationError::new(
            "age",
            "Age must be between 0 and 150",
        ));
    }

    if student.email.is_empty() {
        errors.push(ValidationError::new("email", "Email is required"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn valid_student_has_no_errors() {
        assert!(validate(&Student::new("Ann", 20, "a@b.com")).is_empty());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(validate(&Student::new("Ann", 0, "a@b.com")).is_empty());
        assert!(validate(&Student::new("Ann", 150, "a@b.com")).is_empty());
        assert_eq!(fields(&validate(&Student::new("Ann", -1, "a@b.com"))), ["age"]);
        assert_eq!(fields(&validate(&Student::new("Ann", 151, "a@b.com"))), ["age"]);
    }

    #[test]
    fn reports_only_violated_rules() {
        assert_eq!(fields(&validate(&Student::new("", 20, "a@b.com"))), ["name"]);
        assert_eq!(fields(&validate(&Student::new("Ann", 20, ""))), ["email"]);
        assert_eq!(fields(&validate(&Student::new("", 20, ""))), ["name", "email"]);
    }

    #[test]
    fn all_rules_reported_in_field_order() {
        let errors = validate(&Student::new("", 200, ""));
        assert_eq!(fields(&errors), ["name", "age", "email"]);
        assert_eq!(
            errors.first().map(|e| e.message.as_str()),
            Some("Name is required")
        );
        assert_eq!(
            errors.get(1).map(|e| e.message.as_str()),
            Some("Age must be between 0 and 150")
        );
        assert_eq!(
            errors.get(2).map(|e| e.message.as_str()),
            Some("Email is required")
        );
    }

    #[test]
    fn email_format_is_not_checked() {
        assert!(validate(&Student::new("Ann", 20, "not-an-email")).is_empty());
    }

    #[test]
    fn serializes_field_and_message() {
        let json = serde_json::to_value(ValidationError::new("name", "Name is required"))
            .unwrap_or_default();
        assert_eq!(json["field"], "name");
        assert_eq!(json["message"], "Name is required");
    }
}
