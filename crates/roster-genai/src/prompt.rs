//! Prompt rendering via `minijinja`.
//!
//! The summary prompt is a built-in template rendered against the
//! serialized [`Student`].

use minijinja::Environment;
use roster_types::Student;

use crate::error::GenerationError;

/// Name under which the summary template is registered.
const SUMMARY_TEMPLATE_NAME: &str = "student_summary";

/// Template for the student summary prompt.
const SUMMARY_TEMPLATE: &str = "Generate a brief summary of this student:
Name: {{ name }}
Age: {{ age }}
Email: {{ email }}";

/// Renders generation prompts from student records.
pub struct PromptBuilder {
    env: Environment<'static>,
}

impl PromptBuilder {
    /// Create a builder with the built-in templates loaded.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Template`] if a built-in template fails
    /// to parse.
    pub fn new() -> Result<Self, GenerationError> {
        let mut env = Environment::new();
        env.add_template(SUMMARY_TEMPLATE_NAME, SUMMARY_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the summary prompt for a student.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Template`] if rendering fails.
    pub fn student_summary(&self, student: &Student) -> Result<String, GenerationError> {
        let prompt = self
            .env
            .get_template(SUMMARY_TEMPLATE_NAME)?
            .render(student)?;
        Ok(prompt)
    }
}
