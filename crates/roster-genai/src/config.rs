//! Configuration for the generation client.

use serde::Deserialize;

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "llama2";

/// Base URL of a local Ollama instance.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Where the generation service lives and which model to ask for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GenerationConfig {
    /// Service base URL, without the `/api/generate` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
}

impl GenerationConfig {
    /// Configuration for the given base URL with the default model.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_owned(),
            model: default_model(),
        }
    }

    /// Set the model name.
    #[must_use]
    pub fn with_model(mut self, model: &str) -> Self {
        model.clone_into(&mut self.model);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}
