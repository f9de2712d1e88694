//! HTTP client for the text-generation service.
//!
//! Sends `{model, prompt}` to `{base_url}/api/generate` and returns the
//! `response` field of the reply. All communication goes over HTTP via
//! `reqwest`.

use roster_types::Student;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::prompt::PromptBuilder;

/// Path of the generate endpoint relative to the base URL.
const GENERATE_PATH: &str = "/api/generate";

/// Request body for the generate endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model to run.
    pub model: String,
    /// Prompt text.
    pub prompt: String,
}

/// Response body of the generate endpoint. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text.
    pub response: String,
}

/// Client for a remote text-generation service.
pub struct GenerationClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    prompts: PromptBuilder,
}

impl GenerationClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Template`] if the built-in prompt
    /// templates fail to load.
    pub fn new(config: &GenerationConfig) -> Result<Self, GenerationError> {
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            model: config.model.clone(),
            prompts: PromptBuilder::new()?,
        })
    }

    /// Create a client for `base_url` using the default model.
    ///
    /// # Errors
    ///
    /// See [`GenerationClient::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, GenerationError> {
        Self::new(&GenerationConfig::new(base_url))
    }

    /// Full URL of the generate endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{GENERATE_PATH}", self.base_url)
    }

    /// Model name sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Ask the service for a short summary of `student`.
    ///
    /// # Errors
    ///
    /// Propagates any template, network, status, or decode failure.
    pub async fn generate_student_summary(
        &self,
        student: &Student,
    ) -> Result<String, GenerationError> {
        let prompt = self.prompts.student_summary(student)?;
        self.generate(&prompt).await
    }

    /// Send a raw prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::Request`] if the call fails,
    /// [`GenerationError::Status`] on a non-success reply, and
    /// [`GenerationError::Decode`] if the body is not `{response: string}`.
    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.endpoint();
        let body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_owned(),
        };

        tracing::debug!(url = %url, model = %self.model, "sending generation request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(GenerationError::Request)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let parsed: GenerateResponse = response.json().await.map_err(GenerationError::Decode)?;

        Ok(parsed.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url() -> Result<(), GenerationError> {
        let client = GenerationClient::with_base_url("http://localhost:11434/")?;
        assert_eq!(client.endpoint(), "http://localhost:11434/api/generate");
        assert_eq!(client.model(), "llama2");
        Ok(())
    }

    #[test]
    fn configured_model_is_used() -> Result<(), GenerationError> {
        let config = GenerationConfig::default().with_model("mistral");
        let client = GenerationClient::new(&config)?;
        assert_eq!(client.model(), "mistral");
        Ok(())
    }

    #[test]
    fn request_body_shape() {
        let body = GenerateRequest {
            model: "llama2".to_owned(),
            prompt: "hi".to_owned(),
        };
        let json = serde_json::to_value(&body).unwrap_or_default();
        assert_eq!(json, serde_json::json!({"model": "llama2", "prompt": "hi"}));
    }

    #[test]
    fn response_ignores_extra_fields() {
        let parsed: Result<GenerateResponse, _> =
            serde_json::from_str(r#"{"model":"llama2","response":"ok","done":true}"#);
        assert_eq!(parsed.ok().map(|r| r.response), Some("ok".to_owned()));
    }
}
