//! Text-generation client for the Roster student service.
//!
//! Builds a natural-language prompt from a [`Student`] and relays it to a
//! remote text-generation service (Ollama-style `POST /api/generate`).
//! No retry, backoff, or streaming: one request, one response.
//!
//! The client is a standalone capability. None of the student HTTP
//! handlers call it.
//!
//! [`Student`]: roster_types::Student

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;

pub use client::{GenerateRequest, GenerateResponse, GenerationClient};
pub use config::GenerationConfig;
pub use error::GenerationError;
pub use prompt::PromptBuilder;
