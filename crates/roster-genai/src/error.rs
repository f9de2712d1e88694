//! Error types for the generation client.
//!
//! Every failure is handed back to the caller unchanged; the client never
//! retries.

/// Errors that can occur while generating text.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The HTTP request could not be sent or the connection failed.
    #[error("generation request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("generation service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("generation response decode failed: {0}")]
    Decode(#[source] reqwest::Error),

    /// The prompt template failed to render.
    #[error("prompt template error: {0}")]
    Template(#[from] minijinja::Error),
}
