//! API types — errors, response payloads, and the mockable trait.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by API client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request to the service failed in transport.
    #[error("API request failed: {0}")]
    Request(String),

    /// The service returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// The service envelope reported a failure.
    #[error("service reported failure: {0}")]
    Service(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Successful result of one question-generation exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    /// Generated question text.
    pub question: String,
    /// The answer the service considers correct.
    pub answer: String,
}

/// A learning material record served by the materials endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    pub title: String,
    /// Body paragraphs, in document order.
    pub paragraphs: Vec<String>,
    pub tags: Vec<String>,
}

// =============================================================================
// QG API TRAIT
// =============================================================================

/// Question-generation exchange. Enables mocking in tests.
#[async_trait::async_trait]
pub trait QgApi: Send + Sync {
    /// Ask the service to generate a question for `context`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails in transport, the
    /// service answers with a non-success status or a failure envelope,
    /// or the body cannot be parsed.
    async fn generate_question(&self, context: &str) -> Result<GeneratedQuestion, ApiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
