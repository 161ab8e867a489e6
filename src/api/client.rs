//! Knowledge Verificator HTTP client.
//!
//! Thin reqwest wrapper over the service endpoints. Every response is
//! wrapped in the service's `{data, message}` envelope; parsing is kept
//! in pure functions for testability.

use std::time::Duration;

use serde_json::Value;

use super::config::ApiConfig;
use super::types::{ApiError, GeneratedQuestion, Material, QgApi};

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client for the configured service.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    /// Build a client from `API_URL` and the timeout environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ApiConfig::from_env())
    }

    /// Return the configured service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// List all learning materials.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, status, envelope, or parse
    /// failure.
    pub async fn list_materials(&self) -> Result<Vec<Material>, ApiError> {
        let text = self.read(self.http.get(format!("{}/materials", self.base_url))).await?;
        parse_materials_response(&text)
    }

    /// Fetch one learning material by id, optionally narrowed by a query.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, status, envelope, or parse
    /// failure.
    pub async fn get_material(&self, id: i64, query: Option<&str>) -> Result<Material, ApiError> {
        let mut request = self.http.get(format!("{}/materials/{id}", self.base_url));
        if let Some(q) = query {
            request = request.query(&[("q", q)]);
        }
        let text = self.read(request).await?;
        parse_material_response(&text)
    }

    /// Delete a learning material by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport, status, or envelope failure.
    pub async fn delete_material(&self, id: i64) -> Result<(), ApiError> {
        let text = self
            .read(self.http.delete(format!("{}/materials/{id}", self.base_url)))
            .await?;
        parse_envelope(&text).map(|_| ())
    }

    /// Send the request, enforce a success status, and return the raw body.
    async fn read(&self, request: reqwest::RequestBuilder) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(ApiError::Response { status, body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl QgApi for HttpApi {
    async fn generate_question(&self, context: &str) -> Result<GeneratedQuestion, ApiError> {
        let body = GenerateRequest { context };
        let text = self
            .read(self.http.post(format!("{}/generate_question", self.base_url)).json(&body))
            .await?;
        parse_generate_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
struct GenerateRequest<'a> {
    context: &'a str,
}

/// Service response envelope. `message` is `Success` or `Failure`;
/// older deployments omit it, so it is optional on decode.
#[derive(serde::Deserialize)]
struct Envelope {
    data: Value,
    #[serde(default)]
    message: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Decode the envelope and unwrap `data`, mapping a `Failure` message to
/// [`ApiError::Service`].
fn parse_envelope(json: &str) -> Result<Value, ApiError> {
    let envelope: Envelope = serde_json::from_str(json).map_err(|e| ApiError::Parse(e.to_string()))?;
    if envelope.message.as_deref() == Some("Failure") {
        let detail = match envelope.data {
            Value::String(s) => s,
            other => other.to_string(),
        };
        return Err(ApiError::Service(detail));
    }
    Ok(envelope.data)
}

fn parse_generate_response(json: &str) -> Result<GeneratedQuestion, ApiError> {
    let data = parse_envelope(json)?;
    serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string()))
}

fn parse_material_response(json: &str) -> Result<Material, ApiError> {
    let data = parse_envelope(json)?;
    serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string()))
}

fn parse_materials_response(json: &str) -> Result<Vec<Material>, ApiError> {
    let data = parse_envelope(json)?;
    serde_json::from_value(data).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
