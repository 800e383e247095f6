//! REST client for a hosted `generateContent`-style endpoint.
//!
//! [`TextGenerator`] is the seam the flows are written against; the only
//! production implementation is [`GeminiClient`], which speaks the Gemini
//! REST API over [`reqwest`]. Tests substitute a stub generator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::GenAiError;

/// Default base URL for the hosted generation API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model identifier used by all flows.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One part of a message: plain text or an inline image.
#[derive(Debug, Clone)]
pub enum Part {
    Text(String),
    /// An image as a `data:<mime>;base64,<payload>` URI.
    ImageDataUri(String),
}

/// A single conversation turn handed to the endpoint.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Message {
    /// A plain-text turn.
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            parts: vec![Part::Text(content.into())],
        }
    }
}

/// A complete generation request: optional system instruction, ordered
/// conversation contents, and whether the response must be JSON.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub system: Option<String>,
    pub messages: Vec<Message>,
    /// When set, the provider is asked for `application/json` output.
    pub json_output: bool,
}

/// The endpoint's reply: the first candidate's concatenated text.
#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub text: String,
}

/// The seam between prompt flows and the hosted endpoint.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one generation call. No retries, no streaming.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, GenAiError>;
}

// ---------------------------------------------------------------------------
// Wire format (Gemini REST API)
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    contents: Vec<WireContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<WireContentBare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<WireGenerationConfig>,
}

#[derive(Serialize)]
struct WireContent {
    role: &'static str,
    parts: Vec<WirePart>,
}

/// Content without a role (used for the system instruction).
#[derive(Serialize)]
struct WireContentBare {
    parts: Vec<WirePart>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum WirePart {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "inlineData")]
    InlineData(WireInlineData),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireInlineData {
    mime_type: String,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    candidates: Vec<WireCandidate>,
}

#[derive(Deserialize)]
struct WireCandidate {
    content: WireCandidateContent,
}

#[derive(Deserialize)]
struct WireCandidateContent {
    #[serde(default)]
    parts: Vec<WireResponsePart>,
}

#[derive(Deserialize)]
struct WireResponsePart {
    #[serde(default)]
    text: String,
}

/// Split a `data:<mime>;base64,<payload>` URI into `(mime_type, payload)`.
fn parse_data_uri(uri: &str) -> Result<(String, String), GenAiError> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| GenAiError::InvalidImage("expected a data: URI".into()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| GenAiError::InvalidImage("data URI has no payload".into()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| GenAiError::InvalidImage("data URI must be base64-encoded".into()))?;
    if mime.is_empty() {
        return Err(GenAiError::InvalidImage("data URI has no MIME type".into()));
    }
    Ok((mime.to_string(), payload.to_string()))
}

fn to_wire_part(part: &Part) -> Result<WirePart, GenAiError> {
    match part {
        Part::Text(text) => Ok(WirePart::Text(text.clone())),
        Part::ImageDataUri(uri) => {
            let (mime_type, data) = parse_data_uri(uri)?;
            Ok(WirePart::InlineData(WireInlineData { mime_type, data }))
        }
    }
}

// ---------------------------------------------------------------------------
// GeminiClient
// ---------------------------------------------------------------------------

/// HTTP client for the hosted generation API.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client for the production endpoint.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            model,
        }
    }

    /// Override the base URL (local mock servers in tests).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Model identifier sent with every request.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_body(&self, request: &GenerateRequest) -> Result<WireRequest, GenAiError> {
        let contents = request
            .messages
            .iter()
            .map(|m| {
                let parts = m
                    .parts
                    .iter()
                    .map(to_wire_part)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(WireContent {
                    role: match m.role {
                        Role::User => "user",
                        Role::Model => "model",
                    },
                    parts,
                })
            })
            .collect::<Result<Vec<_>, GenAiError>>()?;

        Ok(WireRequest {
            contents,
            system_instruction: request.system.as_ref().map(|s| WireContentBare {
                parts: vec![WirePart::Text(s.clone())],
            }),
            generation_config: request.json_output.then_some(WireGenerationConfig {
                response_mime_type: "application/json",
            }),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, GenAiError> {
        let body = self.build_body(&request)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let wire: WireResponse = response.json().await?;
        let text: String = wire
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(GenAiError::MalformedOutput(
                "response contained no candidate text".into(),
            ));
        }

        tracing::debug!(model = %self.model, chars = text.len(), "generation call completed");
        Ok(GenerateResponse { text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_data_uri() {
        let (mime, data) = parse_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(data, "aGVsbG8=");
    }

    #[test]
    fn rejects_non_data_uri() {
        let err = parse_data_uri("https://example.com/x.png").unwrap_err();
        assert!(matches!(err, GenAiError::InvalidImage(_)));
    }

    #[test]
    fn rejects_unencoded_data_uri() {
        let err = parse_data_uri("data:text/plain,hello").unwrap_err();
        assert!(matches!(err, GenAiError::InvalidImage(_)));
    }
}
