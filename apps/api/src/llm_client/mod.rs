/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the generative API directly.
///
/// One request in, one call out: there is no retry and no caching. The call is
/// bounded by `REQUEST_TIMEOUT`.
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all generation calls.
pub const MODEL: &str = "gemini-2.0-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: Value },
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// A single-turn payload: one content block holding the prompt text.
    fn single_turn(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }
}

/// The subset of the `generateContent` response envelope we read.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the generated text: first candidate, first part.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

/// Thin wrapper over the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    api_base: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>, api_base: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .context("Failed to build HTTP client")?,
            api_key,
            api_base: api_base.into(),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/{MODEL}:generateContent", self.api_base)
    }

    /// Sends the prompt and returns the upstream JSON body untouched. A 2xx body
    /// that is not JSON comes back as a JSON string.
    ///
    /// Non-2xx responses become `LlmError::Api` carrying the upstream status and
    /// its body (as JSON when it parses, otherwise as a string).
    pub async fn generate_content(&self, prompt: &str) -> Result<Value, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let payload = GenerateContentRequest::single_turn(prompt);
        debug!("Sending generateContent request ({} prompt chars)", prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            warn!("Gemini API returned {status}");
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Could not read Gemini error body: {e}");
                    String::new()
                }
            };
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: json_or_string(text),
            });
        }

        let body = json_or_string(response.text().await?);
        debug!("Gemini call succeeded");

        Ok(body)
    }
}

/// Upstream bodies are relayed as JSON when they parse, otherwise as a JSON string.
fn json_or_string(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/models/gemini-2.0-flash:generateContent";

    fn client_for(server: &MockServer, key: Option<&str>) -> LlmClient {
        LlmClient::new(key.map(str::to_string), format!("{}/models", server.uri())).unwrap()
    }

    #[test]
    fn test_single_turn_payload_shape() {
        let payload = serde_json::to_value(GenerateContentRequest::single_turn("hi")).unwrap();
        assert_eq!(payload, json!({ "contents": [ { "parts": [ { "text": "hi" } ] } ] }));
    }

    #[test]
    fn test_response_text_reads_first_candidate_part() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "first" }, { "text": "second" } ] } },
                { "content": { "parts": [ { "text": "other" } ] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_response_text_missing_or_blank() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), None);

        let blocked: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [ { "finishReason": "SAFETY" } ]
        }))
        .unwrap();
        assert_eq!(blocked.text(), None);

        let blank: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [ { "content": { "parts": [ { "text": "  \n" } ] } } ]
        }))
        .unwrap();
        assert_eq!(blank.text(), None);
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .generate_content("prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_success_relays_body_unchanged() {
        let server = MockServer::start().await;
        let upstream = json!({
            "candidates": [ { "content": { "parts": [ { "text": "Concise Title (3-6 words): Hi" } ] } } ],
            "usageMetadata": { "totalTokenCount": 12 }
        });
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(json!({ "contents": [ { "parts": [ { "text": "the prompt" } ] } ] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server, Some("test-key"))
            .generate_content("the prompt")
            .await
            .unwrap();
        assert_eq!(body, upstream);
    }

    #[tokio::test]
    async fn test_error_status_and_json_payload_are_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(403)
                    .set_body_json(json!({ "error": { "code": 403, "message": "denied" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server, Some("k"))
            .generate_content("p")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body["error"]["message"], "denied");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_error_with_text_body_is_kept_as_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("k"))
            .generate_content("p")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, Value::String("unavailable".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_kept_as_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain"))
            .mount(&server)
            .await;

        let body = client_for(&server, Some("k"))
            .generate_content("p")
            .await
            .unwrap();
        assert_eq!(body, Value::String("plain".to_string()));
    }

    #[tokio::test]
    async fn test_empty_error_body_becomes_empty_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let err = client_for(&server, Some("k"))
            .generate_content("p")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, Value::String(String::new()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_errors_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server, Some("k")).generate_content("p").await;
        assert!(result.is_err());
    }
}
