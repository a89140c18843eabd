//! Devotional composition — generate, parse, and (best effort) save in one call.
//!
//! Flow: prompt_for → LLM generate → extract text → parse_devotional →
//!       store.create (bounded, failures swallowed) → response.
//!
//! A failed save never fails the request; it only leaves `id` empty, which
//! means the devotional cannot be shared by link.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::Theme;
use crate::devotionals::store::DevotionalStore;
use crate::errors::AppError;
use crate::generation::parser::{parse_devotional, DevotionalContent};
use crate::generation::prompts::prompt_for;
use crate::generation::validation::GenerationRequest;
use crate::llm_client::{GenerateContentResponse, LlmClient};
use crate::models::devotional::NewDevotional;

/// Upper bound on the save step so a slow store cannot hold the response.
pub const SAVE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Serialize)]
pub struct DevotionalMetadata {
    pub theme: Theme,
    pub audience: Option<String>,
    pub mood: Option<String>,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposedDevotional {
    pub devotional: DevotionalContent,
    pub metadata: DevotionalMetadata,
    /// Present only when the devotional was stored and can be shared by link.
    pub id: Option<Uuid>,
}

pub async fn compose_devotional(
    llm: &LlmClient,
    store: &dyn DevotionalStore,
    request: GenerationRequest,
) -> Result<ComposedDevotional, AppError> {
    let prompt = prompt_for(&request);
    let raw = llm.generate_content(&prompt).await?;

    // An empty pick ("General", "Neutral") is stored and reported as no qualifier.
    let request = GenerationRequest {
        audience: request.audience.filter(|a| !a.is_empty()),
        mood: request.mood.filter(|m| !m.is_empty()),
        ..request
    };

    let envelope: GenerateContentResponse = serde_json::from_value(raw).unwrap_or_default();
    let text = envelope.text().ok_or(AppError::EmptyGeneration)?;

    let devotional = parse_devotional(text);
    info!(
        "Composed devotional for theme {} (complete: {})",
        request.theme,
        devotional.is_complete()
    );

    let id = save_best_effort(store, &devotional, &request).await;

    Ok(ComposedDevotional {
        devotional,
        metadata: DevotionalMetadata {
            theme: request.theme,
            audience: request.audience,
            mood: request.mood,
            generated_at: Utc::now(),
        },
        id,
    })
}

async fn save_best_effort(
    store: &dyn DevotionalStore,
    devotional: &DevotionalContent,
    request: &GenerationRequest,
) -> Option<Uuid> {
    if !devotional.is_complete() {
        debug!("Skipping save: parsed devotional has empty sections");
        return None;
    }

    let new = NewDevotional {
        content: devotional.clone(),
        theme: request.theme.as_str().to_string(),
        audience: request.audience.clone(),
        mood: request.mood.clone(),
    };

    match tokio::time::timeout(SAVE_TIMEOUT, store.create(new)).await {
        Ok(Ok(row)) => Some(row.id),
        Ok(Err(e)) => {
            warn!("Could not save composed devotional: {e}");
            None
        }
        Err(_) => {
            warn!("Saving composed devotional timed out after {SAVE_TIMEOUT:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devotionals::store::{InMemoryStore, StoreError};
    use crate::models::devotional::DevotionalRow;
    use async_trait::async_trait;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FULL_TEXT: &str = "Concise Title (3-6 words): **Steady Hope**\n\
        Introductory Thought: Hope anchors us.\n\
        Scripture: Romans 15:13 - May the God of hope fill you.\n\
        Reflection: Hope is *active*.\n\
        Prayer: Lord, steady us. Amen.\n\
        Today's Challenge: Encourage one person.";

    struct FailingStore;

    #[async_trait]
    impl DevotionalStore for FailingStore {
        async fn create(&self, _new: NewDevotional) -> Result<DevotionalRow, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn get_by_id(&self, _id: Uuid) -> Result<Option<DevotionalRow>, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    async fn llm_returning(text: &str) -> (MockServer, LlmClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [ { "content": { "parts": [ { "text": text } ] } } ]
            })))
            .mount(&server)
            .await;
        let llm = LlmClient::new(Some("k".to_string()), server.uri()).unwrap();
        (server, llm)
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            theme: Theme::Hope,
            audience: Some("Youth".to_string()),
            mood: None,
        }
    }

    #[tokio::test]
    async fn test_compose_parses_and_saves() {
        let (_server, llm) = llm_returning(FULL_TEXT).await;
        let store = InMemoryStore::new();

        let composed = compose_devotional(&llm, &store, request()).await.unwrap();

        assert_eq!(composed.devotional.title, "Steady Hope");
        assert_eq!(composed.devotional.reflection, "Hope is active.");
        assert_eq!(composed.metadata.theme, Theme::Hope);
        assert_eq!(composed.metadata.audience.as_deref(), Some("Youth"));

        let id = composed.id.expect("saved");
        let stored = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.content(), composed.devotional);
        assert_eq!(stored.theme, "Hope");
    }

    #[tokio::test]
    async fn test_save_failure_does_not_fail_compose() {
        let (_server, llm) = llm_returning(FULL_TEXT).await;

        let composed = compose_devotional(&llm, &FailingStore, request()).await.unwrap();

        assert_eq!(composed.devotional.prayer, "Lord, steady us. Amen.");
        assert_eq!(composed.id, None);
    }

    #[tokio::test]
    async fn test_incomplete_parse_is_returned_but_not_saved() {
        let (_server, llm) = llm_returning("Concise Title (3-6 words): Only a title").await;
        let store = InMemoryStore::new();

        let composed = compose_devotional(&llm, &store, request()).await.unwrap();

        assert_eq!(composed.devotional.title, "Only a title");
        assert_eq!(composed.devotional.intro, "");
        assert_eq!(composed.id, None);
    }

    #[tokio::test]
    async fn test_envelope_without_text_is_empty_generation() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;
        let llm = LlmClient::new(Some("k".to_string()), server.uri()).unwrap();

        let err = compose_devotional(&llm, &InMemoryStore::new(), request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyGeneration));
    }

    #[tokio::test]
    async fn test_empty_qualifiers_are_stored_as_null() {
        let (_server, llm) = llm_returning(FULL_TEXT).await;
        let store = InMemoryStore::new();
        let request = GenerationRequest {
            theme: Theme::Hope,
            audience: Some(String::new()),
            mood: Some(String::new()),
        };

        let composed = compose_devotional(&llm, &store, request).await.unwrap();
        assert_eq!(composed.metadata.audience, None);
        assert_eq!(composed.metadata.mood, None);

        let stored = store.get_by_id(composed.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(stored.audience, None);
        assert_eq!(stored.mood, None);
    }

    #[tokio::test]
    async fn test_metadata_serializes_generated_at_in_camel_case() {
        let (_server, llm) = llm_returning(FULL_TEXT).await;
        let composed = compose_devotional(&llm, &InMemoryStore::new(), request())
            .await
            .unwrap();
        let value = serde_json::to_value(&composed).unwrap();
        assert!(value["metadata"]["generatedAt"].is_string());
        assert_eq!(value["metadata"]["theme"], "Hope");
        assert_eq!(value["metadata"]["mood"], serde_json::Value::Null);
    }
}
