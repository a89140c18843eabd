//! Devotional persistence — pluggable, trait-based store.
//!
//! `AppState` holds an `Arc<dyn DevotionalStore>`: `PgDevotionalStore` when a
//! database is configured, `InMemoryStore` otherwise.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::devotional::{DevotionalRow, NewDevotional};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create-and-read access to stored devotionals. There is no update or delete.
#[async_trait]
pub trait DevotionalStore: Send + Sync {
    /// Stores a new devotional under a fresh UUID and returns the stored row.
    async fn create(&self, new: NewDevotional) -> Result<DevotionalRow, StoreError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<DevotionalRow>, StoreError>;
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryStore {
    rows: RwLock<HashMap<Uuid, DevotionalRow>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DevotionalStore for InMemoryStore {
    async fn create(&self, new: NewDevotional) -> Result<DevotionalRow, StoreError> {
        let NewDevotional {
            content,
            theme,
            audience,
            mood,
        } = new;

        let row = DevotionalRow {
            id: Uuid::new_v4(),
            title: content.title,
            intro: content.intro,
            scripture: content.scripture,
            reflection: content.reflection,
            prayer: content.prayer,
            challenge: content.challenge,
            theme,
            audience,
            mood,
            created_at: Utc::now(),
        };

        self.rows.write().await.insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<DevotionalRow>, StoreError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }
}
