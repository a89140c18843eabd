use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::generation::parser::DevotionalContent;

/// A stored devotional. Write-once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DevotionalRow {
    pub id: Uuid,
    pub title: String,
    pub intro: String,
    pub scripture: String,
    pub reflection: String,
    pub prayer: String,
    pub challenge: String,
    pub theme: String,
    pub audience: Option<String>,
    pub mood: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DevotionalRow {
    pub fn content(&self) -> DevotionalContent {
        DevotionalContent {
            title: self.title.clone(),
            intro: self.intro.clone(),
            scripture: self.scripture.clone(),
            reflection: self.reflection.clone(),
            prayer: self.prayer.clone(),
            challenge: self.challenge.clone(),
        }
    }
}

/// Fields supplied when creating a devotional; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDevotional {
    pub content: DevotionalContent,
    pub theme: String,
    pub audience: Option<String>,
    pub mood: Option<String>,
}
