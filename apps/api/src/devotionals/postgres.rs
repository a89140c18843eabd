use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::devotionals::store::{DevotionalStore, StoreError};
use crate::models::devotional::{DevotionalRow, NewDevotional};

/// PostgreSQL-backed store over the `devotionals` table.
#[derive(Clone)]
pub struct PgDevotionalStore {
    pool: PgPool,
}

impl PgDevotionalStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DevotionalStore for PgDevotionalStore {
    async fn create(&self, new: NewDevotional) -> Result<DevotionalRow, StoreError> {
        let NewDevotional {
            content,
            theme,
            audience,
            mood,
        } = new;

        // Insert-only: rows are never updated.
        let row = sqlx::query_as::<_, DevotionalRow>(
            r#"
            INSERT INTO devotionals
                (id, title, intro, scripture, reflection, prayer, challenge, theme, audience, mood)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(content.title)
        .bind(content.intro)
        .bind(content.scripture)
        .bind(content.reflection)
        .bind(content.prayer)
        .bind(content.challenge)
        .bind(theme)
        .bind(audience)
        .bind(mood)
        .fetch_one(&self.pool)
        .await?;

        debug!("Stored devotional {}", row.id);
        Ok(row)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<DevotionalRow>, StoreError> {
        let row = sqlx::query_as::<_, DevotionalRow>("SELECT * FROM devotionals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
