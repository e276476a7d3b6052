/// Subject model and database operations
///
/// Subjects are referenced by attendance records and never mutated through
/// the API; they exist so attendance rows have something to point at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// A taught subject
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Unique subject ID
    pub id: i64,

    /// Subject name, e.g. "Mathematics"
    pub name: String,

    /// When the subject was created
    pub created_at: DateTime<Utc>,
}

impl Subject {
    /// Creates a new subject
    pub async fn create(pool: &PgPool, name: &str) -> Result<Self, sqlx::Error> {
        let subject = sqlx::query_as::<_, Subject>(
            r#"
            INSERT INTO subjects (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(subject)
    }

    /// Finds a subject by ID, returning `None` if no such subject exists
    pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        let subject = sqlx::query_as::<_, Subject>(
            r#"
            SELECT id, name, created_at
            FROM subjects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(subject)
    }
}
