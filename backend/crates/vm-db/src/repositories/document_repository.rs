//! Document repository over the shared `documents` table.
//!
//! Each repository instance is bound to one [`Collection`]. Bodies are
//! stored as JSON text without `_id`; the key lives in the `id` column.
//!
//! ## Updates
//!
//! `update_fields` is a read-merge-write inside a `BEGIN IMMEDIATE`
//! transaction. The write lock is taken before the read, so a WAL reader
//! snapshot never has to be upgraded and concurrent updates wait on
//! `busy_timeout` instead of failing. `increment_field` is a single
//! `UPDATE` evaluated by SQLite and never loses concurrent increments.

use crate::{Collection, DbError, Result as DbErrorResult, StoredDocument};

use vm_core::{Document, DocumentId};

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use serde_json::{Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};

pub struct DocumentRepository {
    pool: SqlitePool,
    collection: Collection,
}

impl DocumentRepository {
    pub fn new(pool: SqlitePool, collection: Collection) -> Self {
        Self { pool, collection }
    }

    /// Every document in the collection, oldest first
    pub async fn find_all(&self) -> DbErrorResult<Vec<StoredDocument>> {
        let rows = sqlx::query(
            r#"
                SELECT id, body FROM documents
                WHERE collection = ?
                ORDER BY created_at, rowid
            "#,
        )
        .bind(self.collection.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(|row| self.decode_row(row)).collect()
    }

    pub async fn find_by_id(&self, id: DocumentId) -> DbErrorResult<Option<StoredDocument>> {
        Self::fetch_by_id(&self.pool, self.collection, id)
            .await?
            .map(|row| self.decode_row(&row))
            .transpose()
    }

    /// First document whose top-level `field` equals the string `value`
    pub async fn find_by_field(
        &self,
        field: &str,
        value: &str,
    ) -> DbErrorResult<Option<StoredDocument>> {
        let row = sqlx::query(
            r#"
                SELECT id, body FROM documents
                WHERE collection = ? AND json_extract(body, ?) = ?
                ORDER BY created_at, rowid
                LIMIT 1
            "#,
        )
        .bind(self.collection.as_str())
        .bind(json_path(field))
        .bind(value)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| self.decode_row(&row)).transpose()
    }

    pub async fn insert(&self, body: Document) -> DbErrorResult<StoredDocument> {
        let id = DocumentId::new();
        self.insert_row(&self.pool, id, &body).await?;

        debug!("Inserted {}/{}", self.collection, id);
        Ok(StoredDocument::new(id, body))
    }

    /// Insert all bodies in one transaction; returns ids in input order
    pub async fn insert_many(&self, bodies: &[Document]) -> DbErrorResult<Vec<DocumentId>> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(bodies.len());

        for body in bodies {
            let id = DocumentId::new();
            self.insert_row(&mut *tx, id, body).await?;
            ids.push(id);
        }

        tx.commit().await?;

        debug!("Inserted {} documents into {}", ids.len(), self.collection);
        Ok(ids)
    }

    /// Merge `fields` over the stored body at the top level.
    ///
    /// Returns `None` when no document has this id.
    pub async fn update_fields(
        &self,
        id: DocumentId,
        fields: Document,
    ) -> DbErrorResult<Option<StoredDocument>> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let Some(row) = Self::fetch_by_id(&mut *tx, self.collection, id).await? else {
            return Ok(None);
        };
        let mut stored = self.decode_row(&row)?;
        stored.body.extend(fields);

        let body_json = encode_body(&stored.body);
        sqlx::query(
            r#"
                UPDATE documents SET body = ?, updated_at = ?
                WHERE collection = ? AND id = ?
            "#,
        )
        .bind(body_json)
        .bind(Utc::now().timestamp())
        .bind(self.collection.as_str())
        .bind(id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(|e| self.map_write_error(e))?;

        tx.commit().await?;

        debug!("Updated {}/{}", self.collection, id);
        Ok(Some(stored))
    }

    /// Atomically add `amount` to a numeric top-level field.
    ///
    /// A missing field counts as 0. Returns whether the document exists.
    pub async fn increment_field(
        &self,
        id: DocumentId,
        field: &str,
        amount: &Number,
    ) -> DbErrorResult<bool> {
        let sql = r#"
            UPDATE documents
            SET body = json_set(body, ?, COALESCE(json_extract(body, ?), 0) + ?),
                updated_at = ?
            WHERE collection = ? AND id = ?
        "#;
        let path = json_path(field);
        let query = sqlx::query(sql).bind(path.clone()).bind(path);

        // Keep integer hours integral
        let query = match amount.as_i64() {
            Some(whole) => query.bind(whole),
            None => query.bind(amount.as_f64().unwrap_or(0.0)),
        };

        let result = query
            .bind(Utc::now().timestamp())
            .bind(self.collection.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns whether a document was removed
    pub async fn delete(&self, id: DocumentId) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(self.collection.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn fetch_by_id<'e, E>(
        executor: E,
        collection: Collection,
        id: DocumentId,
    ) -> DbErrorResult<Option<SqliteRow>>
    where
        E: SqliteExecutor<'e>,
    {
        let row = sqlx::query("SELECT id, body FROM documents WHERE collection = ? AND id = ?")
            .bind(collection.as_str())
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        Ok(row)
    }

    async fn insert_row<'e, E>(
        &self,
        executor: E,
        id: DocumentId,
        body: &Document,
    ) -> DbErrorResult<()>
    where
        E: SqliteExecutor<'e>,
    {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO documents (collection, id, body, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.collection.as_str())
        .bind(id.to_string())
        .bind(encode_body(body))
        .bind(now)
        .bind(now)
        .execute(executor)
        .await
        .map_err(|e| self.map_write_error(e))?;

        Ok(())
    }

    #[track_caller]
    fn map_write_error(&self, error: sqlx::Error) -> DbError {
        match &error {
            sqlx::Error::Database(db) if db.is_unique_violation() => DbError::UniqueViolation {
                collection: self.collection.as_str(),
                message: db.message().to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => DbError::from(error),
        }
    }

    #[track_caller]
    fn decode_row(&self, row: &SqliteRow) -> DbErrorResult<StoredDocument> {
        let id: String = row.try_get("id")?;
        let body: String = row.try_get("body")?;

        let corrupt = |message: String| DbError::CorruptDocument {
            collection: self.collection.as_str(),
            id: id.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let document_id = DocumentId::from_str(&id).map_err(|e| corrupt(e.to_string()))?;
        let document = match serde_json::from_str::<Value>(&body) {
            Ok(Value::Object(map)) => map,
            Ok(_) => return Err(corrupt("body is not a JSON object".to_string())),
            Err(e) => return Err(corrupt(e.to_string())),
        };

        Ok(StoredDocument::new(document_id, document))
    }
}

/// Top-level JSON path for a plain field name
fn json_path(field: &str) -> String {
    format!("$.{}", field)
}

fn encode_body(body: &Document) -> String {
    Value::Object(body.clone()).to_string()
}
