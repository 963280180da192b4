//! SQLite-backed event store.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dugout_domain::DomainEvent;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

use crate::infrastructure::ports::{
    ClockPort, EventStore, RepoError, StoredEvent, StreamAppend,
};

/// SQLite implementation of [`EventStore`].
///
/// `(stream_id, version)` is the primary key, so two writers racing on the
/// same stream cannot both land the same version even without an expected
/// version check.
pub struct SqliteEventStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteEventStore {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("event_store", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS events (
                stream_id TEXT NOT NULL,
                version INTEGER NOT NULL,
                aggregate_type TEXT NOT NULL,
                event_type TEXT NOT NULL,
                payload TEXT NOT NULL,
                recorded_at TEXT NOT NULL,
                PRIMARY KEY (stream_id, version)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("event_store", e))?;

        Ok(Self { pool, clock })
    }

    fn row_to_event(row: &sqlx::sqlite::SqliteRow) -> Result<StoredEvent, RepoError> {
        let version: i64 = row.get("version");
        let payload: String = row.get("payload");
        let recorded_at: String = row.get("recorded_at");

        Ok(StoredEvent {
            stream_id: row.get("stream_id"),
            aggregate_type: row.get("aggregate_type"),
            version: version as u64,
            event_type: row.get("event_type"),
            payload: serde_json::from_str(&payload).map_err(RepoError::serialization)?,
            recorded_at: DateTime::parse_from_rfc3339(&recorded_at)
                .map_err(RepoError::serialization)?
                .with_timezone(&Utc),
        })
    }

    async fn current_version<'e, E>(executor: E, stream_id: &str) -> Result<u64, RepoError>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let version: i64 =
            sqlx::query("SELECT COALESCE(MAX(version), 0) AS version FROM events WHERE stream_id = ?")
                .bind(stream_id)
                .fetch_one(executor)
                .await
                .map_err(|e| RepoError::database("event_store", e))?
                .get("version");
        Ok(version as u64)
    }

    /// Check the expected version and insert events inside an open transaction.
    ///
    /// Nothing is committed here; the caller owns the transaction.
    async fn append_in_tx(
        tx: &mut Transaction<'_, Sqlite>,
        stream_id: &str,
        aggregate_type: &str,
        events: &[DomainEvent],
        expected_version: Option<u64>,
        recorded_at: DateTime<Utc>,
    ) -> Result<u64, RepoError> {
        let current = Self::current_version(&mut **tx, stream_id).await?;
        if let Some(expected) = expected_version {
            if expected != current {
                return Err(RepoError::version_conflict(stream_id, expected, current));
            }
        }

        for (event, version) in events.iter().zip(current + 1..) {
            let stored = StoredEvent::new(stream_id, aggregate_type, version, event, recorded_at)?;
            let inserted = sqlx::query(
                r#"
                INSERT INTO events (stream_id, version, aggregate_type, event_type, payload, recorded_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&stored.stream_id)
            .bind(stored.version as i64)
            .bind(&stored.aggregate_type)
            .bind(&stored.event_type)
            .bind(stored.payload.to_string())
            .bind(stored.recorded_at.to_rfc3339())
            .execute(&mut **tx)
            .await;

            match inserted {
                Ok(_) => {}
                Err(sqlx::Error::Database(ref db)) if db.is_unique_violation() => {
                    // Only the failed statement is undone, so the stream can be re-read.
                    let actual = Self::current_version(&mut **tx, stream_id).await?;
                    return Err(RepoError::version_conflict(
                        stream_id,
                        expected_version.unwrap_or(current),
                        actual,
                    ));
                }
                Err(other) => return Err(RepoError::database("event_store", other)),
            }
        }

        Ok(current + events.len() as u64)
    }
}

#[async_trait]
impl EventStore for SqliteEventStore {
    async fn append(
        &self,
        stream_id: &str,
        aggregate_type: &str,
        events: &[DomainEvent],
        expected_version: Option<u64>,
    ) -> Result<u64, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("event_store", e))?;

        let recorded_at = self.clock.now();
        let version = Self::append_in_tx(
            &mut tx,
            stream_id,
            aggregate_type,
            events,
            expected_version,
            recorded_at,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| RepoError::database("event_store", e))?;

        tracing::debug!(
            stream_id = %stream_id,
            appended = events.len(),
            version,
            "Events appended"
        );
        Ok(version)
    }

    async fn append_all(&self, batch: &[StreamAppend]) -> Result<Vec<u64>, RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("event_store", e))?;

        // An early return drops the transaction, which rolls back every stream.
        let recorded_at = self.clock.now();
        let mut versions = Vec::with_capacity(batch.len());
        for append in batch {
            let version = Self::append_in_tx(
                &mut tx,
                &append.stream_id,
                &append.aggregate_type,
                &append.events,
                append.expected_version,
                recorded_at,
            )
            .await?;
            versions.push(version);
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("event_store", e))?;

        for (append, version) in batch.iter().zip(&versions) {
            tracing::debug!(
                stream_id = %append.stream_id,
                appended = append.events.len(),
                version = *version,
                "Events appended"
            );
        }
        Ok(versions)
    }

    async fn get_events(
        &self,
        stream_id: &str,
        from_version: Option<u64>,
    ) -> Result<Vec<StoredEvent>, RepoError> {
        let rows = sqlx::query(
            r#"
            SELECT stream_id, version, aggregate_type, event_type, payload, recorded_at
            FROM events
            WHERE stream_id = ? AND version >= ?
            ORDER BY version
            "#,
        )
        .bind(stream_id)
        .bind(from_version.unwrap_or(1) as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepoError::database("event_store", e))?;

        rows.iter().map(Self::row_to_event).collect()
    }

    async fn stream_version(&self, stream_id: &str) -> Result<u64, RepoError> {
        Self::current_version(&self.pool, stream_id).await
    }
}
