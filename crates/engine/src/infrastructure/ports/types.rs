//! Helper types for port operations.

use std::fmt;

use chrono::{DateTime, Utc};
use dugout_domain::DomainEvent;
use serde::{Deserialize, Serialize};

use super::error::RepoError;

/// Stream name for one aggregate instance, e.g. `game-<uuid>`.
pub fn stream_id(aggregate_type: &str, id: impl fmt::Display) -> String {
    format!("{}-{}", aggregate_type, id)
}

/// Events bound for one stream, part of a multi-stream append.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamAppend {
    pub stream_id: String,
    pub aggregate_type: String,
    pub events: Vec<DomainEvent>,
    pub expected_version: Option<u64>,
}

impl StreamAppend {
    pub fn new(
        stream_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        events: Vec<DomainEvent>,
        expected_version: Option<u64>,
    ) -> Self {
        Self {
            stream_id: stream_id.into(),
            aggregate_type: aggregate_type.into(),
            events,
            expected_version,
        }
    }
}

/// An event as persisted in a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent {
    pub stream_id: String,
    pub aggregate_type: String,
    /// 1-based position in the stream
    pub version: u64,
    pub event_type: String,
    pub payload: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
}

impl StoredEvent {
    /// Serialize a domain event at `version` of `stream_id`.
    pub fn new(
        stream_id: &str,
        aggregate_type: &str,
        version: u64,
        event: &DomainEvent,
        recorded_at: DateTime<Utc>,
    ) -> Result<Self, RepoError> {
        let payload = serde_json::to_value(event).map_err(RepoError::serialization)?;
        Ok(Self {
            stream_id: stream_id.to_string(),
            aggregate_type: aggregate_type.to_string(),
            version,
            event_type: event.event_type().to_string(),
            payload,
            recorded_at,
        })
    }

    /// Deserialize the payload back into a domain event.
    pub fn decode(&self) -> Result<DomainEvent, RepoError> {
        serde_json::from_value(self.payload.clone()).map_err(RepoError::serialization)
    }
}
