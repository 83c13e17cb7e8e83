use crate::entities::event_entity as events;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Events are schemaless: the whole body lands in `payload`, with an
/// optional `eventType` lifted out for filtering.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordEventRequest {
    pub event_type: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: i64,
    pub event_type: Option<String>,
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<events::Model> for EventResponse {
    fn from(e: events::Model) -> Self {
        Self {
            id: e.id,
            event_type: e.event_type,
            payload: e.payload,
            created_at: e.created_at,
        }
    }
}
