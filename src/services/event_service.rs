use std::sync::Arc;
use crate::entities::event_entity as events;
use crate::error::AppResult;
use crate::models::{EventResponse, RecordEventRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

const LIST_LIMIT: u64 = 200;

#[derive(Clone)]
pub struct EventService {
    db: Arc<DatabaseConnection>,
}

impl EventService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn record_event(&self, req: RecordEventRequest) -> AppResult<EventResponse> {
        let event = events::ActiveModel {
            event_type: Set(req.event_type),
            payload: Set(req.payload),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(event.into())
    }

    pub async fn list_events(&self) -> AppResult<Vec<EventResponse>> {
        let rows = events::Entity::find()
            .order_by_desc(events::Column::CreatedAt)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(EventResponse::from).collect())
    }
}
