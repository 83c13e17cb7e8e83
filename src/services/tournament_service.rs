use std::sync::Arc;
use crate::entities::tournament_entity as tournaments;
use crate::error::{AppError, AppResult};
use crate::models::{SaveTournamentRequest, TournamentResponse};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};

#[derive(Clone)]
pub struct TournamentService {
    db: Arc<DatabaseConnection>,
}

impl TournamentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// The most recently saved tournament is the one the site displays.
    pub async fn latest(&self) -> AppResult<Option<TournamentResponse>> {
        let row = tournaments::Entity::find()
            .order_by_desc(tournaments::Column::Id)
            .one(&*self.db)
            .await?;
        Ok(row.map(TournamentResponse::from))
    }

    pub async fn save(&self, req: SaveTournamentRequest) -> AppResult<TournamentResponse> {
        if let Some(id) = req.id {
            let existing = tournaments::Entity::find_by_id(id)
                .one(&*self.db)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Tournament {id} not found")))?;

            let mut active: tournaments::ActiveModel = existing.into();
            if let Some(name) = req.name.filter(|n| !n.trim().is_empty()) {
                active.name = Set(name);
            }
            if let Some(date) = req.date {
                active.date = Set(Some(date));
            }
            if let Some(location) = req.location {
                active.location = Set(Some(location));
            }
            if let Some(registration) = req.registration {
                active.registration = Set(Some(registration));
            }
            active.updated_at = Set(Some(Utc::now()));
            return Ok(active.update(&*self.db).await?.into());
        }

        let name = req
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("name is required".to_string()))?
            .to_string();

        let tournament = tournaments::ActiveModel {
            name: Set(name),
            date: Set(req.date),
            location: Set(req.location),
            registration: Set(req.registration),
            updated_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(tournament.into())
    }
}
