use std::sync::Arc;
use crate::entities::player_entity as players;
use crate::error::{AppError, AppResult};
use crate::models::{
    json_string_array, DeletePlayerRequest, PlayerResponse, UpsertPlayerRequest,
};
use crate::utils::{normalize_email, validate_email};
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

const LIST_LIMIT: u64 = 200;

#[derive(Clone)]
pub struct PlayerService {
    db: Arc<DatabaseConnection>,
}

impl PlayerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Creates or updates a player keyed by normalized email. Points here are
    /// an explicit admin override; the qualification flag never flips back to
    /// false through this path either.
    pub async fn upsert_player(&self, req: UpsertPlayerRequest) -> AppResult<PlayerResponse> {
        let email = req
            .effective_email()
            .map(normalize_email)
            .ok_or_else(|| AppError::ValidationError("playerEmail is required".to_string()))?;
        validate_email(&email)?;

        let existing = players::Entity::find()
            .filter(players::Column::PlayerEmail.eq(&email))
            .one(&*self.db)
            .await?;

        let player = match existing {
            Some(player) => {
                let mut courses = json_string_array(&player.courses_played);
                if let Some(course) = req.effective_course()
                    && !courses.iter().any(|c| c == course)
                {
                    courses.push(course.to_string());
                }
                let qualified = player.qualified_for_million
                    || req.qualified_for_million.unwrap_or(false);

                let mut active: players::ActiveModel = player.into();
                if let Some(name) = req.effective_name() {
                    active.player_name = Set(Some(name));
                }
                if let Some(phone) = req.effective_phone() {
                    active.player_phone = Set(Some(phone.to_string()));
                }
                if let Some(points) = req.points {
                    active.points = Set(points);
                }
                active.courses_played = Set(serde_json::json!(courses));
                active.qualified_for_million = Set(qualified);
                active.updated_at = Set(Some(Utc::now()));
                active.update(&*self.db).await?
            }
            None => {
                let courses: Vec<String> = req
                    .effective_course()
                    .map(|c| vec![c.to_string()])
                    .unwrap_or_default();
                players::ActiveModel {
                    player_email: Set(email.clone()),
                    player_name: Set(req.effective_name()),
                    player_phone: Set(req.effective_phone().map(str::to_string)),
                    points: Set(req.points.unwrap_or(0)),
                    courses_played: Set(serde_json::json!(courses)),
                    awards: Set(serde_json::json!([])),
                    qualified_for_million: Set(req.qualified_for_million.unwrap_or(false)),
                    created_at: Set(Some(Utc::now())),
                    updated_at: Set(Some(Utc::now())),
                    ..Default::default()
                }
                .insert(&*self.db)
                .await?
            }
        };

        info!("Player upserted: {email}");
        Ok(player.into())
    }

    pub async fn list_players(&self) -> AppResult<Vec<PlayerResponse>> {
        let rows = players::Entity::find()
            .order_by_desc(players::Column::Id)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(PlayerResponse::from).collect())
    }

    pub async fn get_player_by_email(&self, email: &str) -> AppResult<PlayerResponse> {
        let email = normalize_email(email);
        let player = players::Entity::find()
            .filter(players::Column::PlayerEmail.eq(&email))
            .one(&*self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {email} not found")))?;
        Ok(player.into())
    }

    pub async fn delete_player(&self, req: DeletePlayerRequest) -> AppResult<()> {
        let deleted = if let Some(id) = req.id {
            players::Entity::delete_by_id(id).exec(&*self.db).await?
        } else if let Some(email) = req.email.as_deref() {
            let email = normalize_email(email);
            players::Entity::delete_many()
                .filter(players::Column::PlayerEmail.eq(email))
                .exec(&*self.db)
                .await?
        } else {
            return Err(AppError::ValidationError(
                "id or email is required".to_string(),
            ));
        };

        if deleted.rows_affected == 0 {
            return Err(AppError::NotFound("Player not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn qualified_player() -> players::Model {
        players::Model {
            id: 7,
            player_email: "jane@x.com".to_string(),
            player_name: Some("Jane Doe".to_string()),
            player_phone: None,
            points: 800,
            courses_played: serde_json::json!(["wentworth-gc"]),
            awards: serde_json::json!(["hole_in_one"]),
            qualified_for_million: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn upsert_never_lowers_qualification() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // lookup hit, then the update returns the row
            .append_query_results([vec![qualified_player()]])
            .append_query_results([vec![qualified_player()]])
            .into_connection();
        let db = Arc::new(db);
        let service = PlayerService::new(db.clone());

        service
            .upsert_player(UpsertPlayerRequest {
                player_email: Some("jane@x.com".to_string()),
                qualified_for_million: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        // The update writes true regardless of the requested false.
        drop(service);
        let db = Arc::into_inner(db).unwrap();
        let log = format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"");
        assert!(log.contains(r#"UPDATE "players""#));
        assert!(log.contains("Bool(Some(true))"));
        assert!(!log.contains("Bool(Some(false))"));
    }

    #[tokio::test]
    async fn upsert_requires_a_valid_email() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = PlayerService::new(db.clone());

        let missing = service.upsert_player(UpsertPlayerRequest::default()).await;
        assert!(matches!(missing, Err(AppError::ValidationError(_))));

        let malformed = service
            .upsert_player(UpsertPlayerRequest {
                email: Some("not-an-email".to_string()),
                ..Default::default()
            })
            .await;
        assert!(matches!(malformed, Err(AppError::ValidationError(_))));

        drop(service);
        let db = Arc::into_inner(db).unwrap();
        assert!(db.into_transaction_log().is_empty());
    }
}
