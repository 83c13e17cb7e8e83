use crate::models::{
    CompactPlayerResponse, DeletePlayerRequest, PlayerQuery, UpsertPlayerRequest,
};
use crate::services::PlayerService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Create or update a player
///
/// Public registration endpoint keyed by email. Re-posting the same email
/// updates the existing row.
#[utoipa::path(
    post,
    path = "/api/v1/players",
    request_body = UpsertPlayerRequest,
    responses(
        (status = 200, description = "Player saved"),
        (status = 400, description = "Validation error")
    ),
    tag = "players"
)]
pub async fn upsert_player(
    player_service: web::Data<PlayerService>,
    req: web::Json<UpsertPlayerRequest>,
) -> Result<HttpResponse> {
    match player_service.upsert_player(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// List players
///
/// Newest first. `compact=true` trims the rows to the leaderboard fields.
#[utoipa::path(
    get,
    path = "/api/v1/players",
    params(("compact" = Option<bool>, Query, description = "Return leaderboard fields only")),
    responses(
        (status = 200, description = "Players"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "players",
    security(("bearer_auth" = []))
)]
pub async fn list_players(
    player_service: web::Data<PlayerService>,
    query: web::Query<PlayerQuery>,
) -> Result<HttpResponse> {
    match player_service.list_players().await {
        Ok(players) => {
            if query.compact.unwrap_or(false) {
                let compact: Vec<CompactPlayerResponse> =
                    players.into_iter().map(CompactPlayerResponse::from).collect();
                Ok(HttpResponse::Ok().json(json!({
                    "success": true,
                    "data": compact
                })))
            } else {
                Ok(HttpResponse::Ok().json(json!({
                    "success": true,
                    "data": players
                })))
            }
        }
        Err(e) => Ok(e.error_response()),
    }
}

/// Get a player by email
#[utoipa::path(
    get,
    path = "/api/v1/players/{email}",
    params(("email" = String, Path, description = "Player email")),
    responses(
        (status = 200, description = "Player"),
        (status = 404, description = "Not found")
    ),
    tag = "players",
    security(("bearer_auth" = []))
)]
pub async fn get_player(
    player_service: web::Data<PlayerService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match player_service.get_player_by_email(&path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Delete a player
#[utoipa::path(
    delete,
    path = "/api/v1/players",
    request_body = DeletePlayerRequest,
    responses(
        (status = 200, description = "Player deleted"),
        (status = 404, description = "Not found")
    ),
    tag = "players",
    security(("bearer_auth" = []))
)]
pub async fn delete_player(
    player_service: web::Data<PlayerService>,
    req: web::Json<DeletePlayerRequest>,
) -> Result<HttpResponse> {
    match player_service.delete_player(req.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Player deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn player_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/players")
            .route("", web::post().to(upsert_player))
            .route("", web::get().to(list_players))
            .route("", web::delete().to(delete_player))
            .route("/{email}", web::get().to(get_player)),
    );
}
