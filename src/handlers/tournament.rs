use crate::models::SaveTournamentRequest;
use crate::services::TournamentService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Current tournament
///
/// Returns the most recently saved tournament, or null when none exists.
#[utoipa::path(
    get,
    path = "/api/v1/tournaments",
    responses(
        (status = 200, description = "Current tournament"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "tournaments",
    security(("bearer_auth" = []))
)]
pub async fn latest_tournament(
    tournament_service: web::Data<TournamentService>,
) -> Result<HttpResponse> {
    match tournament_service.latest().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Save a tournament
///
/// With an `id` updates that row, without one inserts a new tournament.
#[utoipa::path(
    post,
    path = "/api/v1/tournaments",
    request_body = SaveTournamentRequest,
    responses(
        (status = 200, description = "Tournament saved"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found")
    ),
    tag = "tournaments",
    security(("bearer_auth" = []))
)]
pub async fn save_tournament(
    tournament_service: web::Data<TournamentService>,
    req: web::Json<SaveTournamentRequest>,
) -> Result<HttpResponse> {
    match tournament_service.save(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn tournament_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tournaments")
            .route("", web::get().to(latest_tournament))
            .route("", web::post().to(save_tournament)),
    );
}
