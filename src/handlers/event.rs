use crate::models::RecordEventRequest;
use crate::services::EventService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Record an event
///
/// Schemaless capture; the whole body is stored as the payload.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    request_body = RecordEventRequest,
    responses(
        (status = 200, description = "Event recorded"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events",
    security(("bearer_auth" = []))
)]
pub async fn record_event(
    event_service: web::Data<EventService>,
    req: web::Json<RecordEventRequest>,
) -> Result<HttpResponse> {
    match event_service.record_event(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// List events
#[utoipa::path(
    get,
    path = "/api/v1/events",
    responses(
        (status = 200, description = "Events"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events",
    security(("bearer_auth" = []))
)]
pub async fn list_events(event_service: web::Data<EventService>) -> Result<HttpResponse> {
    match event_service.list_events().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn event_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .route("", web::post().to(record_event))
            .route("", web::get().to(list_events)),
    );
}
