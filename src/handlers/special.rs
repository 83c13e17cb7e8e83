use crate::models::CreateSpecialRequest;
use crate::services::SpecialService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Create a special
#[utoipa::path(
    post,
    path = "/api/v1/specials",
    request_body = CreateSpecialRequest,
    responses(
        (status = 200, description = "Special created"),
        (status = 400, description = "Validation error")
    ),
    tag = "specials",
    security(("bearer_auth" = []))
)]
pub async fn create_special(
    special_service: web::Data<SpecialService>,
    req: web::Json<CreateSpecialRequest>,
) -> Result<HttpResponse> {
    match special_service.create_special(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// List specials
#[utoipa::path(
    get,
    path = "/api/v1/specials",
    responses(
        (status = 200, description = "Specials"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "specials",
    security(("bearer_auth" = []))
)]
pub async fn list_specials(special_service: web::Data<SpecialService>) -> Result<HttpResponse> {
    match special_service.list_specials().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn special_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/specials")
            .route("", web::post().to(create_special))
            .route("", web::get().to(list_specials)),
    );
}
