use crate::models::SendEmailRequest;
use crate::services::NotificationService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Send an email
#[utoipa::path(
    post,
    path = "/api/v1/notifications/email",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Email sent"),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Mail provider error")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn send_email(
    notification_service: web::Data<NotificationService>,
    req: web::Json<SendEmailRequest>,
) -> Result<HttpResponse> {
    match notification_service.send_email(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Notification history
#[utoipa::path(
    get,
    path = "/api/v1/notifications",
    responses(
        (status = 200, description = "Notifications"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "notifications",
    security(("bearer_auth" = []))
)]
pub async fn list_notifications(
    notification_service: web::Data<NotificationService>,
) -> Result<HttpResponse> {
    match notification_service.list_notifications().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn notification_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notifications")
            .route("", web::get().to(list_notifications))
            .route("/email", web::post().to(send_email)),
    );
}
