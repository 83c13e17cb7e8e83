use crate::models::CreatePaymentIntentRequest;
use crate::services::PaymentService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Create a payment intent
///
/// Public kiosk endpoint. Defaults to the single-round price when no amount
/// is given.
#[utoipa::path(
    post,
    path = "/api/v1/payments",
    request_body = CreatePaymentIntentRequest,
    responses(
        (status = 200, description = "Payment intent created"),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Payment provider error")
    ),
    tag = "payments"
)]
pub async fn create_payment_intent(
    payment_service: web::Data<PaymentService>,
    req: web::Json<CreatePaymentIntentRequest>,
) -> Result<HttpResponse> {
    match payment_service.create_payment_intent(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn payment_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/payments").route("", web::post().to(create_payment_intent)));
}
