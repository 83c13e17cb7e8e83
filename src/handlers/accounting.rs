use crate::models::CreateTransactionRequest;
use crate::services::AccountingService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Accounting summary
///
/// Revenue, expenses and net profit over completed transactions, with the
/// recent transaction list attached.
#[utoipa::path(
    get,
    path = "/api/v1/accounting/summary",
    responses(
        (status = 200, description = "Summary"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "accounting",
    security(("bearer_auth" = []))
)]
pub async fn accounting_summary(
    accounting_service: web::Data<AccountingService>,
) -> Result<HttpResponse> {
    match accounting_service.summary().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// List transactions
///
/// All statuses, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/accounting/transactions",
    responses(
        (status = 200, description = "Transactions"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "accounting",
    security(("bearer_auth" = []))
)]
pub async fn list_transactions(
    accounting_service: web::Data<AccountingService>,
) -> Result<HttpResponse> {
    match accounting_service.list_transactions().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Record a transaction
#[utoipa::path(
    post,
    path = "/api/v1/accounting/transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Transaction recorded"),
        (status = 400, description = "Validation error")
    ),
    tag = "accounting",
    security(("bearer_auth" = []))
)]
pub async fn create_transaction(
    accounting_service: web::Data<AccountingService>,
    req: web::Json<CreateTransactionRequest>,
) -> Result<HttpResponse> {
    match accounting_service.create_transaction(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn accounting_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounting")
            .route("/summary", web::get().to(accounting_summary))
            .route("/transactions", web::get().to(list_transactions))
            .route("/transactions", web::post().to(create_transaction)),
    );
}
