use crate::models::{ClaimQuery, DecideClaimRequest, SubmitClaimRequest};
use crate::services::ClaimService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Submit a claim
///
/// Public intake endpoint used by the on-course kiosk. Records the claim and
/// credits the player ledger atomically.
#[utoipa::path(
    post,
    path = "/api/v1/claims",
    request_body = SubmitClaimRequest,
    responses(
        (status = 201, description = "Claim recorded"),
        (status = 400, description = "Validation error")
    ),
    tag = "claims"
)]
pub async fn submit_claim(
    claim_service: web::Data<ClaimService>,
    req: web::Json<SubmitClaimRequest>,
) -> Result<HttpResponse> {
    match claim_service.submit_claim(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// List claims
///
/// Newest first, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/v1/claims",
    params(("status" = Option<String>, Query, description = "Filter by claim status")),
    responses(
        (status = 200, description = "Claims"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "claims",
    security(("bearer_auth" = []))
)]
pub async fn list_claims(
    claim_service: web::Data<ClaimService>,
    query: web::Query<ClaimQuery>,
) -> Result<HttpResponse> {
    match claim_service.list_claims(&query).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Get a claim
#[utoipa::path(
    get,
    path = "/api/v1/claims/{id}",
    params(("id" = i64, Path, description = "Claim id")),
    responses(
        (status = 200, description = "Claim"),
        (status = 404, description = "Not found")
    ),
    tag = "claims",
    security(("bearer_auth" = []))
)]
pub async fn get_claim(
    claim_service: web::Data<ClaimService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match claim_service.get_claim(path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Decide a claim
///
/// Marks a claim verified or rejected ("approved"/"denied" are accepted
/// aliases) and notifies the ops inbox when one is configured.
#[utoipa::path(
    patch,
    path = "/api/v1/claims/{id}",
    params(("id" = i64, Path, description = "Claim id")),
    request_body = DecideClaimRequest,
    responses(
        (status = 200, description = "Claim updated"),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Not found")
    ),
    tag = "claims",
    security(("bearer_auth" = []))
)]
pub async fn decide_claim(
    claim_service: web::Data<ClaimService>,
    path: web::Path<i64>,
    req: web::Json<DecideClaimRequest>,
) -> Result<HttpResponse> {
    match claim_service
        .decide_claim(path.into_inner(), req.into_inner())
        .await
    {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// Delete a claim
#[utoipa::path(
    delete,
    path = "/api/v1/claims/{id}",
    params(("id" = i64, Path, description = "Claim id")),
    responses(
        (status = 200, description = "Claim deleted"),
        (status = 404, description = "Not found")
    ),
    tag = "claims",
    security(("bearer_auth" = []))
)]
pub async fn delete_claim(
    claim_service: web::Data<ClaimService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match claim_service.delete_claim(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Claim deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn claim_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/claims")
            .route("", web::post().to(submit_claim))
            .route("", web::get().to(list_claims))
            .route("/{id}", web::get().to(get_claim))
            .route("/{id}", web::patch().to(decide_claim))
            .route("/{id}", web::delete().to(delete_claim)),
    );
}
