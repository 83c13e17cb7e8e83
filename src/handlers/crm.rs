use crate::models::CreateCustomerRequest;
use crate::services::CustomerService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Add a customer
#[utoipa::path(
    post,
    path = "/api/v1/crm/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 200, description = "Customer saved"),
        (status = 400, description = "Validation error")
    ),
    tag = "crm",
    security(("bearer_auth" = []))
)]
pub async fn create_customer(
    customer_service: web::Data<CustomerService>,
    req: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse> {
    match customer_service.create_customer(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// List customers
#[utoipa::path(
    get,
    path = "/api/v1/crm/customers",
    responses(
        (status = 200, description = "Customers"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "crm",
    security(("bearer_auth" = []))
)]
pub async fn list_customers(customer_service: web::Data<CustomerService>) -> Result<HttpResponse> {
    match customer_service.list_customers().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn crm_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/crm")
            .route("/customers", web::post().to(create_customer))
            .route("/customers", web::get().to(list_customers)),
    );
}
