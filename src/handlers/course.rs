use crate::models::CreateCourseRequest;
use crate::services::CourseService;
use actix_web::{web, HttpResponse, ResponseError, Result};
use serde_json::json;

/// Add a course
///
/// Idempotent on name.
#[utoipa::path(
    post,
    path = "/api/v1/courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 200, description = "Course saved"),
        (status = 400, description = "Validation error")
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn create_course(
    course_service: web::Data<CourseService>,
    req: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse> {
    match course_service.create_course(req.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

/// List courses
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    responses(
        (status = 200, description = "Courses"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "courses",
    security(("bearer_auth" = []))
)]
pub async fn list_courses(course_service: web::Data<CourseService>) -> Result<HttpResponse> {
    match course_service.list_courses().await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn course_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/courses")
            .route("", web::post().to(create_course))
            .route("", web::get().to(list_courses)),
    );
}
