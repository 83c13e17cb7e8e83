use crate::entities::course_entity as courses;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[schema(example = "Wentworth Golf Club")]
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub golf_pro: Option<String>,
    pub manager: Option<String>,
    pub hole_number: Option<i32>,
    pub yardage: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub description: Option<String>,
    pub golf_pro: Option<String>,
    pub manager: Option<String>,
    pub hole_number: Option<i32>,
    pub yardage: Option<i32>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id,
            name: course.name,
            address: course.address,
            city: course.city,
            description: course.description,
            golf_pro: course.golf_pro,
            manager: course.manager,
            hole_number: course.hole_number,
            yardage: course.yardage,
            phone: course.phone,
            email: course.email,
            lat: course.lat,
            lng: course.lng,
            created_at: course.created_at,
        }
    }
}
