use std::sync::Arc;
use crate::entities::course_entity as courses;
use crate::error::{AppError, AppResult};
use crate::models::{CourseResponse, CreateCourseRequest};
use chrono::Utc;
use log::info;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

const LIST_LIMIT: u64 = 200;

#[derive(Clone)]
pub struct CourseService {
    db: Arc<DatabaseConnection>,
}

impl CourseService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Idempotent on name: re-adding an existing course returns the stored
    /// row instead of duplicating it.
    pub async fn create_course(&self, req: CreateCourseRequest) -> AppResult<CourseResponse> {
        let name = req
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("name is required".to_string()))?
            .to_string();

        if let Some(existing) = courses::Entity::find()
            .filter(courses::Column::Name.eq(&name))
            .one(&*self.db)
            .await?
        {
            return Ok(existing.into());
        }

        let course = courses::ActiveModel {
            name: Set(name.clone()),
            address: Set(req.address),
            city: Set(req.city),
            description: Set(req.description),
            golf_pro: Set(req.golf_pro),
            manager: Set(req.manager),
            hole_number: Set(req.hole_number),
            yardage: Set(req.yardage),
            phone: Set(req.phone),
            email: Set(req.email),
            lat: Set(req.lat),
            lng: Set(req.lng),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        info!("Course created: {name}");
        Ok(course.into())
    }

    pub async fn list_courses(&self) -> AppResult<Vec<CourseResponse>> {
        let rows = courses::Entity::find()
            .order_by_asc(courses::Column::Name)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(CourseResponse::from).collect())
    }
}
