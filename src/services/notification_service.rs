use std::sync::Arc;
use crate::entities::notification_entity as notifications;
use crate::error::{AppError, AppResult};
use crate::external::SendGridService;
use crate::models::{NotificationResponse, NotificationStatus, SendEmailRequest};
use crate::utils::{normalize_email, validate_email};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

const LIST_LIMIT: u64 = 200;

#[derive(Clone)]
pub struct NotificationService {
    db: Arc<DatabaseConnection>,
    sendgrid: SendGridService,
}

impl NotificationService {
    pub fn new(db: Arc<DatabaseConnection>, sendgrid: SendGridService) -> Self {
        Self { db, sendgrid }
    }

    /// Sends an email and records the attempt. Failed sends are logged as
    /// rows too, so the admin can see what never went out.
    pub async fn send_email(&self, req: SendEmailRequest) -> AppResult<NotificationResponse> {
        let to = req
            .to
            .as_deref()
            .map(normalize_email)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("to is required".to_string()))?;
        validate_email(&to)?;
        let subject = req
            .subject
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("subject is required".to_string()))?
            .to_string();
        let body = req
            .text
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(req.html.as_deref().filter(|s| !s.trim().is_empty()))
            .ok_or_else(|| AppError::ValidationError("text or html is required".to_string()))?
            .to_string();

        let send_result = self.sendgrid.send_email(&to, &subject, &body).await;
        let status = if send_result.is_ok() {
            NotificationStatus::Sent
        } else {
            NotificationStatus::Failed
        };

        let notification = notifications::ActiveModel {
            recipient: Set(to),
            subject: Set(subject),
            body: Set(body),
            channel: Set("email".to_string()),
            status: Set(status),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;

        send_result?;
        Ok(notification.into())
    }

    pub async fn list_notifications(&self) -> AppResult<Vec<NotificationResponse>> {
        let rows = notifications::Entity::find()
            .order_by_desc(notifications::Column::CreatedAt)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(NotificationResponse::from).collect())
    }
}
