use crate::entities::notification_entity as notifications;
use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "notification_status")]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    #[sea_orm(string_value = "sent")]
    Sent,
    #[sea_orm(string_value = "failed")]
    Failed,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    #[schema(example = "jane@x.com")]
    pub to: Option<String>,
    pub subject: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: i64,
    pub recipient: String,
    pub subject: String,
    pub channel: String,
    pub status: NotificationStatus,
    pub created_at: DateTime<Utc>,
}

impl From<notifications::Model> for NotificationResponse {
    fn from(n: notifications::Model) -> Self {
        Self {
            id: n.id,
            recipient: n.recipient,
            subject: n.subject,
            channel: n.channel,
            status: n.status,
            created_at: n.created_at,
        }
    }
}
