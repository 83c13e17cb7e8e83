use crate::entities::special_entity as specials;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "discount_type")]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    #[sea_orm(string_value = "percentage")]
    Percentage,
    #[sea_orm(string_value = "fixed")]
    Fixed,
}

impl DiscountType {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "percentage" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            other => Err(AppError::ValidationError(format!(
                "discountType must be percentage or fixed, got '{other}'"
            ))),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "special_status")]
#[serde(rename_all = "snake_case")]
pub enum SpecialStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
    #[sea_orm(string_value = "expired")]
    Expired,
}

impl SpecialStatus {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            "expired" => Ok(Self::Expired),
            other => Err(AppError::ValidationError(format!(
                "status must be active, inactive or expired, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecialRequest {
    #[schema(example = "Weekend Warrior")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount_amount: Option<i64>,
    #[schema(example = "fixed")]
    pub discount_type: Option<String>,
    #[schema(example = "2025-03-01")]
    pub valid_from: Option<String>,
    #[schema(example = "2025-03-31")]
    pub valid_until: Option<String>,
    pub status: Option<String>,
    pub max_usage: Option<i64>,
    pub code: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SpecialResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub discount_amount: i64,
    pub discount_type: DiscountType,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub status: SpecialStatus,
    pub usage_count: i64,
    pub max_usage: Option<i64>,
    pub code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<specials::Model> for SpecialResponse {
    fn from(s: specials::Model) -> Self {
        Self {
            id: s.id,
            title: s.title,
            description: s.description,
            discount_amount: s.discount_amount,
            discount_type: s.discount_type,
            valid_from: s.valid_from,
            valid_until: s.valid_until,
            status: s.status,
            usage_count: s.usage_count,
            max_usage: s.max_usage,
            code: s.code,
            created_at: s.created_at,
        }
    }
}
