use crate::models::{DiscountType, SpecialStatus};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "specials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub discount_amount: i64,
    pub discount_type: DiscountType,
    pub valid_from: Option<Date>,
    pub valid_until: Option<Date>,
    pub status: SpecialStatus,
    pub usage_count: i64,
    pub max_usage: Option<i64>,
    pub code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
