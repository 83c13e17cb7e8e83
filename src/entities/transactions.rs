use crate::models::{TransactionCategory, TransactionStatus, TransactionType};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub txn_date: Date,
    pub customer: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: TransactionStatus,
    pub txn_type: TransactionType,
    pub category: TransactionCategory,
    pub course: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
