use crate::models::{ClaimStatus, ClaimType};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub claim_type: ClaimType,
    pub player_name: String,
    pub player_email: String,
    pub player_phone: Option<String>,
    pub outfit_description: Option<String>,
    pub tee_time: Option<String>,
    pub course_id: Option<String>,
    pub hole: Option<String>,
    pub payment_method: Option<String>,
    pub prize_amount_cents: i64,
    pub status: ClaimStatus,
    pub notes: Option<String>,
    pub media_url: Option<String>,
    pub video_ref: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
