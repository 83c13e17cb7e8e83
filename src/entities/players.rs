use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "players")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Normalized (trimmed, lower-cased) and unique; the join key from claims.
    pub player_email: String,
    pub player_name: Option<String>,
    pub player_phone: Option<String>,
    pub points: i64,
    /// JSON array of course identifiers, append-only and de-duplicated.
    pub courses_played: Json,
    /// JSON array of claim-type strings, append-only.
    pub awards: Json,
    pub qualified_for_million: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
