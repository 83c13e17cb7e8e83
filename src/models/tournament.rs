use crate::entities::tournament_entity as tournaments;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upsert payload: an `id` updates that tournament, no `id` inserts a new
/// one. The platform treats the most recently saved row as "current".
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveTournamentRequest {
    pub id: Option<i64>,
    #[schema(example = "$1 Million Shootout")]
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub registration: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub id: i64,
    pub name: String,
    pub date: Option<String>,
    pub location: Option<String>,
    pub registration: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<tournaments::Model> for TournamentResponse {
    fn from(t: tournaments::Model) -> Self {
        Self {
            id: t.id,
            name: t.name,
            date: t.date,
            location: t.location,
            registration: t.registration,
            updated_at: t.updated_at,
        }
    }
}
