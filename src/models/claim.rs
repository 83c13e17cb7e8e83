use crate::entities::claim_entity as claims;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Points credited to the player ledger per claim type.
pub const BIRDIE_AWARD_POINTS: i64 = 200;
pub const HOLE_IN_ONE_AWARD_POINTS: i64 = 800;

/// Prize amounts in cents, fixed per claim type at intake.
pub const BIRDIE_PRIZE_CENTS: i64 = 6_500;
pub const HOLE_IN_ONE_PRIZE_CENTS: i64 = 100_000;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "claim_type")]
#[serde(rename_all = "snake_case")]
pub enum ClaimType {
    #[sea_orm(string_value = "birdie")]
    Birdie,
    #[sea_orm(string_value = "hole_in_one")]
    HoleInOne,
}

impl ClaimType {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "birdie" => Ok(Self::Birdie),
            "hole_in_one" | "hole-in-one" => Ok(Self::HoleInOne),
            other => Err(AppError::ValidationError(format!(
                "claimType must be birdie or hole_in_one, got '{other}'"
            ))),
        }
    }

    pub fn award_points(&self) -> i64 {
        match self {
            Self::Birdie => BIRDIE_AWARD_POINTS,
            Self::HoleInOne => HOLE_IN_ONE_AWARD_POINTS,
        }
    }

    pub fn prize_amount_cents(&self) -> i64 {
        match self {
            Self::Birdie => BIRDIE_PRIZE_CENTS,
            Self::HoleInOne => HOLE_IN_ONE_PRIZE_CENTS,
        }
    }

    /// Only a hole-in-one qualifies a player for the million-dollar shootout.
    pub fn qualifies_for_million(&self) -> bool {
        matches!(self, Self::HoleInOne)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Birdie => "birdie",
            Self::HoleInOne => "hole_in_one",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "claim_status")]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "verified")]
    Verified,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl ClaimStatus {
    /// Accepts the admin UI's historical vocabulary: "approved" and "denied"
    /// map onto the stored verified/rejected values.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "verified" | "approved" => Ok(Self::Verified),
            "rejected" | "denied" => Ok(Self::Rejected),
            other => Err(AppError::ValidationError(format!(
                "status must be pending, verified/approved or rejected/denied, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClaimRequest {
    #[schema(example = "hole_in_one")]
    pub claim_type: Option<String>,
    #[schema(example = "Jane Doe")]
    pub player_name: Option<String>,
    #[schema(example = "jane@x.com")]
    pub player_email: Option<String>,
    pub player_phone: Option<String>,
    pub outfit_description: Option<String>,
    #[schema(example = "2:30 PM")]
    pub tee_time: Option<String>,
    #[schema(example = "wentworth-gc")]
    pub course_id: Option<String>,
    pub hole: Option<String>,
    pub payment_method: Option<String>,
    pub media_url: Option<String>,
    pub video_ref: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DecideClaimRequest {
    #[schema(example = "verified")]
    pub status: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClaimQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
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

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClaimResponse {
    pub claim: ClaimResponse,
    /// Present for birdie claims only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_payload: Option<String>,
}

impl From<claims::Model> for ClaimResponse {
    fn from(claim: claims::Model) -> Self {
        Self {
            id: claim.id,
            claim_type: claim.claim_type,
            player_name: claim.player_name,
            player_email: claim.player_email,
            player_phone: claim.player_phone,
            outfit_description: claim.outfit_description,
            tee_time: claim.tee_time,
            course_id: claim.course_id,
            hole: claim.hole,
            payment_method: claim.payment_method,
            prize_amount_cents: claim.prize_amount_cents,
            status: claim.status,
            notes: claim.notes,
            media_url: claim.media_url,
            video_ref: claim.video_ref,
            submitted_at: claim.submitted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_type_parse() {
        assert_eq!(ClaimType::parse("birdie").unwrap(), ClaimType::Birdie);
        assert_eq!(ClaimType::parse("hole_in_one").unwrap(), ClaimType::HoleInOne);
        assert_eq!(ClaimType::parse("HOLE-IN-ONE").unwrap(), ClaimType::HoleInOne);
        assert!(ClaimType::parse("eagle").is_err());
        assert!(ClaimType::parse("").is_err());
    }

    #[test]
    fn test_award_rule() {
        assert_eq!(ClaimType::Birdie.award_points(), 200);
        assert_eq!(ClaimType::HoleInOne.award_points(), 800);
        assert!(!ClaimType::Birdie.qualifies_for_million());
        assert!(ClaimType::HoleInOne.qualifies_for_million());
    }

    #[test]
    fn test_prize_amounts() {
        assert_eq!(ClaimType::Birdie.prize_amount_cents(), 6_500);
        assert_eq!(ClaimType::HoleInOne.prize_amount_cents(), 100_000);
    }

    #[test]
    fn test_claim_status_parse_aliases() {
        assert_eq!(ClaimStatus::parse("pending").unwrap(), ClaimStatus::Pending);
        assert_eq!(ClaimStatus::parse("verified").unwrap(), ClaimStatus::Verified);
        assert_eq!(ClaimStatus::parse("approved").unwrap(), ClaimStatus::Verified);
        assert_eq!(ClaimStatus::parse("rejected").unwrap(), ClaimStatus::Rejected);
        assert_eq!(ClaimStatus::parse("denied").unwrap(), ClaimStatus::Rejected);
        assert_eq!(ClaimStatus::parse(" Verified ").unwrap(), ClaimStatus::Verified);
    }

    #[test]
    fn test_claim_status_parse_rejects_unknown() {
        assert!(ClaimStatus::parse("paid").is_err());
        assert!(ClaimStatus::parse("").is_err());
    }
}
