use crate::entities::player_entity as players;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Upsert payload. Front-end variants used several field spellings over
/// time ("playerEmail"/"email", "playerName"/"name", first+last), so the
/// aliases are all accepted and folded down in the accessors.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPlayerRequest {
    pub player_email: Option<String>,
    pub email: Option<String>,
    pub player_name: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub player_phone: Option<String>,
    pub phone: Option<String>,
    pub course_id: Option<String>,
    pub course: Option<String>,
    /// Explicit ledger override (admin correction path), distinct from the
    /// claim award path.
    pub points: Option<i64>,
    pub qualified_for_million: Option<bool>,
}

fn non_blank(opt: Option<&str>) -> Option<&str> {
    opt.filter(|s| !s.trim().is_empty())
}

impl UpsertPlayerRequest {
    pub fn effective_email(&self) -> Option<&str> {
        non_blank(self.player_email.as_deref()).or(non_blank(self.email.as_deref()))
    }

    pub fn effective_name(&self) -> Option<String> {
        if let Some(name) =
            non_blank(self.player_name.as_deref()).or(non_blank(self.name.as_deref()))
        {
            return Some(name.trim().to_string());
        }
        let joined = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() { None } else { Some(joined) }
    }

    pub fn effective_phone(&self) -> Option<&str> {
        non_blank(self.player_phone.as_deref()).or(non_blank(self.phone.as_deref()))
    }

    pub fn effective_course(&self) -> Option<&str> {
        non_blank(self.course_id.as_deref()).or(non_blank(self.course.as_deref()))
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlayerQuery {
    pub compact: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePlayerRequest {
    pub id: Option<i64>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub player_email: String,
    pub player_name: Option<String>,
    pub player_phone: Option<String>,
    pub points: i64,
    pub courses_played: Vec<String>,
    pub awards: Vec<String>,
    pub qualified_for_million: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompactPlayerResponse {
    pub player_email: String,
    pub player_name: Option<String>,
    pub points: i64,
    pub qualified_for_million: bool,
}

/// The courses/awards columns are JSON arrays of strings; anything else in
/// there (from older writers) is dropped rather than erroring the read path.
pub fn json_string_array(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

impl From<players::Model> for PlayerResponse {
    fn from(player: players::Model) -> Self {
        Self {
            id: player.id,
            player_email: player.player_email,
            player_name: player.player_name,
            player_phone: player.player_phone,
            points: player.points,
            courses_played: json_string_array(&player.courses_played),
            awards: json_string_array(&player.awards),
            qualified_for_million: player.qualified_for_million,
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}

impl From<PlayerResponse> for CompactPlayerResponse {
    fn from(player: PlayerResponse) -> Self {
        Self {
            player_email: player.player_email,
            player_name: player.player_name,
            points: player.points,
            qualified_for_million: player.qualified_for_million,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_effective_email_prefers_player_email() {
        let req = UpsertPlayerRequest {
            player_email: Some("a@b.com".to_string()),
            email: Some("other@b.com".to_string()),
            ..Default::default()
        };
        assert_eq!(req.effective_email(), Some("a@b.com"));
    }

    #[test]
    fn test_effective_email_falls_back_and_rejects_blank() {
        let req = UpsertPlayerRequest {
            player_email: Some("  ".to_string()),
            email: Some("fallback@b.com".to_string()),
            ..Default::default()
        };
        // A blank primary field falls through to the alias.
        assert_eq!(req.effective_email(), Some("fallback@b.com"));

        let req = UpsertPlayerRequest::default();
        assert_eq!(req.effective_email(), None);
    }

    #[test]
    fn test_effective_name_joins_first_last() {
        let req = UpsertPlayerRequest {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            ..Default::default()
        };
        assert_eq!(req.effective_name(), Some("Jane Doe".to_string()));
    }

    #[test]
    fn test_json_string_array() {
        assert_eq!(
            json_string_array(&json!(["a", "b"])),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(json_string_array(&json!(["a", 1, null])), vec!["a".to_string()]);
        assert!(json_string_array(&json!({})).is_empty());
        assert!(json_string_array(&json!(null)).is_empty());
    }
}
