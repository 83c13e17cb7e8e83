use std::sync::Arc;
use crate::entities::{claim_entity as claims, player_entity as players};
use crate::error::{AppError, AppResult};
use crate::external::SendGridService;
use crate::models::{
    json_string_array, ClaimQuery, ClaimResponse, ClaimStatus, ClaimType, DecideClaimRequest,
    SubmitClaimRequest, SubmitClaimResponse,
};
use crate::utils::{birdie_qr_payload, normalize_email, validate_email};
use chrono::Utc;
use log::{info, warn};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

const LIST_LIMIT: u64 = 200;

#[derive(Clone)]
pub struct ClaimService {
    db: Arc<DatabaseConnection>,
    sendgrid: SendGridService,
}

impl ClaimService {
    pub fn new(db: Arc<DatabaseConnection>, sendgrid: SendGridService) -> Self {
        Self { db, sendgrid }
    }

    /// Records a claim and credits the player ledger in one transaction, so a
    /// claim row never exists without its points and vice versa.
    pub async fn submit_claim(&self, req: SubmitClaimRequest) -> AppResult<SubmitClaimResponse> {
        let claim_type = ClaimType::parse(
            req.claim_type
                .as_deref()
                .ok_or_else(|| AppError::ValidationError("claimType is required".to_string()))?,
        )?;
        let player_name = req
            .player_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("playerName is required".to_string()))?
            .to_string();
        let raw_email = req
            .player_email
            .as_deref()
            .ok_or_else(|| AppError::ValidationError("playerEmail is required".to_string()))?;
        let player_email = normalize_email(raw_email);
        validate_email(&player_email)?;

        let txn = self.db.begin().await?;

        let claim = claims::ActiveModel {
            claim_type: Set(claim_type),
            player_name: Set(player_name.clone()),
            player_email: Set(player_email.clone()),
            player_phone: Set(req.player_phone),
            outfit_description: Set(req.outfit_description),
            tee_time: Set(req.tee_time),
            course_id: Set(req.course_id.clone()),
            hole: Set(req.hole),
            payment_method: Set(req.payment_method),
            prize_amount_cents: Set(claim_type.prize_amount_cents()),
            status: Set(ClaimStatus::Pending),
            media_url: Set(req.media_url),
            video_ref: Set(req.video_ref),
            submitted_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        award_claim(
            &txn,
            &player_email,
            Some(&player_name),
            claim_type,
            req.course_id.as_deref(),
        )
        .await?;

        txn.commit().await?;

        info!(
            "Claim {} recorded: {} by {player_email}",
            claim.id,
            claim_type.as_str()
        );

        let qr_payload = matches!(claim_type, ClaimType::Birdie)
            .then(|| birdie_qr_payload(claim.id, claim.course_id.as_deref()));

        Ok(SubmitClaimResponse {
            claim: claim.into(),
            qr_payload,
        })
    }

    pub async fn list_claims(&self, query: &ClaimQuery) -> AppResult<Vec<ClaimResponse>> {
        let mut select = claims::Entity::find();
        if let Some(status) = query.status.as_deref() {
            select = select.filter(claims::Column::Status.eq(ClaimStatus::parse(status)?));
        }
        let rows = select
            .order_by_desc(claims::Column::SubmittedAt)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(ClaimResponse::from).collect())
    }

    pub async fn get_claim(&self, id: i64) -> AppResult<ClaimResponse> {
        let claim = claims::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Claim {id} not found")))?;
        Ok(claim.into())
    }

    /// Moves a claim out of pending. The ops inbox is notified best-effort;
    /// a mail failure never rolls back the decision.
    pub async fn decide_claim(&self, id: i64, req: DecideClaimRequest) -> AppResult<ClaimResponse> {
        let status = ClaimStatus::parse(&req.status)?;
        let claim = claims::Entity::find_by_id(id)
            .one(&*self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Claim {id} not found")))?;

        let mut active: claims::ActiveModel = claim.into();
        active.status = Set(status);
        if let Some(notes) = req.notes {
            active.notes = Set(Some(notes));
        }
        let claim = active.update(&*self.db).await?;

        if let Some(ops_email) = self.sendgrid.ops_email.clone() {
            let subject = format!("Claim {} {:?}", claim.id, status);
            let body = format!(
                "Claim {} ({}) by {} is now {:?}.",
                claim.id,
                claim.claim_type.as_str(),
                claim.player_email,
                status
            );
            if let Err(e) = self.sendgrid.send_email(&ops_email, &subject, &body).await {
                warn!("Ops notification for claim {} failed: {e}", claim.id);
            }
        }

        Ok(claim.into())
    }

    pub async fn delete_claim(&self, id: i64) -> AppResult<()> {
        let deleted = claims::Entity::delete_by_id(id).exec(&*self.db).await?;
        if deleted.rows_affected == 0 {
            return Err(AppError::NotFound(format!("Claim {id} not found")));
        }
        info!("Claim {id} deleted");
        Ok(())
    }
}

/// Credits a claim to the player ledger inside the caller's transaction:
/// points increment atomically, the award and course arrays grow, and the
/// million-dollar flag only ever flips to true.
async fn award_claim(
    txn: &DatabaseTransaction,
    player_email: &str,
    player_name: Option<&str>,
    claim_type: ClaimType,
    course_id: Option<&str>,
) -> AppResult<()> {
    let existing = players::Entity::find()
        .filter(players::Column::PlayerEmail.eq(player_email))
        .one(txn)
        .await?;

    match existing {
        Some(player) => {
            let mut courses = json_string_array(&player.courses_played);
            if let Some(course) = course_id.filter(|c| !c.is_empty())
                && !courses.iter().any(|c| c == course)
            {
                courses.push(course.to_string());
            }
            let mut awards = json_string_array(&player.awards);
            awards.push(claim_type.as_str().to_string());

            let mut update = players::Entity::update_many()
                .filter(players::Column::Id.eq(player.id))
                .col_expr(
                    players::Column::Points,
                    Expr::col(players::Column::Points).add(claim_type.award_points()),
                )
                .col_expr(
                    players::Column::CoursesPlayed,
                    Expr::value(serde_json::json!(courses)),
                )
                .col_expr(players::Column::Awards, Expr::value(serde_json::json!(awards)))
                .col_expr(players::Column::UpdatedAt, Expr::value(Utc::now()));
            if claim_type.qualifies_for_million() {
                update = update.col_expr(players::Column::QualifiedForMillion, Expr::value(true));
            }
            update.exec(txn).await?;
        }
        None => {
            let courses: Vec<String> = course_id
                .filter(|c| !c.is_empty())
                .map(|c| vec![c.to_string()])
                .unwrap_or_default();
            players::ActiveModel {
                player_email: Set(player_email.to_string()),
                player_name: Set(player_name.map(str::to_string)),
                points: Set(claim_type.award_points()),
                courses_played: Set(serde_json::json!(courses)),
                awards: Set(serde_json::json!([claim_type.as_str()])),
                qualified_for_million: Set(claim_type.qualifies_for_million()),
                created_at: Set(Some(Utc::now())),
                updated_at: Set(Some(Utc::now())),
                ..Default::default()
            }
            .insert(txn)
            .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SendGridConfig;
    use crate::models::SubmitClaimRequest;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn player(points: i64, courses: &[&str], qualified: bool) -> players::Model {
        players::Model {
            id: 7,
            player_email: "jane@x.com".to_string(),
            player_name: Some("Jane Doe".to_string()),
            player_phone: None,
            points,
            courses_played: serde_json::json!(courses),
            awards: serde_json::json!(["hole_in_one"]),
            qualified_for_million: qualified,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn first_hole_in_one_creates_qualified_player() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // lookup misses, then the insert returns the fresh row
            .append_query_results([Vec::<players::Model>::new()])
            .append_query_results([vec![player(800, &["wentworth-gc"], true)]])
            .into_connection();

        let txn = db.begin().await.unwrap();
        award_claim(
            &txn,
            "jane@x.com",
            Some("Jane Doe"),
            ClaimType::HoleInOne,
            Some("wentworth-gc"),
        )
        .await
        .unwrap();
        txn.commit().await.unwrap();

        let log = format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"");
        assert!(log.contains(r#"INSERT INTO "players""#));
        // Full award and qualification from the very first claim.
        assert!(log.contains("BigInt(Some(800))"));
        assert!(log.contains("Bool(Some(true))"));
        assert!(log.contains("wentworth-gc"));
    }

    #[tokio::test]
    async fn birdie_increments_without_touching_qualification() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![player(800, &["wentworth-gc"], true)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let txn = db.begin().await.unwrap();
        award_claim(
            &txn,
            "jane@x.com",
            None,
            ClaimType::Birdie,
            Some("wentworth-gc"),
        )
        .await
        .unwrap();
        txn.commit().await.unwrap();

        let log = format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"");
        assert!(log.contains(r#"UPDATE "players""#));
        // Points move by a column expression, not a replacement value.
        assert!(log.contains("BigInt(Some(200))"));
        // The column shows up once in the SELECT list only; the birdie
        // update never names it, so the earlier true is preserved.
        assert_eq!(log.matches("qualified_for_million").count(), 1);
        // Already-played course is not re-appended.
        assert_eq!(log.matches("wentworth-gc").count(), 1);
    }

    #[tokio::test]
    async fn hole_in_one_raises_qualification_on_existing_player() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![player(200, &[], false)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let txn = db.begin().await.unwrap();
        award_claim(&txn, "jane@x.com", None, ClaimType::HoleInOne, Some("meadow-brook"))
            .await
            .unwrap();
        txn.commit().await.unwrap();

        let log = format!("{:?}", db.into_transaction_log()).replace("\\\"", "\"");
        // SELECT list plus the SET clause that raises the flag.
        assert_eq!(log.matches("qualified_for_million").count(), 2);
        assert!(log.contains("BigInt(Some(800))"));
        assert!(log.contains("meadow-brook"));
    }

    #[tokio::test]
    async fn intake_rejects_missing_email_before_any_write() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let service = ClaimService::new(
            db.clone(),
            SendGridService::new(&SendGridConfig::default()),
        );

        let result = service
            .submit_claim(SubmitClaimRequest {
                claim_type: Some("birdie".to_string()),
                player_name: Some("Jane Doe".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        drop(service);
        let db = Arc::into_inner(db).unwrap();
        assert!(db.into_transaction_log().is_empty());
    }
}
