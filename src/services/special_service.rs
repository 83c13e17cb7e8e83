use std::sync::Arc;
use crate::entities::special_entity as specials;
use crate::error::{AppError, AppResult};
use crate::models::{CreateSpecialRequest, DiscountType, SpecialResponse, SpecialStatus};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

const LIST_LIMIT: u64 = 200;

fn parse_date(field: &str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match value {
        None => Ok(None),
        Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::ValidationError(format!("{field} must be YYYY-MM-DD, got '{d}'"))
            }),
    }
}

#[derive(Clone)]
pub struct SpecialService {
    db: Arc<DatabaseConnection>,
}

impl SpecialService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create_special(&self, req: CreateSpecialRequest) -> AppResult<SpecialResponse> {
        let title = req
            .title
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("title is required".to_string()))?
            .to_string();
        let discount_amount = req
            .discount_amount
            .ok_or_else(|| AppError::ValidationError("discountAmount is required".to_string()))?;
        if discount_amount <= 0 {
            return Err(AppError::ValidationError(
                "discountAmount must be positive".to_string(),
            ));
        }
        let discount_type = DiscountType::parse(
            req.discount_type
                .as_deref()
                .ok_or_else(|| AppError::ValidationError("discountType is required".to_string()))?,
        )?;
        let status = match req.status.as_deref() {
            Some(s) => SpecialStatus::parse(s)?,
            None => SpecialStatus::Active,
        };

        let special = specials::ActiveModel {
            title: Set(title),
            description: Set(req.description),
            discount_amount: Set(discount_amount),
            discount_type: Set(discount_type),
            valid_from: Set(parse_date("validFrom", req.valid_from.as_deref())?),
            valid_until: Set(parse_date("validUntil", req.valid_until.as_deref())?),
            status: Set(status),
            usage_count: Set(0),
            max_usage: Set(req.max_usage),
            code: Set(req.code),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(special.into())
    }

    pub async fn list_specials(&self) -> AppResult<Vec<SpecialResponse>> {
        let rows = specials::Entity::find()
            .order_by_desc(specials::Column::Id)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(SpecialResponse::from).collect())
    }
}
