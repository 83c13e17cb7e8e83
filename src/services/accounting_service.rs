use std::sync::Arc;
use crate::entities::transaction_entity as transactions;
use crate::error::{AppError, AppResult};
use crate::models::{
    compute_summary, AccountingSummary, CreateTransactionRequest, TransactionCategory,
    TransactionResponse, TransactionStatus, TransactionType,
};
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

const LIST_LIMIT: u64 = 200;

#[derive(Clone)]
pub struct AccountingService {
    db: Arc<DatabaseConnection>,
}

impl AccountingService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create_transaction(
        &self,
        req: CreateTransactionRequest,
    ) -> AppResult<TransactionResponse> {
        let customer = req
            .customer
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("customer is required".to_string()))?
            .to_string();
        let description = req
            .description
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("description is required".to_string()))?
            .to_string();
        let amount_cents = req
            .amount_cents
            .ok_or_else(|| AppError::ValidationError("amountCents is required".to_string()))?;
        if amount_cents <= 0 {
            return Err(AppError::ValidationError(
                "amountCents must be positive".to_string(),
            ));
        }
        let txn_type = TransactionType::parse(
            req.txn_type
                .as_deref()
                .ok_or_else(|| AppError::ValidationError("type is required".to_string()))?,
        )?;
        let category = TransactionCategory::parse(
            req.category
                .as_deref()
                .ok_or_else(|| AppError::ValidationError("category is required".to_string()))?,
        )?;
        let status = match req.status.as_deref() {
            Some(s) => TransactionStatus::parse(s)?,
            None => TransactionStatus::Completed,
        };
        let txn_date = match req.date.as_deref() {
            Some(d) => NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                AppError::ValidationError(format!("date must be YYYY-MM-DD, got '{d}'"))
            })?,
            None => Utc::now().date_naive(),
        };

        let row = transactions::ActiveModel {
            txn_date: Set(txn_date),
            customer: Set(customer),
            description: Set(description),
            amount_cents: Set(amount_cents),
            status: Set(status),
            txn_type: Set(txn_type),
            category: Set(category),
            course: Set(req.course),
            created_at: Set(Some(Utc::now())),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(row.into())
    }

    pub async fn list_transactions(&self) -> AppResult<Vec<TransactionResponse>> {
        let rows = transactions::Entity::find()
            .order_by_desc(transactions::Column::TxnDate)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(TransactionResponse::from).collect())
    }

    /// Books are computed from completed transactions only.
    pub async fn summary(&self) -> AppResult<AccountingSummary> {
        let completed = transactions::Entity::find()
            .filter(transactions::Column::Status.eq(TransactionStatus::Completed))
            .order_by_desc(transactions::Column::TxnDate)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(compute_summary(completed))
    }
}
