use crate::entities::transaction_entity as transactions;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_status")]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "failed")]
    Failed,
}

impl TransactionStatus {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            other => Err(AppError::ValidationError(format!(
                "status must be completed, pending or failed, got '{other}'"
            ))),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_type")]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    #[sea_orm(string_value = "income")]
    Income,
    #[sea_orm(string_value = "expense")]
    Expense,
}

impl TransactionType {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(AppError::ValidationError(format!(
                "type must be income or expense, got '{other}'"
            ))),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "transaction_category")]
#[serde(rename_all = "kebab-case")]
pub enum TransactionCategory {
    #[sea_orm(string_value = "daily_play")]
    DailyPlay,
    #[sea_orm(string_value = "shootout_tournament")]
    ShootoutTournament,
    #[sea_orm(string_value = "course")]
    Course,
    #[sea_orm(string_value = "marketing")]
    Marketing,
}

impl TransactionCategory {
    /// The admin UI sends kebab-case category names.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily-play" | "daily_play" => Ok(Self::DailyPlay),
            "shootout-tournament" | "shootout_tournament" => Ok(Self::ShootoutTournament),
            "course" => Ok(Self::Course),
            "marketing" => Ok(Self::Marketing),
            other => Err(AppError::ValidationError(format!(
                "category must be daily-play, shootout-tournament, course or marketing, got '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    #[schema(example = "2024-03-14")]
    pub date: Option<String>,
    pub customer: Option<String>,
    pub description: Option<String>,
    pub amount_cents: Option<i64>,
    #[schema(example = "completed")]
    pub status: Option<String>,
    #[serde(rename = "type")]
    #[schema(example = "income")]
    pub txn_type: Option<String>,
    #[schema(example = "daily-play")]
    pub category: Option<String>,
    pub course: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub customer: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: TransactionStatus,
    #[serde(rename = "type")]
    pub txn_type: TransactionType,
    pub category: TransactionCategory,
    pub course: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<transactions::Model> for TransactionResponse {
    fn from(t: transactions::Model) -> Self {
        Self {
            id: t.id,
            date: t.txn_date,
            customer: t.customer,
            description: t.description,
            amount_cents: t.amount_cents,
            status: t.status,
            txn_type: t.txn_type,
            category: t.category,
            course: t.course,
            created_at: t.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountingSummary {
    pub total_revenue_cents: i64,
    pub revenue_by_course: BTreeMap<String, i64>,
    pub marketing_revenue_cents: i64,
    pub total_expenses_cents: i64,
    pub net_profit_cents: i64,
    pub transactions: Vec<TransactionResponse>,
}

/// Summary over completed transactions only; pending and failed rows never
/// count toward the books.
pub fn compute_summary(completed: Vec<transactions::Model>) -> AccountingSummary {
    let mut total_revenue = 0i64;
    let mut marketing_revenue = 0i64;
    let mut total_expenses = 0i64;
    let mut revenue_by_course: BTreeMap<String, i64> = BTreeMap::new();

    for t in &completed {
        // The marketing line counts every completed marketing transaction,
        // income or expense alike.
        if t.category == TransactionCategory::Marketing {
            marketing_revenue += t.amount_cents;
        }
        match t.txn_type {
            TransactionType::Income => {
                total_revenue += t.amount_cents;
                if let Some(course) = t.course.as_deref().filter(|c| !c.is_empty()) {
                    *revenue_by_course.entry(course.to_string()).or_default() += t.amount_cents;
                }
            }
            TransactionType::Expense => total_expenses += t.amount_cents,
        }
    }

    AccountingSummary {
        total_revenue_cents: total_revenue,
        revenue_by_course,
        marketing_revenue_cents: marketing_revenue,
        total_expenses_cents: total_expenses,
        net_profit_cents: total_revenue - total_expenses,
        transactions: completed.into_iter().map(TransactionResponse::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(
        id: i64,
        amount_cents: i64,
        txn_type: TransactionType,
        category: TransactionCategory,
        course: Option<&str>,
    ) -> transactions::Model {
        transactions::Model {
            id,
            txn_date: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            customer: "Test".to_string(),
            description: "Test".to_string(),
            amount_cents,
            status: TransactionStatus::Completed,
            txn_type,
            category,
            course: course.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn test_compute_summary() {
        let summary = compute_summary(vec![
            txn(1, 2_500, TransactionType::Income, TransactionCategory::DailyPlay, Some("Sunset Valley")),
            txn(2, 5_000, TransactionType::Income, TransactionCategory::ShootoutTournament, Some("Sunset Valley")),
            txn(3, 15_000, TransactionType::Expense, TransactionCategory::Course, Some("Meadow Brook")),
            txn(4, 50_000, TransactionType::Income, TransactionCategory::Marketing, None),
            txn(5, 10_000, TransactionType::Expense, TransactionCategory::Marketing, None),
        ]);

        assert_eq!(summary.total_revenue_cents, 57_500);
        // Marketing counts its expense rows too; they also land in expenses.
        assert_eq!(summary.marketing_revenue_cents, 60_000);
        assert_eq!(summary.total_expenses_cents, 25_000);
        assert_eq!(summary.net_profit_cents, 32_500);
        assert_eq!(summary.revenue_by_course.get("Sunset Valley"), Some(&7_500));
        // Expense rows never contribute to per-course revenue.
        assert_eq!(summary.revenue_by_course.get("Meadow Brook"), None);
        assert_eq!(summary.transactions.len(), 5);
    }

    #[test]
    fn test_compute_summary_empty() {
        let summary = compute_summary(vec![]);
        assert_eq!(summary.total_revenue_cents, 0);
        assert_eq!(summary.net_profit_cents, 0);
        assert!(summary.revenue_by_course.is_empty());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            TransactionCategory::parse("daily-play").unwrap(),
            TransactionCategory::DailyPlay
        );
        assert_eq!(
            TransactionCategory::parse("shootout_tournament").unwrap(),
            TransactionCategory::ShootoutTournament
        );
        assert!(TransactionCategory::parse("merch").is_err());
    }
}
