use std::sync::Arc;
use crate::entities::customer_entity as customers;
use crate::error::{AppError, AppResult};
use crate::models::{CreateCustomerRequest, CustomerResponse};
use crate::utils::{normalize_email, validate_email};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set,
};

const LIST_LIMIT: u64 = 200;

#[derive(Clone)]
pub struct CustomerService {
    db: Arc<DatabaseConnection>,
}

impl CustomerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn create_customer(&self, req: CreateCustomerRequest) -> AppResult<CustomerResponse> {
        let name = req
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("name is required".to_string()))?
            .to_string();
        let email = req
            .email
            .as_deref()
            .map(normalize_email)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::ValidationError("email is required".to_string()))?;
        validate_email(&email)?;

        let customer = customers::ActiveModel {
            name: Set(name),
            email: Set(email),
            phone: Set(req.phone),
            company: Set(req.company),
            notes: Set(req.notes),
            join_date: Set(Utc::now().date_naive()),
            total_bookings: Set(0),
            status: Set(req.status.unwrap_or_else(|| "active".to_string())),
            ..Default::default()
        }
        .insert(&*self.db)
        .await?;
        Ok(customer.into())
    }

    pub async fn list_customers(&self) -> AppResult<Vec<CustomerResponse>> {
        let rows = customers::Entity::find()
            .order_by_desc(customers::Column::Id)
            .limit(LIST_LIMIT)
            .all(&*self.db)
            .await?;
        Ok(rows.into_iter().map(CustomerResponse::from).collect())
    }
}
