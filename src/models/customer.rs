use crate::entities::customer_entity as customers;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    #[schema(example = "active")]
    pub status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub join_date: NaiveDate,
    pub last_activity: Option<NaiveDate>,
    pub total_bookings: i64,
    pub status: String,
}

impl From<customers::Model> for CustomerResponse {
    fn from(c: customers::Model) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            company: c.company,
            notes: c.notes,
            join_date: c.join_date,
            last_activity: c.last_activity,
            total_bookings: c.total_bookings,
            status: c.status,
        }
    }
}
