use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Minimum chargeable amount Stripe accepts, in cents.
pub const MIN_PAYMENT_CENTS: i64 = 100;
/// Default charge when the kiosk omits an amount (one round, in cents).
pub const DEFAULT_PAYMENT_CENTS: i64 = 800;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentRequest {
    pub amount_cents: Option<i64>,
    #[schema(example = "usd")]
    pub currency: Option<String>,
    #[schema(value_type = Object)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub payment_intent_id: String,
    pub client_secret: String,
    pub amount_cents: i64,
    pub currency: String,
}
