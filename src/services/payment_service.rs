use crate::error::{AppError, AppResult};
use crate::external::StripeService;
use crate::models::{
    CreatePaymentIntentRequest, CreatePaymentIntentResponse, DEFAULT_PAYMENT_CENTS,
    MIN_PAYMENT_CENTS,
};
use std::collections::BTreeMap;

#[derive(Clone)]
pub struct PaymentService {
    stripe: StripeService,
}

impl PaymentService {
    pub fn new(stripe: StripeService) -> Self {
        Self { stripe }
    }

    pub async fn create_payment_intent(
        &self,
        req: CreatePaymentIntentRequest,
    ) -> AppResult<CreatePaymentIntentResponse> {
        let amount_cents = req.amount_cents.unwrap_or(DEFAULT_PAYMENT_CENTS);
        if amount_cents < MIN_PAYMENT_CENTS {
            return Err(AppError::ValidationError(format!(
                "amountCents must be at least {MIN_PAYMENT_CENTS}"
            )));
        }
        let currency = req
            .currency
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or("usd")
            .to_ascii_lowercase();
        let metadata = metadata_strings(req.metadata.as_ref());

        let intent = self
            .stripe
            .create_payment_intent(amount_cents, &currency, &metadata)
            .await?;

        Ok(CreatePaymentIntentResponse {
            payment_intent_id: intent.id,
            client_secret: intent.client_secret,
            amount_cents: intent.amount,
            currency: intent.currency,
        })
    }
}

/// Stripe metadata values must be strings; scalars are stringified and
/// nested structures dropped.
fn metadata_strings(metadata: Option<&serde_json::Value>) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    if let Some(obj) = metadata.and_then(|m| m.as_object()) {
        for (key, value) in obj {
            let rendered = match value {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Number(n) => Some(n.to_string()),
                serde_json::Value::Bool(b) => Some(b.to_string()),
                _ => None,
            };
            if let Some(v) = rendered {
                out.insert(key.clone(), v);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_strings() {
        let metadata = json!({
            "claimId": 42,
            "kind": "entry",
            "retry": true,
            "nested": { "dropped": 1 },
        });
        let out = metadata_strings(Some(&metadata));
        assert_eq!(out.get("claimId"), Some(&"42".to_string()));
        assert_eq!(out.get("kind"), Some(&"entry".to_string()));
        assert_eq!(out.get("retry"), Some(&"true".to_string()));
        assert!(!out.contains_key("nested"));
    }

    #[test]
    fn test_metadata_strings_absent() {
        assert!(metadata_strings(None).is_empty());
        assert!(metadata_strings(Some(&json!("not an object"))).is_empty());
    }
}
